use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=FINBOT_CORE_BUILD_TIMESTAMP={timestamp}");
    println!("cargo:rustc-env=FINBOT_CORE_BUILD_HASH={}", git_short_hash());
}

fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
