//! Shared helpers: tracing setup and small text utilities.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("finbot_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Case-insensitive whole-word containment; words are runs of alphanumerics.
pub fn contains_word(text: &str, word: &str) -> bool {
    let needle = word.to_lowercase();
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == needle)
}
