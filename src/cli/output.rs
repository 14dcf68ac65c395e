//! Colored terminal rendering for chat replies.

use colored::Colorize;

use crate::currency::format_currency;
use crate::services::CategorySlice;

const BAR_WIDTH: f64 = 24.0;

pub(super) fn banner() {
    println!("{}", "Finbot - your money, in plain English.".bold());
    println!(
        "{}",
        format!(
            "build {} ({})",
            env!("FINBOT_CORE_BUILD_HASH"),
            env!("FINBOT_CORE_BUILD_TIMESTAMP")
        )
        .dimmed()
    );
    println!("Describe an expense, or try \"summary\", \"chart\", \"undo\". \"exit\" to quit.");
}

pub(super) fn bot(message: &str) {
    println!("{} {}", "bot>".green().bold(), message);
}

pub(super) fn info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn hint(message: &str) {
    println!("{} {}", "hint>".yellow(), message);
}

pub(super) fn chart(slices: &[CategorySlice], currency: &str) {
    let max = slices.first().map(|slice| slice.total).unwrap_or(0.0);
    for slice in slices {
        let width = if max > 0.0 {
            ((slice.total / max) * BAR_WIDTH).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(width.max(1));
        println!(
            "  {:<14} {:>12}  {:>5.1}%  {}",
            slice.category,
            format_currency(currency, slice.total),
            slice.percentage,
            bar.cyan()
        );
    }
}
