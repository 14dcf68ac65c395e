//! Display-only currency formatting; the symbol never enters arithmetic.

/// Formats an amount with the configured symbol and two decimals.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Formats a delta with an explicit sign ahead of the symbol.
pub fn format_signed(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{symbol}{:.2}", amount.abs())
    } else {
        format!("+{symbol}{amount:.2}")
    }
}
