//! Turns one free-form utterance into a structured transaction draft.

use std::collections::HashSet;
use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::config::Vocabularies;
use crate::ledger::{Transaction, INCOME_CATEGORY};
use crate::period;

use super::lexicon;

/// Words stripped from an utterance before the residue becomes a title.
const STOPLIST: &[&str] = &[
    "yesterday", "add", "spent", "paid", "bought", "via", "on", "for",
];

const DEFAULT_CATEGORY: &str = "Other";
const DEFAULT_PAYMENT_MODE: &str = "Cash";
const UPI_MODE: &str = "UPI";
const INCOME_FREQUENCY: &str = "One-time";

/// Outcome of interpreting one utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    Success(Transaction),
    NeedsInput(MissingField),
    Unrecognized,
}

/// Field the interpreter could not recover from the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Amount,
}

/// Builds a transaction draft from a free-form utterance.
///
/// The amount is the only hard requirement; every other field falls back to
/// a configured default, so extraction never errors. Matching is ordered:
/// literal category names outrank lexicon keywords, UPI app names outrank
/// generic payment modes, and the first hit in each vocabulary wins.
pub fn extract(
    utterance: &str,
    vocabularies: &Vocabularies,
    now: DateTime<Utc>,
) -> ParseResult {
    if utterance.trim().is_empty() {
        return ParseResult::Unrecognized;
    }
    let lower = utterance.to_lowercase();

    let Some((amount, amount_span)) = find_amount(utterance) else {
        return ParseResult::NeedsInput(MissingField::Amount);
    };

    let date = period::resolve_reference(utterance, now);

    // Tokens consumed by a vocabulary match; excluded from the title residue.
    let mut strip_words: HashSet<String> = HashSet::new();
    let mut matched_keyword: Option<&str> = None;

    let mut category: Option<String> = None;
    for name in &vocabularies.categories {
        let name_lower = name.to_lowercase();
        if !name_lower.is_empty() && lower.contains(&name_lower) {
            category = Some(name.clone());
            collect_words(&mut strip_words, &name_lower);
            break;
        }
    }
    if category.is_none() {
        if let Some((cat, keyword)) = lexicon::match_keyword(&lower) {
            category = Some(cat.to_string());
            matched_keyword = Some(keyword);
            collect_words(&mut strip_words, keyword);
        }
    }

    let mut payment_mode: Option<String> = None;
    let mut payment_app: Option<String> = None;
    for app in &vocabularies.upi_apps {
        let app_lower = app.to_lowercase();
        if !app_lower.is_empty() && lower.contains(&app_lower) {
            payment_mode = Some(UPI_MODE.to_string());
            payment_app = Some(app.clone());
            collect_words(&mut strip_words, &app_lower);
            break;
        }
    }
    if payment_mode.is_none() {
        for mode in &vocabularies.payment_modes {
            let mode_lower = mode.to_lowercase();
            if !mode_lower.is_empty() && lower.contains(&mode_lower) {
                payment_mode = Some(mode.clone());
                collect_words(&mut strip_words, &mode_lower);
                break;
            }
        }
    }

    let is_income = category.as_deref() == Some(INCOME_CATEGORY);
    let category = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let title = derive_title(utterance, &amount_span, &strip_words)
        .or_else(|| matched_keyword.map(capitalize))
        .unwrap_or_else(|| category.clone());
    let description = format!("Added via chat: \"{}\"", utterance.trim());

    let draft = if is_income {
        Transaction::income(title, amount, INCOME_FREQUENCY, date)
    } else {
        Transaction::expense(
            title,
            amount,
            category,
            payment_mode.unwrap_or_else(|| DEFAULT_PAYMENT_MODE.to_string()),
            date,
        )
        .with_payment_app(payment_app)
    };
    let transaction = draft.with_description(description);

    tracing::debug!(
        category = %transaction.category,
        amount = transaction.amount,
        "extracted transaction draft"
    );
    ParseResult::Success(transaction)
}

/// First maximal `digits[.digits]` run anywhere in the utterance, with its
/// byte span so the title pass can cut it out.
fn find_amount(utterance: &str) -> Option<(f64, Range<usize>)> {
    let bytes = utterance.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
            if let Ok(value) = utterance[start..i].parse::<f64>() {
                return Some((value, start..i));
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Title residue: the utterance minus the amount, the stoplist, and every
/// word consumed by a vocabulary match. `None` when nothing useful remains.
fn derive_title(
    utterance: &str,
    amount_span: &Range<usize>,
    strip_words: &HashSet<String>,
) -> Option<String> {
    let mut residue = String::with_capacity(utterance.len());
    residue.push_str(&utterance[..amount_span.start]);
    residue.push(' ');
    residue.push_str(&utterance[amount_span.end..]);

    let kept: Vec<&str> = residue
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| {
            let token_lower = token.to_lowercase();
            !token.is_empty()
                && !STOPLIST.contains(&token_lower.as_str())
                && !strip_words.contains(&token_lower)
        })
        .collect();

    let title = kept.join(" ");
    if title.chars().count() > 1 {
        Some(title)
    } else {
        None
    }
}

fn collect_words(into: &mut HashSet<String>, phrase: &str) {
    for word in phrase.split(|c: char| !c.is_alphanumeric()) {
        if !word.is_empty() {
            into.insert(word.to_string());
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
