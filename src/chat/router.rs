//! Intent classification and dispatch for chat utterances.
//!
//! The rules form a priority list: evaluation stops at the first match,
//! with no backtracking afterwards. The router owns exactly one piece of
//! state, the id of the last transaction it created, so "undo" can retract
//! a single bot-driven addition.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::currency::format_currency;
use crate::ledger::{LedgerAction, Transaction};
use crate::period::Granularity;
use crate::services::{CategorySlice, SummaryService};
use crate::utils::contains_word;

use super::extract::{extract, MissingField, ParseResult};
use super::lexicon;

const AMOUNT_PROMPT: &str =
    "I couldn't find an amount in that. How much was it?";
const HELP_MESSAGE: &str = "I didn't catch that. Try something like \"spent 250 on dinner\", \
     or ask for a \"summary\", a \"chart\", or your \"biggest\" expense. \
     Say \"undo\" to take back my last entry.";
const EMPTY_LEDGER_MESSAGE: &str =
    "There's nothing to look at yet. Add a transaction first!";

/// What kind of reply the router produced; the chat surface renders each
/// kind differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Added,
    Removed,
    Summary,
    Chart,
    TopExpense,
    NeedsAmount,
    Help,
}

/// Reply handed back to the chat surface, optionally carrying a ledger
/// mutation for the caller to commit.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub kind: ReplyKind,
    pub message: String,
    pub action: Option<LedgerAction>,
    pub chart: Option<Vec<CategorySlice>>,
}

impl BotReply {
    fn text(kind: ReplyKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            chart: None,
        }
    }
}

/// Routes chat utterances to the extractor or the aggregation services.
#[derive(Debug, Default)]
pub struct ChatRouter {
    last_added: Option<Uuid>,
}

impl ChatRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the last bot-created transaction still eligible for undo.
    pub fn last_added(&self) -> Option<Uuid> {
        self.last_added
    }

    /// Interprets one utterance against the supplied ledger snapshot.
    ///
    /// Never mutates the ledger: additions and removals come back as
    /// [`LedgerAction`]s for the caller to commit.
    pub fn route(
        &mut self,
        utterance: &str,
        transactions: &[Transaction],
        config: &TrackerConfig,
        now: DateTime<Utc>,
    ) -> BotReply {
        let trimmed = utterance.trim();
        let lower = trimmed.to_lowercase();

        if lower == "undo" {
            if let Some(id) = self.last_added.take() {
                tracing::info!(%id, "undoing last chat-added transaction");
                return BotReply {
                    kind: ReplyKind::Removed,
                    message: "Removed the last transaction I added.".to_string(),
                    action: Some(LedgerAction::Remove(id)),
                    chart: None,
                };
            }
            // Nothing to undo: fall through to the remaining rules.
        }

        let has_digit = lower.bytes().any(|b| b.is_ascii_digit());
        if has_digit && Self::add_intent(&lower, config) {
            return self.handle_add(trimmed, config, now);
        }

        if lower.contains("summary") || lower.contains("total") {
            return summary_reply(&lower, transactions, config, now);
        }

        if lower.contains("chart") || lower.contains("graph") {
            return chart_reply(transactions);
        }

        if lower.contains("biggest") || lower.contains("highest") {
            return top_expense_reply(transactions, config);
        }

        BotReply::text(ReplyKind::Help, HELP_MESSAGE)
    }

    fn add_intent(lower: &str, config: &TrackerConfig) -> bool {
        lower.contains("add")
            || lower.contains("spent")
            || contains_word(lower, "yesterday")
            || lexicon::match_keyword(lower).is_some()
            || config
                .vocabularies
                .categories
                .iter()
                .any(|name| !name.is_empty() && lower.contains(&name.to_lowercase()))
    }

    fn handle_add(
        &mut self,
        utterance: &str,
        config: &TrackerConfig,
        now: DateTime<Utc>,
    ) -> BotReply {
        match extract(utterance, &config.vocabularies, now) {
            ParseResult::Success(transaction) => {
                self.last_added = Some(transaction.id);
                let seed = utterance
                    .len()
                    .wrapping_add(transaction.amount.to_bits() as usize);
                let message = confirmation(
                    seed,
                    &config.currency,
                    transaction.amount,
                    &transaction.category,
                );
                tracing::info!(
                    category = %transaction.category,
                    amount = transaction.amount,
                    "chat add"
                );
                BotReply {
                    kind: ReplyKind::Added,
                    message,
                    action: Some(LedgerAction::Append(transaction)),
                    chart: None,
                }
            }
            ParseResult::NeedsInput(MissingField::Amount) => {
                BotReply::text(ReplyKind::NeedsAmount, AMOUNT_PROMPT)
            }
            ParseResult::Unrecognized => BotReply::text(ReplyKind::Help, HELP_MESSAGE),
        }
    }
}

/// Fixed confirmation pool, sampled deterministically from the utterance so
/// replies vary without an RNG dependency.
fn confirmation(seed: usize, symbol: &str, amount: f64, category: &str) -> String {
    let formatted = format_currency(symbol, amount);
    match seed % 4 {
        0 => format!("Got it! {formatted} on {category} recorded."),
        1 => format!("Done. {formatted} filed under {category}."),
        2 => format!("Noted: {formatted} for {category}."),
        _ => format!("Saved! {formatted} added to {category}."),
    }
}

fn summary_reply(
    lower: &str,
    transactions: &[Transaction],
    config: &TrackerConfig,
    now: DateTime<Utc>,
) -> BotReply {
    let (granularity, scope) = if lower.contains("today") {
        (Granularity::Day, "today")
    } else if lower.contains("week") {
        (Granularity::Week, "this week")
    } else {
        (Granularity::All, "in total")
    };
    let filtered = SummaryService::filter_by_period(transactions, granularity, now);
    let spent: f64 = filtered
        .iter()
        .filter(|txn| txn.is_expense())
        .map(|txn| txn.amount)
        .sum();
    BotReply::text(
        ReplyKind::Summary,
        format!(
            "You have spent {} {scope}.",
            format_currency(&config.currency, spent)
        ),
    )
}

fn chart_reply(transactions: &[Transaction]) -> BotReply {
    let expenses: Vec<Transaction> = transactions
        .iter()
        .filter(|txn| txn.is_expense())
        .cloned()
        .collect();
    if expenses.is_empty() {
        return BotReply::text(ReplyKind::Chart, EMPTY_LEDGER_MESSAGE);
    }
    let breakdown = SummaryService::category_breakdown(&expenses);
    BotReply {
        kind: ReplyKind::Chart,
        message: "Here is your spending by category:".to_string(),
        action: None,
        chart: Some(breakdown),
    }
}

fn top_expense_reply(transactions: &[Transaction], config: &TrackerConfig) -> BotReply {
    match SummaryService::top_expense(transactions) {
        Some(txn) => BotReply::text(
            ReplyKind::TopExpense,
            format!(
                "Your biggest expense is {} ({}).",
                txn.title,
                format_currency(&config.currency, txn.amount)
            ),
        ),
        None => BotReply::text(ReplyKind::TopExpense, EMPTY_LEDGER_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{ChatRouter, ReplyKind};
    use crate::config::TrackerConfig;
    use crate::ledger::{Ledger, Transaction};

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn config() -> TrackerConfig {
        TrackerConfig::default()
    }

    #[test]
    fn add_then_undo_round_trips_the_ledger() {
        let mut router = ChatRouter::new();
        let mut ledger = Ledger::new();
        let config = config();

        let reply = router.route("spent 250 on dinner", &ledger.transactions, &config, now());
        assert_eq!(reply.kind, ReplyKind::Added);
        ledger.apply(reply.action.expect("append action"));
        assert_eq!(ledger.transaction_count(), 1);
        assert_eq!(router.last_added(), Some(ledger.transactions[0].id));

        let reply = router.route("undo", &ledger.transactions, &config, now());
        assert_eq!(reply.kind, ReplyKind::Removed);
        ledger.apply(reply.action.expect("remove action"));
        assert_eq!(ledger.transaction_count(), 0);
        assert_eq!(router.last_added(), None);
    }

    #[test]
    fn undo_without_a_slot_falls_through_to_help() {
        let mut router = ChatRouter::new();
        let reply = router.route("undo", &[], &config(), now());
        assert_eq!(reply.kind, ReplyKind::Help);
        assert!(reply.action.is_none());
    }

    #[test]
    fn summary_defaults_to_all_time() {
        let mut router = ChatRouter::new();
        let transactions = vec![
            Transaction::expense("Old", 100.0, "Food", "Cash", now() - Duration::days(400)),
            Transaction::expense("New", 50.0, "Food", "Cash", now() - Duration::days(2)),
        ];
        let reply = router.route("summary", &transactions, &config(), now());
        assert_eq!(reply.kind, ReplyKind::Summary);
        assert!(reply.message.contains("150.00"), "{}", reply.message);
        assert!(reply.message.contains("in total"));
    }

    #[test]
    fn weekly_summary_uses_the_rolling_cutoff() {
        let mut router = ChatRouter::new();
        let transactions = vec![
            Transaction::expense("Inside", 60.0, "Food", "Cash", now() - Duration::days(6)),
            Transaction::expense("Outside", 40.0, "Food", "Cash", now() - Duration::days(8)),
        ];
        let reply = router.route("weekly total please", &transactions, &config(), now());
        assert!(reply.message.contains("60.00"), "{}", reply.message);
        assert!(reply.message.contains("this week"));
    }

    #[test]
    fn chart_reports_empty_state_on_an_empty_ledger() {
        let mut router = ChatRouter::new();
        let reply = router.route("show me a chart", &[], &config(), now());
        assert_eq!(reply.kind, ReplyKind::Chart);
        assert!(reply.chart.is_none());
    }

    #[test]
    fn chart_carries_a_breakdown_payload() {
        let mut router = ChatRouter::new();
        let transactions = vec![
            Transaction::expense("Dinner", 300.0, "Food", "Cash", now()),
            Transaction::expense("Cab", 100.0, "Travel", "Cash", now()),
            Transaction::income("Salary", 5000.0, "Monthly", now()),
        ];
        let reply = router.route("chart", &transactions, &config(), now());
        let chart = reply.chart.expect("chart payload");
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].category, "Food");
    }

    #[test]
    fn biggest_expense_is_reported_with_currency() {
        let mut router = ChatRouter::new();
        let transactions = vec![
            Transaction::expense("Dinner", 300.0, "Food", "Cash", now()),
            Transaction::expense("Laptop", 50000.0, "Shopping", "Card", now()),
        ];
        let reply = router.route("what was my biggest expense", &transactions, &config(), now());
        assert_eq!(reply.kind, ReplyKind::TopExpense);
        assert!(reply.message.contains("Laptop"));
        assert!(reply.message.contains("50000.00"));
    }

    #[test]
    fn digits_without_intent_words_do_not_add() {
        let mut router = ChatRouter::new();
        let reply = router.route("1234", &[], &config(), now());
        assert_eq!(reply.kind, ReplyKind::Help);
    }

    #[test]
    fn zero_amounts_are_still_added() {
        let mut router = ChatRouter::new();
        let reply = router.route("spent 0 on dinner", &[], &config(), now());
        assert_eq!(reply.kind, ReplyKind::Added);
        assert!(reply.message.contains("0.00"));
    }

    #[test]
    fn unknown_chatter_gets_the_help_reply() {
        let mut router = ChatRouter::new();
        let reply = router.route("hello there", &[], &config(), now());
        assert_eq!(reply.kind, ReplyKind::Help);
        assert!(reply.message.contains("summary"));
    }
}
