//! End-to-end flows: chat input through the router, committed via a store.

use chrono::{DateTime, TimeZone, Utc};

use finbot_core::chat::{ChatRouter, ReplyKind};
use finbot_core::config::TrackerConfig;
use finbot_core::ledger::{BudgetConfig, BudgetPeriod, Transaction, TransactionKind};
use finbot_core::services::BalanceService;
use finbot_core::storage::{JsonStore, LedgerStore};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

#[test]
fn add_then_undo_restores_the_persisted_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("ledger.json"));
    let mut router = ChatRouter::new();
    let config = TrackerConfig::default();

    let mut ledger = store.load().unwrap();
    let before = serde_json::to_string(&ledger.transactions).unwrap();

    let reply = router.route("spent 250 on dinner", &ledger.transactions, &config, now());
    ledger.apply(reply.action.expect("append action"));
    store.save(&ledger).unwrap();
    assert_eq!(store.load().unwrap().transaction_count(), 1);

    let mut ledger = store.load().unwrap();
    let reply = router.route("undo", &ledger.transactions, &config, now());
    assert_eq!(reply.kind, ReplyKind::Removed);
    ledger.apply(reply.action.expect("remove action"));
    store.save(&ledger).unwrap();

    let after = serde_json::to_string(&store.load().unwrap().transactions).unwrap();
    assert_eq!(before, after);
}

#[test]
fn yesterday_dinner_flows_into_the_store_with_the_shifted_date() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("ledger.json"));
    let mut router = ChatRouter::new();
    let config = TrackerConfig::default();

    let mut ledger = store.load().unwrap();
    let reply = router.route("Yesterday Dinner 250", &ledger.transactions, &config, now());
    assert_eq!(reply.kind, ReplyKind::Added);
    ledger.apply(reply.action.unwrap());
    store.save(&ledger).unwrap();

    let loaded = store.load().unwrap();
    let txn = &loaded.transactions[0];
    assert_eq!(txn.amount, 250.0);
    assert_eq!(txn.category, "Food");
    assert_eq!(txn.title, "Dinner");
    assert_eq!(txn.payment_mode, "Cash");
    assert_eq!(txn.date.date_naive().to_string(), "2024-03-09");
}

#[test]
fn upi_purchase_keeps_its_app_through_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("ledger.json"));
    let mut router = ChatRouter::new();
    let config = TrackerConfig::default();

    let mut ledger = store.load().unwrap();
    let reply = router.route(
        "Paid 800 for Shoes via GPay",
        &ledger.transactions,
        &config,
        now(),
    );
    ledger.apply(reply.action.unwrap());
    store.save(&ledger).unwrap();

    let txn = &store.load().unwrap().transactions[0];
    assert_eq!(txn.amount, 800.0);
    assert_eq!(txn.category, "Shopping");
    assert_eq!(txn.payment_mode, "UPI");
    assert_eq!(txn.payment_app.as_deref(), Some("GPay"));
    assert_eq!(txn.title, "Shoes");
    assert_eq!(txn.kind, TransactionKind::Expense);
}

#[test]
fn balance_moves_exactly_by_in_period_activity() {
    let budget = BudgetConfig::new(1000.0, BudgetPeriod::Monthly);
    let mut transactions = vec![Transaction::expense(
        "Dinner",
        250.0,
        "Food",
        "Cash",
        now(),
    )];
    let base = BalanceService::balance_data(&transactions, &budget, now());

    transactions.push(Transaction::income("Freelance", 400.0, "One-time", now()));
    let with_income = BalanceService::balance_data(&transactions, &budget, now());
    assert_eq!(with_income.available, base.available + 400.0);

    transactions.push(Transaction::expense("Cab", 90.0, "Travel", "Cash", now()));
    let with_expense = BalanceService::balance_data(&transactions, &budget, now());
    assert_eq!(with_expense.available, with_income.available - 90.0);
}
