#![doc(test(attr(deny(warnings))))]

//! Finbot Core turns free-form chat messages into structured ledger
//! transactions and answers period-based questions (budgets, balances,
//! category breakdowns) over the resulting ledger.

pub mod chat;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod period;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finbot Core tracing initialized.");
    });
}
