//! Calendar window resolution for filters, budgets, and comparisons.
//!
//! Two distinct modes are exposed: [`aligned_window`] snaps a reference
//! instant to calendar boundaries (used for budget periods, comparisons,
//! and labeling), while [`rolling_cutoff`] measures an inclusive lower
//! bound backward from "now" (used by ledger-wide filters). "Now" is always
//! injected by the caller; nothing in here reads the wall clock.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::utils::contains_word;

/// Time bucketing requested by filters and comparison views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
    All,
}

/// Closed time range: both endpoints are inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Snaps the reference instant to the calendar bucket that contains it.
///
/// Weeks start on Sunday. `All` is the widest representable window.
pub fn aligned_window(granularity: Granularity, reference: DateTime<Utc>) -> DateWindow {
    let date = reference.date_naive();
    match granularity {
        Granularity::Day => day_span(date, date),
        Granularity::Week => {
            let start = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
            day_span(start, start + Duration::days(6))
        }
        Granularity::Month => {
            let start = first_of_month(date);
            let end = last_of_month(date);
            day_span(start, end)
        }
        Granularity::Year => day_span(
            NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
            NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
        ),
        Granularity::All => DateWindow {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        },
    }
}

/// Inclusive lower bound for ledger-wide filters, measured back from `now`.
///
/// `Month` steps back one calendar month (day-of-month clamped); `Year` is a
/// flat 365-day lookback; `All` has no bound.
pub fn rolling_cutoff(granularity: Granularity, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match granularity {
        Granularity::Day => Some(now - Duration::days(1)),
        Granularity::Week => Some(now - Duration::days(7)),
        Granularity::Month => Some(shift_instant_months(now, -1)),
        Granularity::Year => Some(now - Duration::days(365)),
        Granularity::All => None,
    }
}

/// Resolves relative phrasing: "yesterday" shifts the reference back one
/// calendar day, anything else resolves to `now`.
pub fn resolve_reference(utterance: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    if contains_word(utterance, "yesterday") {
        now - Duration::days(1)
    } else {
        now
    }
}

/// Renders a human label for an aligned window relative to `today`.
pub fn window_label(window: &DateWindow, today: DateTime<Utc>) -> String {
    if window.start == DateTime::<Utc>::MIN_UTC {
        return "All time".to_string();
    }
    let start = window.start.date_naive();
    let end = window.end.date_naive();
    let today = today.date_naive();

    if start == end {
        return if start == today {
            "Today".to_string()
        } else if start == today - Duration::days(1) {
            "Yesterday".to_string()
        } else {
            start.format("%a, %b %-d").to_string()
        };
    }
    if start.day() == 1 && start.month() == end.month() && end == last_of_month(start) {
        return start.format("%B %Y").to_string();
    }
    if start == NaiveDate::from_ymd_opt(start.year(), 1, 1).unwrap_or(start)
        && end == NaiveDate::from_ymd_opt(start.year(), 12, 31).unwrap_or(end)
    {
        return start.format("%Y").to_string();
    }
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
}

fn day_span(start: NaiveDate, end: NaiveDate) -> DateWindow {
    DateWindow {
        start: at_utc(start.and_hms_opt(0, 0, 0).unwrap()),
        end: at_utc(end.and_hms_milli_opt(23, 59, 59, 999).unwrap()),
    }
}

fn at_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(naive, Utc)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}

fn shift_instant_months(instant: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let shifted = shift_month(instant.date_naive(), months);
    at_utc(shifted.and_time(instant.time()))
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}
