//! Expiry-date parsing and arithmetic.
//!
//! DESIGN
//! ======
//! The backend sends expiry dates as ISO-8601 strings, sometimes a bare date
//! and sometimes a full timestamp. Parsing is tolerant: anything unreadable
//! renders as "N/A" downstream instead of failing the whole view.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{Datelike, Months, NaiveDate};

/// Parse an ISO-8601 date or timestamp string into a calendar date.
pub fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    // Bare date first, then the timestamp forms the backend emits.
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Days remaining until `expiry`, never negative.
///
/// Already-expired stock reports zero rather than a negative count, matching
/// how the dashboard displays it.
pub fn days_till_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days().max(0)
}

/// Whether `expiry` falls within six months of `today`.
///
/// This mirrors the backend's short-expiry report window so client-side
/// labels agree with the counts it returns.
pub fn within_six_months(expiry: NaiveDate, today: NaiveDate) -> bool {
    match today.checked_add_months(Months::new(6)) {
        Some(cutoff) => expiry <= cutoff,
        None => false,
    }
}

/// Format a date for table cells and badges (`DD/MM/YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Format an optional raw expiry string for display, falling back to "N/A".
pub fn display_expiry(raw: Option<&str>) -> String {
    raw.and_then(parse_expiry)
        .map_or_else(|| "N/A".to_owned(), format_date)
}

/// Today's date in the browser's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
