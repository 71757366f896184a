use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// parse_expiry
// =============================================================

#[test]
fn parse_expiry_accepts_bare_date() {
    assert_eq!(parse_expiry("2026-03-15"), Some(date(2026, 3, 15)));
}

#[test]
fn parse_expiry_accepts_rfc3339_timestamp() {
    assert_eq!(
        parse_expiry("2026-03-15T00:00:00.000Z"),
        Some(date(2026, 3, 15))
    );
}

#[test]
fn parse_expiry_rejects_garbage() {
    assert_eq!(parse_expiry("not-a-date"), None);
    assert_eq!(parse_expiry(""), None);
    assert_eq!(parse_expiry("15/03/2026"), None);
}

// =============================================================
// days_till_expiry
// =============================================================

#[test]
fn days_till_expiry_counts_forward() {
    let today = date(2026, 1, 1);
    assert_eq!(days_till_expiry(date(2026, 1, 31), today), 30);
}

#[test]
fn days_till_expiry_same_day_is_zero() {
    let today = date(2026, 1, 1);
    assert_eq!(days_till_expiry(today, today), 0);
}

#[test]
fn days_till_expiry_never_negative() {
    let today = date(2026, 6, 1);
    assert_eq!(days_till_expiry(date(2025, 1, 1), today), 0);
}

// =============================================================
// within_six_months
// =============================================================

#[test]
fn within_six_months_inside_window() {
    let today = date(2026, 1, 15);
    assert!(within_six_months(date(2026, 5, 1), today));
}

#[test]
fn within_six_months_boundary_included() {
    let today = date(2026, 1, 15);
    assert!(within_six_months(date(2026, 7, 15), today));
}

#[test]
fn within_six_months_outside_window() {
    let today = date(2026, 1, 15);
    assert!(!within_six_months(date(2026, 7, 16), today));
}

#[test]
fn within_six_months_past_dates_count() {
    let today = date(2026, 1, 15);
    assert!(within_six_months(date(2025, 12, 1), today));
}

// =============================================================
// formatting
// =============================================================

#[test]
fn format_date_zero_pads() {
    assert_eq!(format_date(date(2026, 3, 5)), "05/03/2026");
}

#[test]
fn display_expiry_formats_valid_dates() {
    assert_eq!(display_expiry(Some("2026-03-15")), "15/03/2026");
}

#[test]
fn display_expiry_falls_back_to_na() {
    assert_eq!(display_expiry(None), "N/A");
    assert_eq!(display_expiry(Some("bogus")), "N/A");
}
