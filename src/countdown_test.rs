use super::*;

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

// =============================================================
// Remaining
// =============================================================

#[test]
fn remaining_splits_units() {
    let r = Remaining::from_millis(3 * DAY + 4 * HOUR + 5 * MINUTE + 6 * SECOND + 999);
    assert_eq!(r, Remaining { days: 3, hours: 4, minutes: 5, seconds: 6 });
}

#[test]
fn remaining_negative_clamps_to_zero() {
    assert_eq!(Remaining::from_millis(-5 * SECOND), Remaining::default());
    assert_eq!(Remaining::from_millis(0), Remaining::default());
    assert_eq!(Remaining::from_millis(999), Remaining::default());
}

#[test]
fn remaining_between_instants() {
    let now = 1_700_000_000_000.0;
    let r = Remaining::between(now, now + (HOUR + 1_500) as f64);
    assert_eq!(r, Remaining { days: 0, hours: 1, minutes: 0, seconds: 1 });
}

#[test]
fn remaining_display_format() {
    let r = Remaining { days: 12, hours: 0, minutes: 7, seconds: 59 };
    assert_eq!(r.to_string(), "12d 0h 7m 59s");
}

// =============================================================
// Target selection
// =============================================================

#[test]
fn target_year_stays_before_occurrence() {
    assert_eq!(target_year(2026, 100.0, 200.0), 2026);
}

#[test]
fn target_year_rolls_over_at_and_after_occurrence() {
    assert_eq!(target_year(2026, 200.0, 200.0), 2027);
    assert_eq!(target_year(2026, 300.0, 200.0), 2027);
}

#[test]
fn annual_date_defaults_to_christmas() {
    let date = AnnualDate::default();
    assert_eq!(date, AnnualDate { month: 12, day: 25 });
    assert_eq!(date.month_index(), 11);
    assert!(date.is_valid());
}

#[test]
fn annual_date_validation() {
    assert!(AnnualDate { month: 2, day: 28 }.is_valid());
    assert!(!AnnualDate { month: 2, day: 29 }.is_valid());
    assert!(!AnnualDate { month: 2, day: 30 }.is_valid());
    assert!(!AnnualDate { month: 4, day: 31 }.is_valid());
    assert!(!AnnualDate { month: 13, day: 1 }.is_valid());
    assert!(!AnnualDate { month: 0, day: 1 }.is_valid());
    assert!(!AnnualDate { month: 1, day: 0 }.is_valid());
}
