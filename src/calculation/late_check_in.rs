//! Late check-in predicate.

use chrono::{NaiveDateTime, NaiveTime};

/// Hour of the late-check-in cutoff (09:30:00 local time).
pub const LATE_CUTOFF_HOUR: u32 = 9;
/// Minute of the late-check-in cutoff.
pub const LATE_CUTOFF_MINUTE: u32 = 30;

/// Returns true if a check-in counts as late.
///
/// A check-in is late iff its time of day is strictly after 09:30:00 on the
/// check-in's own calendar day; 09:30:00 exactly is on time.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::is_late_check_in;
/// use chrono::NaiveDateTime;
///
/// let on_time =
///     NaiveDateTime::parse_from_str("2026-02-02 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(!is_late_check_in(on_time));
///
/// let late =
///     NaiveDateTime::parse_from_str("2026-02-02 09:30:01", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_late_check_in(late));
/// ```
pub fn is_late_check_in(check_in: NaiveDateTime) -> bool {
    let cutoff = NaiveTime::from_hms_opt(LATE_CUTOFF_HOUR, LATE_CUTOFF_MINUTE, 0)
        .unwrap_or(NaiveTime::MIN);
    check_in.time() > cutoff
}
