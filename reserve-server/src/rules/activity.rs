//! Activity/status aggregator
//!
//! Folds a user's historical bookings and attendance records into one
//! per-day status for calendar display.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::models::AttendanceStatus;

/// One per-day display status
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Present,
    Late,
    Absent,
    Reserved,
}

/// A booking with its optional attendance record, as fetched for one user
#[derive(Debug, Clone)]
pub struct BookingActivity {
    pub date: NaiveDate,
    pub attendance: Option<AttendanceStatus>,
}

fn status_for(item: &BookingActivity, today: NaiveDate) -> Option<DayStatus> {
    if item.date < today {
        // Past: no attendance record implies absence
        Some(match item.attendance {
            Some(AttendanceStatus::Present) => DayStatus::Present,
            Some(AttendanceStatus::Late) => DayStatus::Late,
            None => DayStatus::Absent,
        })
    } else if item.date == today {
        // Same-day absence is not inferred until the day ends
        match item.attendance {
            Some(AttendanceStatus::Present) => Some(DayStatus::Present),
            Some(AttendanceStatus::Late) => Some(DayStatus::Late),
            None => None,
        }
    } else {
        Some(DayStatus::Reserved)
    }
}

/// Merge two statuses landing on the same date: Present is never
/// downgraded, Late overrides Absent, otherwise the first-seen value wins.
fn merge(old: DayStatus, new: DayStatus) -> DayStatus {
    match (old, new) {
        (DayStatus::Present, _) | (_, DayStatus::Present) => DayStatus::Present,
        (DayStatus::Absent, DayStatus::Late) => DayStatus::Late,
        (kept, _) => kept,
    }
}

/// Aggregate a user's bookings into one status per calendar day
pub fn aggregate_activity(
    items: &[BookingActivity],
    today: NaiveDate,
) -> BTreeMap<NaiveDate, DayStatus> {
    let mut out: BTreeMap<NaiveDate, DayStatus> = BTreeMap::new();
    for item in items {
        let Some(status) = status_for(item, today) else {
            continue;
        };
        out.entry(item.date)
            .and_modify(|existing| *existing = merge(*existing, status))
            .or_insert(status);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(d: NaiveDate, attendance: Option<AttendanceStatus>) -> BookingActivity {
        BookingActivity {
            date: d,
            attendance,
        }
    }

    #[test]
    fn past_booking_without_attendance_is_absent() {
        let today = date(2024, 1, 10);
        let yesterday = date(2024, 1, 9);
        let out = aggregate_activity(&[item(yesterday, None)], today);
        assert_eq!(out[&yesterday], DayStatus::Absent);
    }

    #[test]
    fn past_booking_with_late_attendance_is_late() {
        let today = date(2024, 1, 10);
        let yesterday = date(2024, 1, 9);
        let out = aggregate_activity(&[item(yesterday, Some(AttendanceStatus::Late))], today);
        assert_eq!(out[&yesterday], DayStatus::Late);
    }

    #[test]
    fn future_booking_is_reserved() {
        let today = date(2024, 1, 10);
        let next_week = date(2024, 1, 17);
        let out = aggregate_activity(&[item(next_week, None)], today);
        assert_eq!(out[&next_week], DayStatus::Reserved);
    }

    #[test]
    fn today_without_attendance_stays_unset() {
        let today = date(2024, 1, 10);
        let out = aggregate_activity(&[item(today, None)], today);
        assert!(!out.contains_key(&today));

        let out = aggregate_activity(&[item(today, Some(AttendanceStatus::Present))], today);
        assert_eq!(out[&today], DayStatus::Present);
    }

    #[test]
    fn present_wins_over_inferred_absence_either_order() {
        let today = date(2024, 1, 10);
        let d = date(2024, 1, 9);
        let absent_first = [item(d, None), item(d, Some(AttendanceStatus::Present))];
        let present_first = [item(d, Some(AttendanceStatus::Present)), item(d, None)];
        assert_eq!(aggregate_activity(&absent_first, today)[&d], DayStatus::Present);
        assert_eq!(aggregate_activity(&present_first, today)[&d], DayStatus::Present);
    }

    #[test]
    fn late_overrides_prior_absent_but_not_vice_versa() {
        let today = date(2024, 1, 10);
        let d = date(2024, 1, 9);
        let absent_then_late = [item(d, None), item(d, Some(AttendanceStatus::Late))];
        let late_then_absent = [item(d, Some(AttendanceStatus::Late)), item(d, None)];
        assert_eq!(aggregate_activity(&absent_then_late, today)[&d], DayStatus::Late);
        assert_eq!(aggregate_activity(&late_then_absent, today)[&d], DayStatus::Late);
    }
}
