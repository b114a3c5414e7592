//! Booking-window policy
//!
//! Two independent gates, both required:
//!
//! - **Minimum notice**: the target date must be at least
//!   `min_notice_days` calendar days after today. Inside that window a
//!   booking is frozen: the same check gates modification and
//!   cancellation of existing bookings.
//! - **Quarter lead time**: the target date's quarter must have opened,
//!   i.e. today >= quarter.start_date - `quarter_open_lead_days`. A date
//!   belonging to no quarter is never bookable.
//!
//! After both gates, the calendar rules (exceptions, weekday sessions)
//! still apply.

use chrono::{Duration, NaiveDate};

use super::calendar::CalendarRules;

/// Booking-window policy knobs
#[derive(Debug, Clone, Copy)]
pub struct BookingWindow {
    pub min_notice_days: i64,
    pub quarter_open_lead_days: i64,
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            min_notice_days: 2,
            quarter_open_lead_days: 7,
        }
    }
}

impl BookingWindow {
    /// Minimum-notice gate: a request made today may only touch dates at
    /// least `min_notice_days` ahead
    pub fn notice_ok(&self, today: NaiveDate, date: NaiveDate) -> bool {
        (date - today).num_days() >= self.min_notice_days
    }

    /// Quarter lead-time gate for the quarter containing the target date
    pub fn quarter_open(&self, today: NaiveDate, quarter_start: NaiveDate) -> bool {
        today >= quarter_start - Duration::days(self.quarter_open_lead_days)
    }

    /// Full bookability check for one date
    ///
    /// Also used unmodified to gate modification and cancellation of
    /// existing bookings.
    pub fn is_date_bookable(
        &self,
        today: NaiveDate,
        date: NaiveDate,
        rules: &CalendarRules,
    ) -> bool {
        if !self.notice_ok(today, date) {
            return false;
        }
        let Some(quarter) = rules.quarter_containing(date) else {
            return false;
        };
        if !self.quarter_open(today, quarter.start_date) {
            return false;
        }
        !rules.is_closed_by_exception(date) && !rules.active_sessions(date).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CalendarException, OperatingDay, Quarter};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rules(start: NaiveDate, end: NaiveDate) -> CalendarRules {
        CalendarRules {
            quarters: vec![Quarter {
                id: 1,
                name: "Q".into(),
                start_date: start,
                end_date: end,
            }],
            exceptions: vec![],
            operating_days: (0..7)
                .map(|weekday| OperatingDay {
                    id: weekday + 1,
                    session_id: 10,
                    weekday,
                    is_active: true,
                })
                .collect(),
        }
    }

    #[test]
    fn minimum_notice_blocks_near_dates() {
        let window = BookingWindow::default();
        let r = rules(date(2024, 1, 1), date(2024, 3, 31));
        let today = date(2024, 1, 10);

        assert!(!window.is_date_bookable(today, date(2024, 1, 10), &r));
        assert!(!window.is_date_bookable(today, date(2024, 1, 11), &r));
        assert!(window.is_date_bookable(today, date(2024, 1, 12), &r));
        assert!(window.is_date_bookable(today, date(2024, 1, 13), &r));
    }

    #[test]
    fn quarter_lead_time_gates_opening() {
        let window = BookingWindow::default();
        let r = rules(date(2024, 2, 1), date(2024, 4, 30));
        let target = date(2024, 2, 15);

        // Quarter opens on 2024-01-25 (start - 7 days)
        assert!(!window.is_date_bookable(date(2024, 1, 24), target, &r));
        assert!(window.is_date_bookable(date(2024, 1, 25), target, &r));
        assert!(window.is_date_bookable(date(2024, 1, 26), target, &r));
    }

    #[test]
    fn date_outside_any_quarter_is_never_bookable() {
        let window = BookingWindow::default();
        let r = rules(date(2024, 2, 1), date(2024, 4, 30));
        assert!(!window.is_date_bookable(date(2024, 4, 28), date(2024, 5, 2), &r));
    }

    #[test]
    fn closing_exception_blocks_regardless_of_window() {
        let window = BookingWindow::default();
        let mut r = rules(date(2024, 1, 1), date(2024, 3, 31));
        let holiday = date(2024, 2, 9);
        r.exceptions.push(CalendarException {
            id: 1,
            zone_id: 1,
            exception_date: holiday,
            is_closed: true,
            note: None,
        });
        assert!(!window.is_date_bookable(date(2024, 1, 10), holiday, &r));
    }

    #[test]
    fn no_weekday_session_means_not_bookable() {
        let window = BookingWindow::default();
        let mut r = rules(date(2024, 1, 1), date(2024, 3, 31));
        // Keep only Monday rules; 2024-01-14 was a Sunday
        r.operating_days.retain(|od| od.weekday == 1);
        assert!(!window.is_date_bookable(date(2024, 1, 10), date(2024, 1, 14), &r));
        assert!(window.is_date_bookable(date(2024, 1, 10), date(2024, 1, 15), &r));
    }
}
