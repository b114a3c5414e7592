//! Calendar / operating-rules evaluator
//!
//! Decides whether a zone operates on a date and which of its sessions are
//! active. A date operates iff it falls inside at least one quarter
//! (inclusive on both endpoints), no exception closes it, and at least one
//! operating-day rule enables a session on that weekday.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use shared::models::{CalendarException, OperatingDay, Quarter};

use crate::utils::time::weekday_number;

/// Immutable snapshot of one zone's scheduling rules
///
/// Quarters are installation-wide; exceptions and operating-day rows are
/// pre-filtered to the zone (and its sessions) by the fetching layer.
#[derive(Debug, Clone, Default)]
pub struct CalendarRules {
    pub quarters: Vec<Quarter>,
    pub exceptions: Vec<CalendarException>,
    pub operating_days: Vec<OperatingDay>,
}

impl CalendarRules {
    /// The quarter containing `date`, if any. Boundary dates count:
    /// `start_date` and `end_date` are both inside the quarter.
    pub fn quarter_containing(&self, date: NaiveDate) -> Option<&Quarter> {
        self.quarters
            .iter()
            .find(|q| q.start_date <= date && date <= q.end_date)
    }

    /// Whether an exception record closes this date
    pub fn is_closed_by_exception(&self, date: NaiveDate) -> bool {
        self.exceptions
            .iter()
            .any(|e| e.exception_date == date && e.is_closed)
    }

    /// Session ids active on `date`'s weekday
    pub fn active_sessions(&self, date: NaiveDate) -> BTreeSet<i64> {
        let weekday = weekday_number(date) as i64;
        self.operating_days
            .iter()
            .filter(|od| od.weekday == weekday && od.is_active)
            .map(|od| od.session_id)
            .collect()
    }

    /// Whether the zone operates on `date`
    ///
    /// Empty rule set (no quarters, or no operating-day rows) evaluates to
    /// false: fail closed.
    pub fn is_operating(&self, date: NaiveDate) -> bool {
        self.quarter_containing(date).is_some()
            && !self.is_closed_by_exception(date)
            && !self.active_sessions(date).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quarter(start: NaiveDate, end: NaiveDate) -> Quarter {
        Quarter {
            id: 1,
            name: "Q1".into(),
            start_date: start,
            end_date: end,
        }
    }

    fn all_week(session_id: i64) -> Vec<OperatingDay> {
        (0..7)
            .map(|weekday| OperatingDay {
                id: weekday + 1,
                session_id,
                weekday,
                is_active: true,
            })
            .collect()
    }

    #[test]
    fn empty_ruleset_never_operates() {
        let rules = CalendarRules::default();
        assert!(!rules.is_operating(date(2024, 1, 10)));
        assert!(rules.active_sessions(date(2024, 1, 10)).is_empty());
    }

    #[test]
    fn outside_any_quarter_is_not_operating() {
        let rules = CalendarRules {
            quarters: vec![quarter(date(2024, 1, 1), date(2024, 3, 31))],
            exceptions: vec![],
            operating_days: all_week(10),
        };
        assert!(!rules.is_operating(date(2024, 4, 1)));
        assert!(!rules.is_operating(date(2023, 12, 31)));
    }

    #[test]
    fn quarter_boundaries_are_inclusive() {
        let rules = CalendarRules {
            quarters: vec![quarter(date(2024, 1, 1), date(2024, 3, 31))],
            exceptions: vec![],
            operating_days: all_week(10),
        };
        assert!(rules.is_operating(date(2024, 1, 1)));
        assert!(rules.is_operating(date(2024, 3, 31)));
    }

    #[test]
    fn closing_exception_wins() {
        let holiday = date(2024, 2, 9);
        let rules = CalendarRules {
            quarters: vec![quarter(date(2024, 1, 1), date(2024, 3, 31))],
            exceptions: vec![CalendarException {
                id: 1,
                zone_id: 1,
                exception_date: holiday,
                is_closed: true,
                note: Some("holiday".into()),
            }],
            operating_days: all_week(10),
        };
        assert!(!rules.is_operating(holiday));
        assert!(rules.is_operating(holiday.succ_opt().unwrap()));
    }

    #[test]
    fn non_closing_exception_is_ignored() {
        let day = date(2024, 2, 9);
        let rules = CalendarRules {
            quarters: vec![quarter(date(2024, 1, 1), date(2024, 3, 31))],
            exceptions: vec![CalendarException {
                id: 1,
                zone_id: 1,
                exception_date: day,
                is_closed: false,
                note: None,
            }],
            operating_days: all_week(10),
        };
        assert!(rules.is_operating(day));
    }

    #[test]
    fn sessions_follow_weekday_rules() {
        // Session 10 runs Mon(1) only; session 20 runs Mon and Tue
        let rules = CalendarRules {
            quarters: vec![quarter(date(2024, 1, 1), date(2024, 3, 31))],
            exceptions: vec![],
            operating_days: vec![
                OperatingDay { id: 1, session_id: 10, weekday: 1, is_active: true },
                OperatingDay { id: 2, session_id: 20, weekday: 1, is_active: true },
                OperatingDay { id: 3, session_id: 20, weekday: 2, is_active: true },
                // Inactive rule must not activate the session
                OperatingDay { id: 4, session_id: 30, weekday: 1, is_active: false },
            ],
        };
        // 2024-01-08 was a Monday
        let monday = date(2024, 1, 8);
        let tuesday = date(2024, 1, 9);
        let sunday = date(2024, 1, 7);

        assert_eq!(
            rules.active_sessions(monday),
            BTreeSet::from([10, 20])
        );
        assert_eq!(rules.active_sessions(tuesday), BTreeSet::from([20]));
        assert!(rules.active_sessions(sunday).is_empty());
        assert!(rules.is_operating(monday));
        assert!(!rules.is_operating(sunday));
    }
}
