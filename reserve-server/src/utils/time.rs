//! Time helpers
//!
//! Repositories and rules work with typed `NaiveDate` values throughout;
//! date strings are parsed at the serde boundary.

use chrono::{Datelike, NaiveDate};

/// Today's civil date in UTC
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Weekday number with 0 = Sunday .. 6 = Saturday, matching the
/// operating-day rule table
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_zero_is_sunday() {
        // 2024-01-07 was a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(weekday_number(sunday), 0);
        assert_eq!(weekday_number(sunday.succ_opt().unwrap()), 1);
    }
}
