use std::collections::HashSet;

use chrono::{Days, NaiveDate};

/// Consecutive active days ending today, or ending yesterday when the user
/// has not been active yet today. Duplicate dates are ignored.
#[must_use]
pub fn login_streak(activity: &[NaiveDate], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = activity.iter().copied().collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    loop {
        streak += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(previous) if days.contains(&previous) => cursor = previous,
            _ => return streak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_no_activity() {
        assert_eq!(login_streak(&[], d(10)), 0);
    }

    #[test]
    fn test_streak_ending_today() {
        assert_eq!(login_streak(&[d(8), d(9), d(10)], d(10)), 3);
    }

    #[test]
    fn test_streak_ending_yesterday_still_counts() {
        assert_eq!(login_streak(&[d(7), d(8), d(9)], d(10)), 3);
    }

    #[test]
    fn test_gap_breaks_streak() {
        assert_eq!(login_streak(&[d(5), d(6), d(9), d(10)], d(10)), 2);
        assert_eq!(login_streak(&[d(5), d(6)], d(10)), 0);
    }

    #[test]
    fn test_duplicates_and_order_ignored() {
        assert_eq!(login_streak(&[d(10), d(9), d(10), d(9)], d(10)), 2);
    }
}
