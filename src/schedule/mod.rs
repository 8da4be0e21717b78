//! Birthday scheduling.
//!
//! Pure, stateless date arithmetic: given a birthday and a reference date,
//! compute the birthday's next calendar occurrence, the congratulation date
//! (shifted off weekends), and whether the occurrence falls inside the
//! 7-day lookahead window.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Number of days in the upcoming-birthdays lookahead window.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The birthday's occurrence within a specific year.
///
/// A Feb 29 birthday maps to Mar 1 in non-leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    let (month, day) = if birthday.month() == 2 && birthday.day() == 29 && !is_leap_year(year) {
        (3, 1)
    } else {
        (birthday.month(), birthday.day())
    };
    // Month and day come from a valid date, with Feb 29 already substituted.
    NaiveDate::from_ymd_opt(year, month, day).expect("substituted month/day is valid")
}

/// The soonest date on or after `reference` matching the birthday's month
/// and day, with the Feb-29 → Mar-1 substitution applied per target year.
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, reference.year());
    if this_year < reference {
        occurrence_in_year(birthday, reference.year() + 1)
    } else {
        this_year
    }
}

/// Shift a date off the weekend: Saturday and Sunday move to the following
/// Monday, weekdays are unchanged.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurrence
        .checked_add_days(Days::new(shift))
        .expect("date within chrono range")
}

/// Whether `occurrence` lies 0 to 6 days (inclusive) after `reference`.
///
/// The window is tested against the unshifted occurrence, not the
/// weekend-shifted congratulation date.
pub fn in_upcoming_window(occurrence: NaiveDate, reference: NaiveDate) -> bool {
    let days_ahead = (occurrence - reference).num_days();
    (0..UPCOMING_WINDOW_DAYS).contains(&days_ahead)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(1900)); // divisible by 100, not 400
        assert!(!is_leap_year(2021));
    }

    #[test]
    fn test_next_occurrence_same_year() {
        // Birthday later in the reference year stays in that year.
        let next = next_occurrence(date(1991, 6, 24), date(2024, 6, 5));
        assert_eq!(next, date(2024, 6, 24));
    }

    #[test]
    fn test_next_occurrence_on_reference_date() {
        // "On or after": the reference day itself counts.
        let next = next_occurrence(date(1991, 6, 24), date(2024, 6, 24));
        assert_eq!(next, date(2024, 6, 24));
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        let next = next_occurrence(date(1991, 1, 2), date(2024, 6, 5));
        assert_eq!(next, date(2025, 1, 2));
    }

    #[test]
    fn test_next_occurrence_feb29_in_non_leap_year() {
        // 29.02.2020 against 01.03.2021 gives 01.03.2021, because Feb 29
        // maps to Mar 1 in non-leap years.
        let next = next_occurrence(date(2020, 2, 29), date(2021, 3, 1));
        assert_eq!(next, date(2021, 3, 1));
    }

    #[test]
    fn test_next_occurrence_feb29_in_leap_year() {
        let next = next_occurrence(date(2020, 2, 29), date(2024, 1, 1));
        assert_eq!(next, date(2024, 2, 29));
    }

    #[test]
    fn test_next_occurrence_feb29_rollover_applies_substitution() {
        // Passed Mar 1 in a non-leap year: the next year (2022) is also
        // non-leap, so the substitution applies there too.
        let next = next_occurrence(date(2020, 2, 29), date(2021, 3, 2));
        assert_eq!(next, date(2022, 3, 1));
    }

    #[test]
    fn test_congratulation_date_saturday_shifts_to_monday() {
        // 2024-06-08 is a Saturday.
        assert_eq!(congratulation_date(date(2024, 6, 8)), date(2024, 6, 10));
    }

    #[test]
    fn test_congratulation_date_sunday_shifts_to_monday() {
        // 2024-06-09 is a Sunday.
        assert_eq!(congratulation_date(date(2024, 6, 9)), date(2024, 6, 10));
    }

    #[test]
    fn test_congratulation_date_weekday_unchanged() {
        // 2024-06-11 is a Tuesday.
        assert_eq!(congratulation_date(date(2024, 6, 11)), date(2024, 6, 11));
    }

    #[test]
    fn test_upcoming_window_bounds() {
        let reference = date(2024, 6, 5);
        assert!(in_upcoming_window(date(2024, 6, 5), reference)); // today
        assert!(in_upcoming_window(date(2024, 6, 11), reference)); // 6 days
        assert!(!in_upcoming_window(date(2024, 6, 12), reference)); // 7 days
        assert!(!in_upcoming_window(date(2024, 6, 4), reference)); // yesterday
    }
}
