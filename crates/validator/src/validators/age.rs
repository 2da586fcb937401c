//! Minimum age validator for ISO birth dates.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::foundation::{ErrorReason, Validate};

/// Age of majority in Brazil, the default threshold.
pub const ADULT_AGE: u32 = 18;

/// Parses a birth date given as `YYYY-MM-DD` or as an RFC 3339 timestamp
/// (only its calendar date is kept).
#[must_use]
pub fn parse_birth_date(input: &str) -> Option<NaiveDate> {
    input.parse::<NaiveDate>().ok().or_else(|| {
        DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    })
}

/// Number of full years between `birth` and `today`.
///
/// A year counts once the birthday (same month and day) has been reached.
/// Negative when `birth` is in the future.
#[must_use]
pub fn completed_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Validates that a birth date is at least `years` full years before
/// `today`.
///
/// The reference date is explicit so the rule is deterministic; use
/// [`MinimumAge::adult_today`] to read the local clock. An empty input
/// reports `required`. An unreadable date is treated like an under-age one
/// and reports `age.minimum`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cadastro_validator::foundation::{ErrorReason, Validate};
/// use cadastro_validator::validators::MinimumAge;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let adult = MinimumAge::adult(today);
///
/// assert!(adult.validate("2006-06-15").is_ok());
/// assert_eq!(adult.validate("2006-06-16"), Err(ErrorReason::AgeMinimum));
/// assert_eq!(adult.validate("15/06/2006"), Err(ErrorReason::AgeMinimum));
/// assert_eq!(adult.validate(""), Err(ErrorReason::Required));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinimumAge {
    /// Required number of full years.
    pub years: u32,
    /// Reference date the age is computed against.
    pub today: NaiveDate,
}

impl MinimumAge {
    /// Creates a validator for an arbitrary threshold.
    #[must_use]
    pub const fn new(years: u32, today: NaiveDate) -> Self {
        Self { years, today }
    }

    /// Requires [`ADULT_AGE`] on `today`.
    #[must_use]
    pub const fn adult(today: NaiveDate) -> Self {
        Self::new(ADULT_AGE, today)
    }

    /// Requires [`ADULT_AGE`] on the local calendar date.
    #[must_use]
    pub fn adult_today() -> Self {
        Self::adult(chrono::Local::now().date_naive())
    }
}

impl Validate for MinimumAge {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ErrorReason> {
        if input.is_empty() {
            return Err(ErrorReason::Required);
        }

        let birth = parse_birth_date(input).ok_or(ErrorReason::AgeMinimum)?;
        let age = completed_years(birth, self.today);

        if i64::from(age) >= i64::from(self.years) {
            Ok(())
        } else {
            Err(ErrorReason::AgeMinimum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completed_years_counts_from_birthday() {
        let birth = date(2000, 3, 10);
        assert_eq!(completed_years(birth, date(2018, 3, 9)), 17);
        assert_eq!(completed_years(birth, date(2018, 3, 10)), 18);
        assert_eq!(completed_years(birth, date(2018, 2, 28)), 17);
        assert_eq!(completed_years(birth, date(2018, 12, 31)), 18);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2004, 2, 29);
        assert_eq!(completed_years(birth, date(2022, 2, 28)), 17);
        assert_eq!(completed_years(birth, date(2022, 3, 1)), 18);
        assert_eq!(completed_years(birth, date(2024, 2, 29)), 20);
    }

    #[test]
    fn test_future_birth_date_is_negative() {
        assert_eq!(completed_years(date(2030, 1, 1), date(2024, 1, 1)), -6);
        let v = MinimumAge::adult(date(2024, 1, 1));
        assert_eq!(v.validate("2030-01-01"), Err(ErrorReason::AgeMinimum));
    }

    #[test]
    fn test_boundary() {
        let v = MinimumAge::adult(date(2024, 6, 15));
        assert!(v.validate("2006-06-15").is_ok());
        assert!(v.validate("1950-01-01").is_ok());
        assert_eq!(v.validate("2006-06-16"), Err(ErrorReason::AgeMinimum));
    }

    #[test]
    fn test_custom_threshold() {
        let v = MinimumAge::new(21, date(2024, 6, 15));
        assert_eq!(v.validate("2006-06-15"), Err(ErrorReason::AgeMinimum));
        assert!(v.validate("2003-06-15").is_ok());
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse_birth_date("2000-01-31"), Some(date(2000, 1, 31)));
        assert_eq!(
            parse_birth_date("2000-01-31T23:30:00-03:00"),
            Some(date(2000, 1, 31))
        );
        assert_eq!(parse_birth_date("2000-02-30"), None);
        assert_eq!(parse_birth_date("31/01/2000"), None);
        assert_eq!(parse_birth_date("yesterday"), None);
    }

    #[test]
    fn test_unparsable_is_age_minimum() {
        let v = MinimumAge::adult(date(2024, 6, 15));
        assert_eq!(v.validate("not a date"), Err(ErrorReason::AgeMinimum));
        assert_eq!(v.validate(""), Err(ErrorReason::Required));
    }
}
