//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual date format, `DD.MM.YYYY`.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday: a calendar date with no time component.
///
/// Parsed from a `DD.MM.YYYY` string and rendered back in the same format,
/// which is also how it is persisted.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("24.06.1991").unwrap();
/// assert_eq!(birthday.to_string(), "24.06.1991");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string is malformed or
    /// does not name a real calendar date.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_parse_round_trips() {
        let birthday = Birthday::parse("24.06.1991").unwrap();
        assert_eq!(birthday.to_string(), "24.06.1991");
    }

    #[test]
    fn test_birthday_parse_leap_day() {
        let birthday = Birthday::parse("29.02.2020").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_birthday_rejects_malformed() {
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse("1991-06-24").is_err());
        assert!(Birthday::parse("24/06/1991").is_err());
        assert!(Birthday::parse("31.02.2021").is_err()); // no Feb 31
        assert!(Birthday::parse("29.02.2021").is_err()); // not a leap year
        assert!(Birthday::parse("birthday").is_err());
    }

    #[test]
    fn test_birthday_from_native_date() {
        let date = NaiveDate::from_ymd_opt(1991, 6, 24).unwrap();
        let birthday = Birthday::from(date);
        assert_eq!(birthday.to_string(), "24.06.1991");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("01.12.1980").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01.12.1980\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"99.99.9999\"");
        assert!(result.is_err());
    }
}
