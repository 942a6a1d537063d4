//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Strict DD.MM.YYYY shape. `NaiveDate::parse_from_str` alone accepts
/// unpadded input like `1.1.2020`, which we must reject.
static DATE_FORMAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date format regex")
});

/// Textual format used for both parsing and rendering.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// A birthday is a pure calendar date (no time-of-day, no timezone), parsed
/// from the fixed `DD.MM.YYYY` format and validated at construction time.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (zero-padded day and month,
    ///   four-digit year, dot separators)
    /// - Must represent a real calendar date (`30.02.2020` is rejected,
    ///   `29.02.2024` is accepted)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is malformed
    /// or not a real date.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_FORMAT_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next calendar occurrence of this birthday's month/day, seen from
    /// `today`.
    ///
    /// The month/day are projected onto `today`'s year; if that date has
    /// already passed (is strictly earlier than `today`), they are projected
    /// onto the next year instead. A today's-date occurrence counts as this
    /// year's. Feb 29 projected onto a non-leap year rolls forward to
    /// March 1 of that year.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = Self::on_year(self.0, today.year());
        if this_year < today {
            Self::on_year(self.0, today.year() + 1)
        } else {
            this_year
        }
    }

    /// Project a date's month/day onto `year`.
    fn on_year(date: NaiveDate, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, date.month(), date.day()) {
            Some(projected) => projected,
            // Only Feb 29 can fail to exist in a target year.
            None => NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year"),
        }
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
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_birthday_leap_day_in_leap_year() {
        assert!(Birthday::new("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2020").is_err());
        assert!(Birthday::new("01.13.2020").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2020").is_err());
        assert!(Birthday::new("32.01.2020").is_err());
    }

    #[test]
    fn test_birthday_rejects_unpadded_input() {
        assert!(Birthday::new("1.1.2020").is_err());
        assert!(Birthday::new("15.6.1990").is_err());
        assert!(Birthday::new("15.06.90").is_err());
    }

    #[test]
    fn test_birthday_rejects_other_shapes() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("15/06/1990").is_err());
        assert!(Birthday::new("1990.06.15").is_err());
        assert!(Birthday::new("15.06.1990 ").is_err());
        assert!(Birthday::new("birthday").is_err());
    }

    #[test]
    fn test_birthday_display_round_trip() {
        let birthday = Birthday::new("05.01.2000").unwrap();
        assert_eq!(birthday.to_string(), "05.01.2000");
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(
            birthday.next_occurrence(today),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_next_occurrence_today_counts() {
        let birthday = Birthday::new("10.06.1990").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(birthday.next_occurrence(today), today);
    }

    #[test]
    fn test_next_occurrence_wraps_to_next_year() {
        let birthday = Birthday::new("01.01.1990").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(
            birthday.next_occurrence(today),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_next_occurrence_feb_29_rolls_to_march_1() {
        let birthday = Birthday::new("29.02.2020").unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 2, 25).unwrap();
        assert_eq!(
            birthday.next_occurrence(today),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_next_occurrence_feb_29_kept_in_leap_year() {
        let birthday = Birthday::new("29.02.2020").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();
        assert_eq!(
            birthday.next_occurrence(today),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.1990\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"15.06.1990\"").unwrap();
        assert_eq!(birthday.to_string(), "15.06.1990");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1.1.2020\"");
        assert!(result.is_err());
    }
}
