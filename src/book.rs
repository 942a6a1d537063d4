//! The in-memory address book.

use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Number of days ahead (inclusive) a birthday counts as upcoming.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// One entry in the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name.
    pub name: String,

    /// The birthday rendered as DD.MM.YYYY.
    pub date: String,
}

/// Mapping from a contact's name to its [`Record`].
///
/// Keys are the exact name strings (case-sensitive, no normalization) and
/// unique; adding a record under an existing name silently overwrites the
/// prior record. Iteration order is unspecified.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, overwriting any existing entry.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over `(name, record)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Record)> {
        self.records.iter()
    }

    /// Records whose next birthday occurrence falls within the next
    /// [`UPCOMING_WINDOW_DAYS`] days of `today`, inclusive.
    ///
    /// Records without a birthday are skipped. Order is unspecified.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let days = record.days_to_birthday_from(today)?;
                if days <= UPCOMING_WINDOW_DAYS {
                    Some(UpcomingBirthday {
                        name: record.name().as_str().to_string(),
                        date: record.birthday()?.to_string(),
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Upcoming birthdays seen from the current local date.
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, phone: &str, birthday: Option<&str>) -> Record {
        Record::new(name, Some(phone), birthday).unwrap()
    }

    #[test]
    fn test_find_exact_match_only() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890", None));

        assert!(book.find("John").is_some());
        assert!(book.find("john").is_none());
        assert!(book.find("John ").is_none());
        assert!(book.find("Unknown").is_none());
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890", None));
        book.add_record(record("John", "0987654321", None));

        assert_eq!(book.len(), 1);
        let phones = book.find("John").unwrap().phones();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "0987654321");
    }

    #[test]
    fn test_find_mut_allows_in_place_updates() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890", None));

        book.find_mut("John").unwrap().add_phone("0987654321").unwrap();
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_upcoming_includes_boundary_day_seven() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record("Seven", "1234567890", Some("17.06.1990")));
        book.add_record(record("Eight", "1234567890", Some("18.06.1990")));

        let upcoming = book.upcoming_birthdays_from(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Seven");
        assert_eq!(upcoming[0].date, "17.06.1990");
    }

    #[test]
    fn test_upcoming_includes_today() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record("Today", "1234567890", Some("10.06.1985")));

        let upcoming = book.upcoming_birthdays_from(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, "10.06.1985");
    }

    #[test]
    fn test_upcoming_skips_records_without_birthday() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record("NoBirthday", "1234567890", None));
        book.add_record(record("Far", "1234567890", Some("01.01.1990")));

        assert!(book.upcoming_birthdays_from(today).is_empty());
    }

    #[test]
    fn test_upcoming_year_wrap_at_new_year() {
        // Dec 28 -> Jan 3 crosses the year boundary and is 6 days out.
        let today = date(2024, 12, 28);
        let mut book = AddressBook::new();
        book.add_record(record("NewYear", "1234567890", Some("03.01.1990")));

        let upcoming = book.upcoming_birthdays_from(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "NewYear");
    }

    #[test]
    fn test_empty_book() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert!(book.upcoming_birthdays_from(date(2024, 6, 10)).is_empty());
    }
}
