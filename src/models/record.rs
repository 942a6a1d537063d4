//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One contact: a name, an ordered list of phone numbers, and an optional
/// birthday.
///
/// The name is set at creation and immutable; phones can be appended or
/// replaced by exact match; the birthday can be set or overwritten. All
/// field validation happens in the domain value objects and is propagated
/// from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record, validating the optional phone and birthday.
    ///
    /// # Errors
    ///
    /// Returns the underlying `ValidationError` if `phone` or `birthday` is
    /// given and malformed.
    pub fn new(
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        };
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = birthday {
            record.add_birthday(birthday)?;
        }
        Ok(record)
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Validate and set the birthday, overwriting any existing one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Replace the first phone exactly matching `old` with a validated `new`.
    ///
    /// Returns `Ok(true)` on replacement and `Ok(false)` when no phone
    /// matches `old`. The new value is only validated once a match is found,
    /// so a miss never reports a validation error.
    pub fn replace_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.phones.iter().position(|phone| phone.as_str() == old) {
            Some(index) => {
                self.phones[index] = Phone::new(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Days from `today` to the next occurrence of the stored birthday.
    ///
    /// `None` when no birthday is set; otherwise always non-negative (a
    /// birthday falling on `today` yields 0).
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|birthday| (birthday.next_occurrence(today) - today).num_days())
    }

    /// Days from the current local date to the next birthday occurrence.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// The phone numbers rendered as a comma-joined list.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
