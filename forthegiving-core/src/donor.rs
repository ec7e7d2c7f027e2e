//! Donor registration model
//!
//! A `NewDonor` can only be built through [`NewDonor::new`], so every value
//! that reaches the database has already passed validation. Invalid input
//! returns `ValidationError`, not panic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::ValidationError;

const MAX_NAME_LEN: usize = 120;
const MAX_GENDER_LEN: usize = 32;
const MAX_PHONE_LEN: usize = 32;
const MAX_EMAIL_LEN: usize = 254;
const MAX_ADDRESS_LEN: usize = 255;

const MIN_AGE: i64 = 0;
const MAX_AGE: i64 = 130;

/// Loose email shape check: one '@' with something on both sides, no
/// whitespace. Deliverability is the mail server's problem.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex"));

/// A donor record validated for insertion.
///
/// All six fields are required; none may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonor {
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl NewDonor {
    /// Validate and build a donor record.
    ///
    /// # Example
    /// ```
    /// use forthegiving_core::NewDonor;
    ///
    /// let donor = NewDonor::new("Jane Doe", "F", 34, "555-0100", "jane@example.com", "1 Main St");
    /// assert!(donor.is_ok());
    ///
    /// assert!(NewDonor::new("", "F", 34, "555-0100", "jane@example.com", "1 Main St").is_err());
    /// ```
    pub fn new(
        name: &str,
        gender: &str,
        age: i32,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name, MAX_NAME_LEN)?;
        let gender = required_text("gender", gender, MAX_GENDER_LEN)?;
        let phone = required_text("phone", phone, MAX_PHONE_LEN)?;
        let email = required_text("email", email, MAX_EMAIL_LEN)?;
        let address = required_text("address", address, MAX_ADDRESS_LEN)?;

        if !(MIN_AGE..=MAX_AGE).contains(&i64::from(age)) {
            return Err(ValidationError::OutOfRange {
                field: "age",
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@host",
            });
        }

        Ok(Self {
            name,
            gender,
            age,
            phone,
            email,
            address,
        })
    }
}

/// Trim a text field and enforce non-empty plus a length cap.
fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.len() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<NewDonor, ValidationError> {
        NewDonor::new(
            "Jane Doe",
            "F",
            34,
            "555-0100",
            "jane@example.com",
            "1 Main St",
        )
    }

    #[test]
    fn accepts_valid_donor() {
        let donor = valid().unwrap();
        assert_eq!(donor.name, "Jane Doe");
        assert_eq!(donor.age, 34);
    }

    #[test]
    fn trims_whitespace() {
        let donor =
            NewDonor::new("  Jane Doe ", "F", 34, "555-0100", "jane@example.com", "1 Main St")
                .unwrap();
        assert_eq!(donor.name, "Jane Doe");
    }

    #[test]
    fn rejects_empty_name() {
        let err = NewDonor::new("", "F", 34, "555-0100", "jane@example.com", "1 Main St")
            .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn rejects_blank_address() {
        let err = NewDonor::new("Jane", "F", 34, "555-0100", "jane@example.com", "   ")
            .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "address" }));
    }

    #[test]
    fn rejects_negative_age() {
        let err = NewDonor::new("Jane", "F", -1, "555-0100", "jane@example.com", "1 Main St")
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));
    }

    #[test]
    fn rejects_implausible_age() {
        let err = NewDonor::new("Jane", "F", 131, "555-0100", "jane@example.com", "1 Main St")
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));
    }

    #[test]
    fn rejects_mail_without_at() {
        let err = NewDonor::new("Jane", "F", 34, "555-0100", "jane.example.com", "1 Main St")
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "email", .. }));
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        let err = NewDonor::new(&name, "F", 34, "555-0100", "jane@example.com", "1 Main St")
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "name", .. }));
    }
}
