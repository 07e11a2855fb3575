#![forbid(unsafe_code)]

//! Field validation rules.
//!
//! Length rules count characters rather than bytes so multibyte names
//! ("Ñandú") are measured the way a user would count them.

use std::error::Error;
use std::fmt;

/// A registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Password,
}

impl Field {
    /// Wire/form name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The field is required and was empty.
    Required,
    /// The value is shorter than the minimum length (in characters).
    TooShort { min: usize, len: usize },
    /// The value is not a well-formed email address.
    InvalidEmail,
}

/// A validation failure on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Required => write!(f, "{} is required", self.field),
            ErrorKind::TooShort { min, len } => {
                write!(f, "{} must be at least {min} characters (got {len})", self.field)
            }
            ErrorKind::InvalidEmail => write!(f, "{} is not a valid email address", self.field),
        }
    }
}

impl Error for ValidationError {}

/// `Required` error when `value` is empty or whitespace-only.
pub(crate) fn check_required(field: Field, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError {
            field,
            kind: ErrorKind::Required,
        })
    } else {
        None
    }
}

/// `TooShort` error when `value` has fewer than `min` characters.
///
/// Skipped for empty values: `Required` already covers those.
pub(crate) fn check_min_len(field: Field, value: &str, min: usize) -> Option<ValidationError> {
    let len = value.chars().count();
    if len == 0 || len >= min {
        None
    } else {
        Some(ValidationError {
            field,
            kind: ErrorKind::TooShort { min, len },
        })
    }
}

/// Whether `value` is a well-formed email address.
///
/// Deliberately loose, matching typical client-side form validation:
/// exactly one `@`, non-empty local part and domain, no whitespace.
#[must_use]
pub fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(3, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    parts.next().is_none() && !local.is_empty() && !domain.is_empty()
}

pub(crate) fn check_email(field: Field, value: &str) -> Option<ValidationError> {
    if value.is_empty() || is_well_formed_email(value) {
        None
    } else {
        Some(ValidationError {
            field,
            kind: ErrorKind::InvalidEmail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(check_required(Field::FullName, "").is_some());
        assert!(check_required(Field::FullName, "   ").is_some());
        assert!(check_required(Field::FullName, "Ana").is_none());
    }

    #[test]
    fn min_len_counts_characters() {
        // Two characters, four bytes.
        let err = check_min_len(Field::FullName, "ñu", 3).unwrap();
        assert_eq!(err.kind, ErrorKind::TooShort { min: 3, len: 2 });
        assert!(check_min_len(Field::FullName, "ñús", 3).is_none());
    }

    #[test]
    fn min_len_defers_empty_to_required() {
        assert!(check_min_len(Field::Password, "", 8).is_none());
    }

    #[test]
    fn email_shapes() {
        assert!(is_well_formed_email("ana@example.com"));
        assert!(is_well_formed_email("a@b"));
        assert!(!is_well_formed_email("anaexample.com"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("ana@"));
        assert!(!is_well_formed_email("ana@@example.com"));
        assert!(!is_well_formed_email("ana maria@example.com"));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ValidationError {
            field: Field::Password,
            kind: ErrorKind::TooShort { min: 8, len: 3 },
        };
        assert_eq!(err.to_string(), "password must be at least 8 characters (got 3)");
        let err = ValidationError {
            field: Field::Email,
            kind: ErrorKind::InvalidEmail,
        };
        assert_eq!(err.to_string(), "email is not a valid email address");
    }
}
