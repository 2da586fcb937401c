//! Error types for validation failures
//!
//! Validators report one [`ErrorReason`] out of a closed set. Form-level
//! validation attaches the failing field to it ([`FieldError`]) and collects
//! the failures of a whole step ([`FieldErrors`]).
//!
//! Reasons carry no presentation text. Display strings for a locale live in
//! [`crate::messages`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

// ============================================================================
// ERROR REASON
// ============================================================================

/// Why a field value was rejected.
///
/// The set is closed: every validator in this crate returns one of these and
/// nothing else. The `Display` form and the serialized form are both the
/// dotted code (`"cpf.invalid"`), which presentation layers use as a lookup
/// key for localized text.
///
/// # Examples
///
/// ```
/// use cadastro_validator::foundation::ErrorReason;
///
/// assert_eq!(ErrorReason::CpfInvalid.code(), "cpf.invalid");
/// assert_eq!("phone.invalid".parse(), Ok(ErrorReason::PhoneInvalid));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
pub enum ErrorReason {
    /// A mandatory value is empty (or `false` for a flag).
    #[error("required")]
    #[serde(rename = "required")]
    Required,

    /// The value does not look like `local@domain.tld`.
    #[error("email.invalid")]
    #[serde(rename = "email.invalid")]
    EmailInvalid,

    /// The email confirmation differs from the email.
    #[error("email.mismatch")]
    #[serde(rename = "email.mismatch")]
    EmailMismatch,

    /// The password misses a character class or is too short.
    #[error("password.weak")]
    #[serde(rename = "password.weak")]
    PasswordWeak,

    /// The password confirmation differs from the password.
    #[error("password.mismatch")]
    #[serde(rename = "password.mismatch")]
    PasswordMismatch,

    /// The CPF has the wrong length, a repeated digit or bad check digits.
    #[error("cpf.invalid")]
    #[serde(rename = "cpf.invalid")]
    CpfInvalid,

    /// The CNPJ has the wrong length, a repeated digit or bad check digits.
    #[error("cnpj.invalid")]
    #[serde(rename = "cnpj.invalid")]
    CnpjInvalid,

    /// The phone is not `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
    #[error("phone.invalid")]
    #[serde(rename = "phone.invalid")]
    PhoneInvalid,

    /// The postal code is not `DDDDD-DDD`.
    #[error("cep.invalid")]
    #[serde(rename = "cep.invalid")]
    CepInvalid,

    /// The birth date is unreadable or the person is under the minimum age.
    #[error("age.minimum")]
    #[serde(rename = "age.minimum")]
    AgeMinimum,

    /// The terms of use were not accepted.
    #[error("terms.required")]
    #[serde(rename = "terms.required")]
    TermsRequired,
}

impl ErrorReason {
    /// Every reason, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Required,
        Self::EmailInvalid,
        Self::EmailMismatch,
        Self::PasswordWeak,
        Self::PasswordMismatch,
        Self::CpfInvalid,
        Self::CnpjInvalid,
        Self::PhoneInvalid,
        Self::CepInvalid,
        Self::AgeMinimum,
        Self::TermsRequired,
    ];

    /// Returns the stable dotted code for this reason.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::EmailInvalid => "email.invalid",
            Self::EmailMismatch => "email.mismatch",
            Self::PasswordWeak => "password.weak",
            Self::PasswordMismatch => "password.mismatch",
            Self::CpfInvalid => "cpf.invalid",
            Self::CnpjInvalid => "cnpj.invalid",
            Self::PhoneInvalid => "phone.invalid",
            Self::CepInvalid => "cep.invalid",
            Self::AgeMinimum => "age.minimum",
            Self::TermsRequired => "terms.required",
        }
    }
}

/// Returned when parsing a code that is not part of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error reason `{0}`")]
pub struct UnknownReason(pub String);

impl FromStr for ErrorReason {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.code() == s)
            .ok_or_else(|| UnknownReason(s.to_owned()))
    }
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A rejected form field together with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize)]
#[error("[{field}] {reason}")]
pub struct FieldError {
    /// The field that failed.
    pub field: FieldId,
    /// Why it failed.
    pub reason: ErrorReason,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub const fn new(field: FieldId, reason: ErrorReason) -> Self {
        Self { field, reason }
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The failures of one form step, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Appends every error of another collection.
    pub fn extend(&mut self, other: FieldErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the reason recorded for `field`, if it failed.
    #[must_use]
    pub fn reason_for(&self, field: FieldId) -> Option<ErrorReason> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.reason)
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_code() {
        for reason in ErrorReason::ALL {
            assert_eq!(reason.to_string(), reason.code());
        }
    }

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for reason in ErrorReason::ALL {
            assert_eq!(reason.code().parse::<ErrorReason>(), Ok(reason));
        }
        assert_eq!(
            "auth.invalid".parse::<ErrorReason>(),
            Err(UnknownReason("auth.invalid".into()))
        );
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&ErrorReason::EmailMismatch).unwrap();
        assert_eq!(json, "\"email.mismatch\"");
        let back: ErrorReason = serde_json::from_str("\"terms.required\"").unwrap();
        assert_eq!(back, ErrorReason::TermsRequired);
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new(FieldId::Cpf, ErrorReason::CpfInvalid);
        assert_eq!(error.to_string(), "[cpf] cpf.invalid");
    }

    #[test]
    fn test_error_collection() {
        let mut errors = FieldErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.add(FieldError::new(FieldId::Name, ErrorReason::Required));
        errors.add(FieldError::new(FieldId::Cep, ErrorReason::CepInvalid));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert_eq!(errors.reason_for(FieldId::Cep), Some(ErrorReason::CepInvalid));
        assert_eq!(errors.reason_for(FieldId::Email), None);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_collection_display_numbers_entries() {
        let errors: FieldErrors = [
            FieldError::new(FieldId::Email, ErrorReason::EmailInvalid),
            FieldError::new(FieldId::AcceptTerms, ErrorReason::TermsRequired),
        ]
        .into_iter()
        .collect();

        let rendered = errors.to_string();
        assert!(rendered.starts_with("Validation failed with 2 error(s):"));
        assert!(rendered.contains("1. [email] email.invalid"));
        assert!(rendered.contains("2. [acceptTerms] terms.required"));
    }
}
