//! Flat validation functions, one per field rule.
//!
//! Each function checks a single raw value and returns `Ok(())` or the
//! [`ErrorReason`] to show. They are thin wrappers over the typed validators
//! in [`crate::validators`]; reach for those when composing rules.
//!
//! ```
//! use cadastro_validator::foundation::ErrorReason;
//! use cadastro_validator::validation;
//!
//! assert!(validation::cpf("529.982.247-25").is_ok());
//! assert_eq!(validation::cep("01310100"), Err(ErrorReason::CepInvalid));
//! assert_eq!(validation::phone(""), Err(ErrorReason::Required));
//! ```

use chrono::NaiveDate;

use crate::field::FieldValue;
use crate::foundation::{Validate, ValidationResult};
use crate::validators::{self, Accepted, Checked, Confirms, Filled, MinimumAge};

/// Non-empty text, or a set flag.
pub fn required<'a>(value: impl Into<FieldValue<'a>>) -> ValidationResult {
    match value.into() {
        FieldValue::Text(text) => Filled.validate(text),
        FieldValue::Flag(flag) => Checked.validate(&flag),
    }
}

/// Plausible email address: `local@domain.tld` without whitespace.
pub fn email(value: &str) -> ValidationResult {
    validators::email().validate(value)
}

/// `confirmation` repeats `email` exactly.
pub fn email_confirmation(email: &str, confirmation: &str) -> ValidationResult {
    Confirms::email(email).validate(confirmation)
}

/// Strong password: eight or more characters mixing lowercase, uppercase,
/// digits and symbols.
pub fn password(value: &str) -> ValidationResult {
    validators::password().validate(value)
}

/// `confirmation` repeats `password` exactly.
pub fn password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    Confirms::password(password).validate(confirmation)
}

/// Masked phone number, `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
pub fn phone(value: &str) -> ValidationResult {
    validators::phone().validate(value)
}

/// Masked postal code, `DDDDD-DDD`.
pub fn cep(value: &str) -> ValidationResult {
    validators::cep().validate(value)
}

pub fn cpf(value: &str) -> ValidationResult {
    validators::cpf().validate(value)
}

pub fn cnpj(value: &str) -> ValidationResult {
    validators::cnpj().validate(value)
}

/// Adult on the local calendar date.
pub fn age(birth_date: &str) -> ValidationResult {
    MinimumAge::adult_today().validate(birth_date)
}

/// Adult on `today`.
pub fn age_on(birth_date: &str, today: NaiveDate) -> ValidationResult {
    MinimumAge::adult(today).validate(birth_date)
}

/// Terms of use accepted.
pub fn terms(accepted: bool) -> ValidationResult {
    Accepted.validate(&accepted)
}
