//! Cross-field confirmation validators.
//!
//! Equality is exact and case-sensitive: `A@b.com` does not confirm
//! `a@b.com`.

use crate::foundation::{ErrorReason, Validate};

/// Validates that a confirmation field repeats a reference value.
///
/// An empty confirmation reports `required`; any other difference reports
/// the configured mismatch reason.
///
/// # Examples
///
/// ```
/// use cadastro_validator::foundation::{ErrorReason, Validate};
/// use cadastro_validator::validators::Confirms;
///
/// let v = Confirms::email("a@b.com");
/// assert!(v.validate("a@b.com").is_ok());
/// assert_eq!(v.validate("A@b.com"), Err(ErrorReason::EmailMismatch));
/// assert_eq!(v.validate(""), Err(ErrorReason::Required));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Confirms<'a> {
    reference: &'a str,
    mismatch: ErrorReason,
}

impl<'a> Confirms<'a> {
    /// Confirms an email address.
    #[must_use]
    pub const fn email(reference: &'a str) -> Self {
        Self {
            reference,
            mismatch: ErrorReason::EmailMismatch,
        }
    }

    /// Confirms a password.
    #[must_use]
    pub const fn password(reference: &'a str) -> Self {
        Self {
            reference,
            mismatch: ErrorReason::PasswordMismatch,
        }
    }

    /// Returns the value the confirmation must repeat.
    #[must_use]
    pub const fn reference(&self) -> &'a str {
        self.reference
    }
}

impl Validate for Confirms<'_> {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ErrorReason> {
        if input.is_empty() {
            Err(ErrorReason::Required)
        } else if input != self.reference {
            Err(self.mismatch)
        } else {
            Ok(())
        }
    }
}
