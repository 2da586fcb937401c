//! Password strength validator.

use crate::foundation::{ErrorReason, Validate};
use crate::patterns::{PASSWORD_ALPHABET, PASSWORD_SYMBOLS};

/// Validates password strength.
///
/// A strong password:
/// - is at least 8 characters long
/// - uses only ASCII letters, digits and the symbols `@ $ ! % * ? & #`
/// - contains at least one lowercase letter, one uppercase letter, one digit
///   and one of those symbols
///
/// Emptiness is not special-cased here; compose with
/// [`Filled`](super::Filled) to report `required`.
///
/// # Examples
///
/// ```
/// use cadastro_validator::foundation::{ErrorReason, Validate};
/// use cadastro_validator::validators::PasswordStrength;
///
/// assert!(PasswordStrength.validate("Senha123!").is_ok());
/// assert_eq!(PasswordStrength.validate("senha123!"), Err(ErrorReason::PasswordWeak));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PasswordStrength;

impl PasswordStrength {
    fn has_every_class(input: &str) -> bool {
        let mut lower = false;
        let mut upper = false;
        let mut digit = false;
        let mut symbol = false;

        for c in input.chars() {
            lower |= c.is_ascii_lowercase();
            upper |= c.is_ascii_uppercase();
            digit |= c.is_ascii_digit();
            symbol |= PASSWORD_SYMBOLS.contains(c);
        }

        lower && upper && digit && symbol
    }
}

impl Validate for PasswordStrength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ErrorReason> {
        if PASSWORD_ALPHABET.is_match(input) && Self::has_every_class(input) {
            Ok(())
        } else {
            Err(ErrorReason::PasswordWeak)
        }
    }
}

/// Creates a [`PasswordStrength`] validator.
#[must_use]
pub const fn password_strength() -> PasswordStrength {
    PasswordStrength
}
