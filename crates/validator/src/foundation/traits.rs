//! The `Validate` trait and its combinator extension.

use crate::foundation::ErrorReason;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator decides whether a single field value satisfies one rule.
/// Rejection is an ordinary outcome, reported as an [`ErrorReason`]; a
/// validator never panics on malformed input.
///
/// `Input` is `str` for text fields and `bool` for check boxes.
///
/// # Examples
///
/// ```
/// use cadastro_validator::foundation::{ErrorReason, Validate};
///
/// struct Digits;
///
/// impl Validate for Digits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ErrorReason> {
///         if input.chars().all(|c| c.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ErrorReason::CepInvalid)
///         }
///     }
/// }
///
/// assert!(Digits.validate("01310100").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Returns the broken rule's reason, or `Ok(())`.
    fn validate(&self, input: &Self::Input) -> Result<(), ErrorReason>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ErrorReason> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure, so the left validator's reason
    /// wins. This is how "required first, then shape" rules are built.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadastro_validator::foundation::{ErrorReason, Validate, ValidateExt};
    /// use cadastro_validator::validators::{CepShape, Filled};
    ///
    /// let cep = Filled.and(CepShape);
    /// assert_eq!(cep.validate(""), Err(ErrorReason::Required));
    /// assert_eq!(cep.validate("0131"), Err(ErrorReason::CepInvalid));
    /// assert!(cep.validate("01310-100").is_ok());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{Accepted, Filled};

    #[test]
    fn test_bool_input() {
        assert!(Accepted.validate(&true).is_ok());
        assert_eq!(Accepted.validate(&false), Err(ErrorReason::TermsRequired));
    }

    #[test]
    fn test_reference_is_validator() {
        let by_ref = &Filled;
        assert!(Validate::validate(&by_ref, "x").is_ok());
        assert_eq!(by_ref.and(Filled).validate(""), Err(ErrorReason::Required));
    }
}
