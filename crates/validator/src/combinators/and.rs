//! Sequential conjunction of two validators.

use crate::foundation::{ErrorReason, Validate};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator, so ordering matters:
/// `Filled.and(CpfDigits)` reports `required` for an empty value and
/// `cpf.invalid` for everything else that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// The validator that runs first.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The validator that runs once the left one passed.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ErrorReason> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{CepShape, CpfDigits, Filled};

    #[test]
    fn test_both_pass() {
        assert!(And::new(Filled, CepShape).validate("01310-100").is_ok());
    }

    #[test]
    fn test_left_failure_wins() {
        // CepShape would also reject "", but presence is reported.
        assert_eq!(Filled.and(CepShape).validate(""), Err(ErrorReason::Required));
    }

    #[test]
    fn test_right_failure() {
        assert_eq!(Filled.and(CpfDigits).validate("123"), Err(ErrorReason::CpfInvalid));
    }

    #[test]
    fn test_accessors() {
        let rule = Filled.and(CepShape);
        assert_eq!(*rule.left(), Filled);
        assert_eq!(*rule.right(), CepShape);
    }
}
