//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ErrorReason`], [`FieldError`], [`FieldErrors`]
//!
//! Validators are generic over their input type and return a tagged
//! result, `Result<(), ErrorReason>`. Composition goes through
//! [`ValidateExt::and`]:
//!
//! ```
//! use cadastro_validator::foundation::{ErrorReason, Validate, ValidateExt};
//! use cadastro_validator::validators::{EmailShape, Filled};
//!
//! let email = Filled.and(EmailShape);
//! assert_eq!(email.validate(""), Err(ErrorReason::Required));
//! assert_eq!(email.validate("nope"), Err(ErrorReason::EmailInvalid));
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorReason, FieldError, FieldErrors, UnknownReason};
pub use traits::{Validate, ValidateExt};

/// The outcome of validating a single value.
pub type ValidationResult = Result<(), ErrorReason>;
