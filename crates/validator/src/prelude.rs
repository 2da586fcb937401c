//! Prelude module for convenient imports.
//!
//! Provides a single `use cadastro_validator::prelude::*;` import that brings
//! in the traits, error types, validators and form types.
//!
//! # Examples
//!
//! ```rust
//! use cadastro_validator::prelude::*;
//!
//! let rule = filled().and(phone_shape());
//! assert!(rule.validate("(11) 3456-7890").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    ErrorReason, FieldError, FieldErrors, Validate, ValidateExt, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::And;
pub use crate::validation;

// ============================================================================
// FIELDS AND FORMS
// ============================================================================

pub use crate::field::{FieldContext, FieldId, FieldValue, Policy, Rule, validate_field};
pub use crate::form::{
    AdopterForm, DonorInstitutionForm, DonorPersonForm, Form, FormKind, LoginForm, Step,
};
