//! # cadastro-validator
//!
//! Validation rules for Brazilian registration forms: CPF and CNPJ check
//! digits, contact and address formats, password strength, confirmations and
//! minimum age.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro_validator::prelude::*;
//!
//! assert!(validation::cpf("529.982.247-25").is_ok());
//! assert_eq!(validation::email("ana@"), Err(ErrorReason::EmailInvalid));
//!
//! // Typed validators compose: presence first, then shape.
//! let cep = filled().and(cep_shape());
//! assert_eq!(cep.validate(""), Err(ErrorReason::Required));
//! ```
//!
//! ## Layers
//!
//! - [`validation`]: one flat function per rule, returning
//!   `Result<(), ErrorReason>`.
//! - [`validators`]: the typed [`Validate`](foundation::Validate)
//!   implementations behind those functions. Use the [`validator!`] macro to
//!   add new ones.
//! - [`field`]: the closed set of form fields and the rule each one uses.
//! - [`form`]: multi-step forms that collect every failure of a step into
//!   [`FieldErrors`](foundation::FieldErrors).
//! - [`catalog`] and [`messages`]: option tables and pt-BR texts for
//!   presentation layers.

pub mod catalog;
pub mod combinators;
pub mod field;
pub mod form;
pub mod foundation;
mod macros;
pub mod messages;
pub mod patterns;
pub mod prelude;
pub mod validation;
pub mod validators;
