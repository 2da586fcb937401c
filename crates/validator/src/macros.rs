//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```
//! use cadastro_validator::validator;
//! use cadastro_validator::foundation::{ErrorReason, Validate};
//!
//! validator! {
//!     /// Accepts values made only of ASCII digits.
//!     pub OnlyDigits for str;
//!     rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
//!     error { ErrorReason::CepInvalid }
//!     fn only_digits();
//! }
//!
//! assert!(only_digits().validate("01310100").is_ok());
//! assert_eq!(OnlyDigits.validate("01310-100"), Err(ErrorReason::CepInvalid));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation
/// and, optionally, a `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied.
/// The `rule` block decides acceptance; the `error` block yields the
/// [`ErrorReason`](crate::foundation::ErrorReason) reported on rejection.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ErrorReason> {
                if $rule { Ok(()) } else { Err($err) }
            }
        }
    };
}
