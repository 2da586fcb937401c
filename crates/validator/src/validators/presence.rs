//! Presence validators
//!
//! A text value is present when it is non-empty; whitespace counts as
//! content. A flag is present when it is `true`.

use crate::foundation::ErrorReason;

crate::validator! {
    /// Validates that a text value is not empty.
    pub Filled for str;
    rule(input) { !input.is_empty() }
    error { ErrorReason::Required }
    fn filled();
}

crate::validator! {
    /// Validates that a flag is set, reporting `required` otherwise.
    pub Checked for bool;
    rule(input) { *input }
    error { ErrorReason::Required }
    fn checked();
}

crate::validator! {
    /// Validates that the terms of use were accepted.
    pub Accepted for bool;
    rule(input) { *input }
    error { ErrorReason::TermsRequired }
    fn accepted();
}
