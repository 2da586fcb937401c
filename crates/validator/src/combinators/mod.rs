//! Validator combinators.

pub mod and;

pub use and::And;
