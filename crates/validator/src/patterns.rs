//! Shared regular expressions for field shapes.
//!
//! Digit classes are spelled `[0-9]` because `\d` in the `regex` crate
//! matches every Unicode decimal digit.

use std::sync::LazyLock;

use regex::Regex;

/// Symbols a strong password must draw at least one character from.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&#";

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// `local@domain.tld`: no whitespace, exactly one `@`, a dotted domain.
pub(crate) static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Full password alphabet and length. Character class presence is checked
/// separately since the `regex` crate has no lookahead.
pub(crate) static PASSWORD_ALPHABET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*?&#]{8,}$").expect("password pattern is valid")
});

/// `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
pub(crate) static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{2}\) [0-9]{4,5}-[0-9]{4}$").expect("phone pattern is valid")
});

/// `DDDDD-DDD`.
pub(crate) static CEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("cep pattern is valid"));
