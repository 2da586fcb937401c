//! # cadastro-mask
//!
//! Display masks for Brazilian form inputs.
//!
//! Every function strips the input down to its ASCII digits and re-inserts
//! punctuation only when the digit count fills the mask exactly. Anything
//! shorter or longer comes back as the bare digits, so a value being typed
//! never shows half-applied punctuation.
//!
//! ```
//! assert_eq!(cadastro_mask::cpf("52998224725"), "529.982.247-25");
//! assert_eq!(cadastro_mask::cpf("529.982"), "529982");
//! assert_eq!(cadastro_mask::phone("11912345678"), "(11) 91234-5678");
//! ```
//!
//! All masks are idempotent and never change the digits of their input.

/// Placeholder for one digit in a [`Mask`] pattern.
pub const SLOT: char = '#';

/// A fixed punctuation template.
///
/// `#` marks a digit slot; any other character is copied literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    pattern: &'static str,
}

impl Mask {
    /// Creates a mask from a pattern such as `"#####-###"`.
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// Returns the template.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of digits the mask holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pattern.chars().filter(|&c| c == SLOT).count()
    }

    /// Whether `value` carries exactly enough digits to fill the mask.
    #[must_use]
    pub fn is_complete(&self, value: &str) -> bool {
        digit_count(value) == self.capacity()
    }

    /// Applies the mask to the digits of `value`, or returns the bare digits
    /// when their count does not match [`capacity`](Self::capacity).
    ///
    /// # Examples
    ///
    /// ```
    /// use cadastro_mask::CEP;
    ///
    /// assert_eq!(CEP.apply("01310100"), "01310-100");
    /// assert_eq!(CEP.apply("01310-10"), "0131010");
    /// ```
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        let bare = digits(value);
        if bare.len() == self.capacity() {
            self.fill(&bare)
        } else {
            bare
        }
    }

    /// Writes `bare` into the slots. `bare` must hold exactly
    /// `capacity()` ASCII digits.
    fn fill(&self, bare: &str) -> String {
        let mut slots = bare.chars();
        self.pattern
            .chars()
            .filter_map(|c| if c == SLOT { slots.next() } else { Some(c) })
            .collect()
    }
}

/// `DDD.DDD.DDD-DD`
pub const CPF: Mask = Mask::new("###.###.###-##");
/// `DD.DDD.DDD/DDDD-DD`
pub const CNPJ: Mask = Mask::new("##.###.###/####-##");
/// `(DD) DDDD-DDDD`
pub const LANDLINE: Mask = Mask::new("(##) ####-####");
/// `(DD) DDDDD-DDDD`
pub const MOBILE: Mask = Mask::new("(##) #####-####");
/// `DDDDD-DDD`
pub const CEP: Mask = Mask::new("#####-###");
/// `DD/MM/YYYY`
pub const DATE: Mask = Mask::new("##/##/####");

/// Keeps only the ASCII digits of `value`.
#[must_use]
pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn digit_count(value: &str) -> usize {
    value.bytes().filter(u8::is_ascii_digit).count()
}

#[must_use]
pub fn cpf(value: &str) -> String {
    CPF.apply(value)
}

#[must_use]
pub fn cnpj(value: &str) -> String {
    CNPJ.apply(value)
}

/// Landline layout for 10 digits, mobile layout for 11.
#[must_use]
pub fn phone(value: &str) -> String {
    let bare = digits(value);
    match bare.len() {
        10 => LANDLINE.fill(&bare),
        11 => MOBILE.fill(&bare),
        _ => bare,
    }
}

#[must_use]
pub fn cep(value: &str) -> String {
    CEP.apply(value)
}

/// Day, month and year. The digits are not checked as a calendar date.
#[must_use]
pub fn date(value: &str) -> String {
    DATE.apply(value)
}

/// Removes every `<` and `>`, then trims surrounding whitespace.
///
/// This is a display-level cleanup, not an HTML escaper.
///
/// ```
/// assert_eq!(cadastro_mask::sanitize("  <b>Rex</b> "), "bRex/b");
/// ```
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect::<String>()
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_capacities() {
        assert_eq!(CPF.capacity(), 11);
        assert_eq!(CNPJ.capacity(), 14);
        assert_eq!(LANDLINE.capacity(), 10);
        assert_eq!(MOBILE.capacity(), 11);
        assert_eq!(CEP.capacity(), 8);
        assert_eq!(DATE.capacity(), 8);
    }

    #[rstest]
    #[case("52998224725", "529.982.247-25")]
    #[case("529.982.247-25", "529.982.247-25")]
    #[case("529 982 247 25", "529.982.247-25")]
    #[case("5299822472", "5299822472")]
    #[case("529982247250", "529982247250")]
    #[case("", "")]
    fn test_cpf(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(cpf(input), expected);
    }

    #[rstest]
    #[case("11222333000181", "11.222.333/0001-81")]
    #[case("11.222.333/0001", "112223330001")]
    fn test_cnpj(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(cnpj(input), expected);
    }

    #[rstest]
    #[case("1234567890", "(12) 3456-7890")]
    #[case("12345678901", "(12) 34567-8901")]
    #[case("(12) 3456-789", "123456789")]
    #[case("123456789012", "123456789012")]
    fn test_phone(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(phone(input), expected);
    }

    #[test]
    fn test_cep_and_date() {
        assert_eq!(cep("01310100"), "01310-100");
        assert_eq!(date("31122000"), "31/12/2000");
        // Only the digit count matters.
        assert_eq!(date("2000-12-31"), "20/00/1231");
        assert_eq!(date("1/1/2000"), "112000");
    }

    #[test]
    fn test_unicode_digits_are_dropped() {
        assert_eq!(digits("٠١2a3"), "23");
        assert!(!CEP.is_complete("٠١٣١٠١٠٠"));
        assert!(CEP.is_complete("01310-100"));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("<script>alert(1)</script>"), "scriptalert(1)/script");
        assert_eq!(sanitize("  Maria  "), "Maria");
        assert_eq!(sanitize(" < > "), "");
    }
}
