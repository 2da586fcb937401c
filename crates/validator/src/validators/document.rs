//! Brazilian registry numbers: CPF (individuals) and CNPJ (companies).
//!
//! Both end in two modulo-11 check digits. Punctuation is ignored: only the
//! ASCII digits of the input are considered, so `529.982.247-25` and
//! `52998224725` validate the same.

use crate::foundation::{ErrorReason, Validate};

/// Digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

// ============================================================================
// CHECK DIGITS
// ============================================================================

/// Maps a weighted sum to its check digit: `0` when the remainder modulo 11
/// is below 2, `11 - remainder` otherwise.
const fn check_digit(sum: u32) -> u8 {
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { (11 - remainder) as u8 }
}

/// CPF weighting: the first digit gets weight `len + 1`, descending to 2.
fn cpf_sum(digits: &[u8]) -> u32 {
    let top = digits.len() as u32 + 1;
    digits
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum()
}

/// CNPJ weighting: starts at `len - 7` and descends, wrapping from 2 back
/// to 9.
fn cnpj_sum(digits: &[u8]) -> u32 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0;
    for &d in digits {
        sum += u32::from(d) * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    sum
}

/// Computes the two CPF check digits for a 9-digit base.
///
/// # Examples
///
/// ```
/// use cadastro_validator::validators::cpf_check_digits;
///
/// assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
/// ```
#[must_use]
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(cpf_sum(base));

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    let second = check_digit(cpf_sum(&extended));

    [first, second]
}

/// Computes the two CNPJ check digits for a 12-digit base.
///
/// # Examples
///
/// ```
/// use cadastro_validator::validators::cnpj_check_digits;
///
/// assert_eq!(cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
/// ```
#[must_use]
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(cnpj_sum(base));

    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    let second = check_digit(cnpj_sum(&extended));

    [first, second]
}

/// Extracts the numeric value of every ASCII digit in `input`.
#[must_use]
pub fn ascii_digits(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

// ============================================================================
// CPF VALIDATOR
// ============================================================================

/// Validates a CPF number, masked or not.
///
/// Rejects anything that does not have exactly 11 digits, the ten
/// repeated-digit sequences (`000.000.000-00` … `999.999.999-99`) and
/// numbers whose check digits do not match.
///
/// # Examples
///
/// ```
/// use cadastro_validator::foundation::{ErrorReason, Validate};
/// use cadastro_validator::validators::CpfDigits;
///
/// assert!(CpfDigits.validate("529.982.247-25").is_ok());
/// assert_eq!(CpfDigits.validate("529.982.247-26"), Err(ErrorReason::CpfInvalid));
/// assert_eq!(CpfDigits.validate("111.111.111-11"), Err(ErrorReason::CpfInvalid));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CpfDigits;

impl Validate for CpfDigits {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ErrorReason> {
        let digits = ascii_digits(input);
        let Ok(number) = <[u8; CPF_LENGTH]>::try_from(digits.as_slice()) else {
            return Err(ErrorReason::CpfInvalid);
        };

        if all_same(&number) {
            return Err(ErrorReason::CpfInvalid);
        }

        let mut base = [0u8; 9];
        base.copy_from_slice(&number[..9]);

        if cpf_check_digits(&base) == [number[9], number[10]] {
            Ok(())
        } else {
            Err(ErrorReason::CpfInvalid)
        }
    }
}

/// Creates a [`CpfDigits`] validator.
#[must_use]
pub const fn cpf_digits() -> CpfDigits {
    CpfDigits
}

// ============================================================================
// CNPJ VALIDATOR
// ============================================================================

/// Validates a CNPJ number, masked or not.
///
/// Rejects anything that does not have exactly 14 digits, numbers made of a
/// single repeated digit and numbers whose check digits do not match.
///
/// # Examples
///
/// ```
/// use cadastro_validator::foundation::{ErrorReason, Validate};
/// use cadastro_validator::validators::CnpjDigits;
///
/// assert!(CnpjDigits.validate("11.222.333/0001-81").is_ok());
/// assert_eq!(CnpjDigits.validate("11.222.333/0001-82"), Err(ErrorReason::CnpjInvalid));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CnpjDigits;

impl Validate for CnpjDigits {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ErrorReason> {
        let digits = ascii_digits(input);
        let Ok(number) = <[u8; CNPJ_LENGTH]>::try_from(digits.as_slice()) else {
            return Err(ErrorReason::CnpjInvalid);
        };

        if all_same(&number) {
            return Err(ErrorReason::CnpjInvalid);
        }

        let mut base = [0u8; 12];
        base.copy_from_slice(&number[..12]);

        if cnpj_check_digits(&base) == [number[12], number[13]] {
            Ok(())
        } else {
            Err(ErrorReason::CnpjInvalid)
        }
    }
}

/// Creates a [`CnpjDigits`] validator.
#[must_use]
pub const fn cnpj_digits() -> CnpjDigits {
    CnpjDigits
}

// ============================================================================
// TESTS
// ============================================================================
