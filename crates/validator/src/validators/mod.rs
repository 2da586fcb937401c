//! Built-in validators
//!
//! Leaf validators check one property each. The field rules the forms use
//! are compositions that check presence first, so an empty value always
//! reports `required`:
//!
//! | Rule | Composition |
//! |---|---|
//! | [`email`] | [`Filled`] and [`EmailShape`] |
//! | [`password`] | [`Filled`] and [`PasswordStrength`] |
//! | [`phone`] | [`Filled`] and [`PhoneShape`] |
//! | [`cep`] | [`Filled`] and [`CepShape`] |
//! | [`cpf`] | [`Filled`] and [`CpfDigits`] |
//! | [`cnpj`] | [`Filled`] and [`CnpjDigits`] |
//!
//! [`Confirms`] and [`MinimumAge`] handle emptiness themselves.

pub mod age;
pub mod confirmation;
pub mod contact;
pub mod document;
pub mod password;
pub mod presence;

pub use age::{ADULT_AGE, MinimumAge, completed_years, parse_birth_date};
pub use confirmation::Confirms;
pub use contact::{CepShape, EmailShape, PhoneShape, cep_shape, email_shape, phone_shape};
pub use document::{
    CNPJ_LENGTH, CPF_LENGTH, CnpjDigits, CpfDigits, ascii_digits, cnpj_check_digits, cnpj_digits,
    cpf_check_digits, cpf_digits,
};
pub use password::{PasswordStrength, password_strength};
pub use presence::{Accepted, Checked, Filled, accepted, checked, filled};

use crate::combinators::And;

// ============================================================================
// FIELD RULES
// ============================================================================

/// Required, well-formed email address.
pub type Email = And<Filled, EmailShape>;
/// Required, strong password.
pub type Password = And<Filled, PasswordStrength>;
/// Required, masked phone number.
pub type Phone = And<Filled, PhoneShape>;
/// Required, masked postal code.
pub type Cep = And<Filled, CepShape>;
/// Required, valid CPF.
pub type Cpf = And<Filled, CpfDigits>;
/// Required, valid CNPJ.
pub type Cnpj = And<Filled, CnpjDigits>;

/// Creates the [`Email`] rule.
#[must_use]
pub const fn email() -> Email {
    And::new(Filled, EmailShape)
}

/// Creates the [`Password`] rule.
#[must_use]
pub const fn password() -> Password {
    And::new(Filled, PasswordStrength)
}

/// Creates the [`Phone`] rule.
#[must_use]
pub const fn phone() -> Phone {
    And::new(Filled, PhoneShape)
}

/// Creates the [`Cep`] rule.
#[must_use]
pub const fn cep() -> Cep {
    And::new(Filled, CepShape)
}

/// Creates the [`Cpf`] rule.
#[must_use]
pub const fn cpf() -> Cpf {
    And::new(Filled, CpfDigits)
}

/// Creates the [`Cnpj`] rule.
#[must_use]
pub const fn cnpj() -> Cnpj {
    And::new(Filled, CnpjDigits)
}
