//! Contact and address shape validators
//!
//! Shape checks only; emptiness is left to [`Filled`](super::Filled) so the
//! composed rule can report `required` first.

use crate::foundation::ErrorReason;
use crate::patterns::{CEP, EMAIL, PHONE};

crate::validator! {
    /// Validates the `local@domain.tld` shape.
    pub EmailShape for str;
    rule(input) { EMAIL.is_match(input) }
    error { ErrorReason::EmailInvalid }
    fn email_shape();
}

crate::validator! {
    /// Validates a masked Brazilian phone: `(DD) DDDD-DDDD` or
    /// `(DD) DDDDD-DDDD`.
    ///
    /// Raw digits are rejected; format with `cadastro_mask::phone` first.
    pub PhoneShape for str;
    rule(input) { PHONE.is_match(input) }
    error { ErrorReason::PhoneInvalid }
    fn phone_shape();
}

crate::validator! {
    /// Validates a masked postal code: `DDDDD-DDD`.
    pub CepShape for str;
    rule(input) { CEP.is_match(input) }
    error { ErrorReason::CepInvalid }
    fn cep_shape();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    mod email {
        use super::*;

        #[test]
        fn test_valid() {
            let v = email_shape();
            assert!(v.validate("user@example.com").is_ok());
            assert!(v.validate("first.last+tag@mail.example.com.br").is_ok());
            assert!(v.validate("a@b.c").is_ok());
        }

        #[test]
        fn test_invalid() {
            let v = email_shape();
            for input in [
                "invalid",
                "@example.com",
                "user@",
                "user@example",
                "user@@example.com",
                "us er@example.com",
                "user@exa mple.com",
                "user@example.",
            ] {
                assert_eq!(v.validate(input), Err(ErrorReason::EmailInvalid), "{input}");
            }
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_landline_and_mobile() {
            let v = phone_shape();
            assert!(v.validate("(11) 3456-7890").is_ok());
            assert!(v.validate("(11) 93456-7890").is_ok());
        }

        #[test]
        fn test_rejects_other_layouts() {
            let v = phone_shape();
            for input in [
                "11934567890",
                "(11)93456-7890",
                "(11) 934567890",
                "(11) 123-4567",
                "(11) 123456-7890",
                "+55 (11) 93456-7890",
                "(1) 93456-7890",
            ] {
                assert_eq!(v.validate(input), Err(ErrorReason::PhoneInvalid), "{input}");
            }
        }
    }

    mod cep {
        use super::*;

        #[test]
        fn test_masked_only() {
            let v = cep_shape();
            assert!(v.validate("01310-100").is_ok());
            assert_eq!(v.validate("01310100"), Err(ErrorReason::CepInvalid));
            assert_eq!(v.validate("0131-0100"), Err(ErrorReason::CepInvalid));
            assert_eq!(v.validate("01310-1000"), Err(ErrorReason::CepInvalid));
        }
    }
}
