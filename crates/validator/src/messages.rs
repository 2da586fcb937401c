//! pt-BR display messages for error reasons.
//!
//! Validators only report [`ErrorReason`] codes; presentation layers turn
//! them into text here.

use crate::foundation::ErrorReason;

/// Returns the Brazilian Portuguese message for `reason`.
///
/// # Examples
///
/// ```
/// use cadastro_validator::foundation::ErrorReason;
/// use cadastro_validator::messages;
///
/// assert_eq!(messages::pt_br(ErrorReason::CpfInvalid), "CPF inválido");
/// ```
#[must_use]
pub const fn pt_br(reason: ErrorReason) -> &'static str {
    match reason {
        ErrorReason::Required => "Este campo é obrigatório",
        ErrorReason::EmailInvalid => "E-mail inválido",
        ErrorReason::EmailMismatch => "Os e-mails não conferem",
        ErrorReason::PasswordWeak => {
            "A senha deve ter no mínimo 8 caracteres, incluindo maiúsculas, minúsculas, números e caracteres especiais"
        }
        ErrorReason::PasswordMismatch => "As senhas não conferem",
        ErrorReason::CpfInvalid => "CPF inválido",
        ErrorReason::CnpjInvalid => "CNPJ inválido",
        ErrorReason::PhoneInvalid => "Telefone inválido",
        ErrorReason::CepInvalid => "CEP inválido",
        ErrorReason::AgeMinimum => "É necessário ter no mínimo 18 anos",
        ErrorReason::TermsRequired => "Você deve aceitar os termos de uso",
    }
}
