//! Property-based tests for cadastro-mask.

use cadastro_validator::foundation::ErrorReason;
use cadastro_validator::validation;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: f(f(x)) == f(x)
// ============================================================================

proptest! {
    #[test]
    fn masks_are_idempotent(s in "[0-9 .()/-]{0,20}") {
        for f in [cadastro_mask::cpf, cadastro_mask::cnpj, cadastro_mask::phone, cadastro_mask::cep, cadastro_mask::date] {
            let once = f(&s);
            prop_assert_eq!(f(&once), once);
        }
    }

    #[test]
    fn sanitize_is_idempotent(s in ".{0,40}") {
        let once = cadastro_mask::sanitize(&s);
        prop_assert_eq!(cadastro_mask::sanitize(&once), once);
    }
}

// ============================================================================
// DIGIT PRESERVATION: digits(f(x)) == digits(x)
// ============================================================================

proptest! {
    #[test]
    fn masks_preserve_digits(s in ".{0,24}") {
        let expected = cadastro_mask::digits(&s);
        for f in [cadastro_mask::cpf, cadastro_mask::cnpj, cadastro_mask::phone, cadastro_mask::cep, cadastro_mask::date] {
            prop_assert_eq!(cadastro_mask::digits(&f(&s)), expected.clone());
        }
    }

    #[test]
    fn cpf_masks_only_at_eleven_digits(d in "[0-9]{0,14}") {
        let masked = cadastro_mask::cpf(&d);
        if d.len() == 11 {
            prop_assert_eq!(masked.len(), 14);
            prop_assert_eq!(&masked[3..4], ".");
        } else {
            prop_assert_eq!(masked, d);
        }
    }

    #[test]
    fn sanitize_leaves_no_angle_brackets(s in ".{0,40}") {
        let clean = cadastro_mask::sanitize(&s);
        prop_assert!(!clean.contains(['<', '>']));
        prop_assert_eq!(clean.trim(), clean.as_str());
    }
}

// ============================================================================
// KEYSTROKES
// ============================================================================

#[test]
fn phone_keystrokes() {
    let typed = "12345678901";
    for end in 1..=typed.len() {
        let shown = cadastro_mask::phone(&typed[..end]);
        match end {
            10 => assert_eq!(shown, "(12) 3456-7890"),
            11 => assert_eq!(shown, "(12) 34567-8901"),
            _ => assert_eq!(shown, &typed[..end]),
        }
    }
}

#[test]
fn masked_phone_passes_validation() {
    assert!(validation::phone(&cadastro_mask::phone("1234567890")).is_ok());
    assert!(validation::phone(&cadastro_mask::phone("12345678901")).is_ok());
    assert_eq!(
        validation::phone(&cadastro_mask::phone("123456789")),
        Err(ErrorReason::PhoneInvalid)
    );
}

// ============================================================================
// FORMAT THEN VALIDATE
// ============================================================================

#[test]
fn cep_must_be_masked_before_validation() {
    let raw = "01310100";
    let masked = cadastro_mask::cep(raw);
    assert_eq!(masked, "01310-100");
    assert!(validation::cep(&masked).is_ok());
    assert_eq!(validation::cep(raw), Err(ErrorReason::CepInvalid));
}

#[test]
fn document_masks_keep_documents_valid() {
    let cpf = cadastro_mask::cpf("52998224725");
    assert!(validation::cpf(&cpf).is_ok());
    let cnpj = cadastro_mask::cnpj("11222333000181");
    assert!(validation::cnpj(&cnpj).is_ok());
}
