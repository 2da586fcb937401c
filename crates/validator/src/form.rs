//! Multi-step registration forms.
//!
//! Each form is a plain `serde` payload (camelCase keys, missing keys
//! default to empty) plus a static table of steps. A step lists the fields
//! it checks and the rule applied to each; validating a step runs every rule
//! and collects all failures in table order, so a caller can show every
//! message of the step at once.
//!
//! Step numbers are 1-based. A step outside the table checks nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::field::{FieldContext, FieldId, FieldValue, Policy, Rule};
use crate::foundation::{FieldError, FieldErrors};

// ============================================================================
// STEPS
// ============================================================================

/// One page of a multi-step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Short identifier of the page.
    pub name: &'static str,
    /// Fields checked on this page, with their rules, in display order.
    pub fields: &'static [(FieldId, Rule)],
}

/// Pairs a field with its default rule.
const fn ruled(field: FieldId) -> (FieldId, Rule) {
    (field, field.rule())
}

const ADDRESS_FIELDS: &[(FieldId, Rule)] = &[
    ruled(FieldId::Cep),
    ruled(FieldId::Street),
    ruled(FieldId::Number),
    ruled(FieldId::Neighborhood),
    ruled(FieldId::City),
    ruled(FieldId::State),
];

const ACCOUNT_FIELDS: &[(FieldId, Rule)] = &[
    ruled(FieldId::Email),
    ruled(FieldId::EmailConfirmation),
    ruled(FieldId::Password),
    ruled(FieldId::PasswordConfirmation),
    ruled(FieldId::AcceptTerms),
];

// ============================================================================
// FORM TRAIT
// ============================================================================

/// A form whose fields can be validated step by step.
pub trait Form {
    /// Which form this is.
    const KIND: FormKind;

    /// The pages of the form, in order.
    const STEPS: &'static [Step];

    /// Returns the raw value of `field`. Fields the form does not have read
    /// as empty text.
    fn value(&self, field: FieldId) -> FieldValue<'_>;

    /// Builds the cross-field context: confirmations are checked against the
    /// form's own email and password.
    fn context(&self, policy: Policy) -> FieldContext<'_> {
        FieldContext::new(policy)
            .with_email(self.value(FieldId::Email).as_text())
            .with_password(self.value(FieldId::Password).as_text())
    }

    /// Validates the fields of one step.
    fn validate_step(&self, step: usize, policy: Policy) -> Result<(), FieldErrors> {
        let Some(page) = step.checked_sub(1).and_then(|index| Self::STEPS.get(index)) else {
            tracing::trace!(form = %Self::KIND, step, "no such step; nothing to validate");
            return Ok(());
        };

        let ctx = self.context(policy);
        page.fields
            .iter()
            .filter_map(|&(field, rule)| {
                let reason = rule.apply(self.value(field), &ctx).err()?;
                tracing::debug!(
                    form = %Self::KIND,
                    step,
                    field = %field,
                    reason = %reason,
                    "field rejected"
                );
                Some(FieldError::new(field, reason))
            })
            .collect::<FieldErrors>()
            .into_result()
    }

    /// Validates every step, collecting all failures.
    fn validate(&self, policy: Policy) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for step in 1..=Self::STEPS.len() {
            if let Err(step_errors) = self.validate_step(step, policy) {
                errors.extend(step_errors);
            }
        }
        errors.into_result()
    }
}

// ============================================================================
// FORM KINDS
// ============================================================================

/// The forms of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Adopter,
    DonorPerson,
    DonorInstitution,
    Login,
}

impl FormKind {
    /// Every form kind.
    pub const ALL: [Self; 4] = [
        Self::Adopter,
        Self::DonorPerson,
        Self::DonorInstitution,
        Self::Login,
    ];

    /// Returns the kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adopter => "adopter",
            Self::DonorPerson => "donor-person",
            Self::DonorInstitution => "donor-institution",
            Self::Login => "login",
        }
    }

    /// Returns the step table of this form.
    #[must_use]
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Self::Adopter => AdopterForm::STEPS,
            Self::DonorPerson => DonorPersonForm::STEPS,
            Self::DonorInstitution => DonorInstitutionForm::STEPS,
            Self::Login => LoginForm::STEPS,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a form kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form `{0}`")]
pub struct UnknownForm(pub String);

impl FromStr for FormKind {
    type Err = UnknownForm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownForm(s.to_owned()))
    }
}

// ============================================================================
// SHARED SECTIONS
// ============================================================================

/// Postal address section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl Address {
    fn value(&self, field: FieldId) -> Option<FieldValue<'_>> {
        let text = match field {
            FieldId::Cep => &self.cep,
            FieldId::Street => &self.street,
            FieldId::Number => &self.number,
            FieldId::Neighborhood => &self.neighborhood,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            _ => return None,
        };
        Some(text.into())
    }
}

/// Login credentials section with confirmations and terms acceptance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub email: String,
    pub email_confirmation: String,
    pub password: String,
    pub password_confirmation: String,
    pub accept_terms: bool,
}

impl Account {
    fn value(&self, field: FieldId) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field {
            FieldId::Email => (&self.email).into(),
            FieldId::EmailConfirmation => (&self.email_confirmation).into(),
            FieldId::Password => (&self.password).into(),
            FieldId::PasswordConfirmation => (&self.password_confirmation).into(),
            FieldId::AcceptTerms => self.accept_terms.into(),
            _ => return None,
        };
        Some(value)
    }
}

/// Residence type offered on the adopter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidenceType {
    #[default]
    House,
    Apartment,
}

/// Residence ownership offered on the adopter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    #[default]
    Owned,
    Rented,
}

/// Housing section of the adopter form. Informational only: no rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Housing {
    pub residence_type: ResidenceType,
    pub ownership: Ownership,
    pub has_yard: bool,
    pub is_screened: bool,
    pub has_other_animals: bool,
    pub other_animals_details: Option<String>,
}

const EMPTY: FieldValue<'static> = FieldValue::Text("");

// ============================================================================
// ADOPTER
// ============================================================================

/// Adoption candidate registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdopterForm {
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
    pub phone: String,
    pub marital_status: String,
    pub occupation: String,
    #[serde(flatten)]
    pub address: Address,
    #[serde(flatten)]
    pub housing: Housing,
    #[serde(flatten)]
    pub account: Account,
}

impl Form for AdopterForm {
    const KIND: FormKind = FormKind::Adopter;

    const STEPS: &'static [Step] = &[
        Step {
            name: "personal",
            fields: &[
                ruled(FieldId::Name),
                ruled(FieldId::Cpf),
                ruled(FieldId::BirthDate),
                ruled(FieldId::Phone),
                ruled(FieldId::MaritalStatus),
                ruled(FieldId::Occupation),
            ],
        },
        Step {
            name: "address",
            fields: ADDRESS_FIELDS,
        },
        Step {
            name: "housing",
            fields: &[],
        },
        Step {
            name: "account",
            fields: ACCOUNT_FIELDS,
        },
    ];

    fn value(&self, field: FieldId) -> FieldValue<'_> {
        let text = match field {
            FieldId::Name => &self.name,
            FieldId::Cpf => &self.cpf,
            FieldId::BirthDate => &self.birth_date,
            FieldId::Phone => &self.phone,
            FieldId::MaritalStatus => &self.marital_status,
            FieldId::Occupation => &self.occupation,
            _ => {
                return self
                    .address
                    .value(field)
                    .or_else(|| self.account.value(field))
                    .unwrap_or(EMPTY);
            }
        };
        text.into()
    }
}

// ============================================================================
// DONOR (PERSON)
// ============================================================================

/// Individual donor registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorPersonForm {
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
    pub phone: String,
    #[serde(flatten)]
    pub address: Address,
    #[serde(flatten)]
    pub account: Account,
}

impl Form for DonorPersonForm {
    const KIND: FormKind = FormKind::DonorPerson;

    const STEPS: &'static [Step] = &[
        Step {
            name: "personal",
            fields: &[
                ruled(FieldId::Name),
                ruled(FieldId::Cpf),
                ruled(FieldId::BirthDate),
                ruled(FieldId::Phone),
            ],
        },
        Step {
            name: "address",
            fields: ADDRESS_FIELDS,
        },
        Step {
            name: "account",
            fields: ACCOUNT_FIELDS,
        },
    ];

    fn value(&self, field: FieldId) -> FieldValue<'_> {
        let text = match field {
            FieldId::Name => &self.name,
            FieldId::Cpf => &self.cpf,
            FieldId::BirthDate => &self.birth_date,
            FieldId::Phone => &self.phone,
            _ => {
                return self
                    .address
                    .value(field)
                    .or_else(|| self.account.value(field))
                    .unwrap_or(EMPTY);
            }
        };
        text.into()
    }
}

// ============================================================================
// DONOR (INSTITUTION)
// ============================================================================

/// Institutional donor registration (shelters, NGOs, clinics).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorInstitutionForm {
    pub institution_name: String,
    pub cnpj: String,
    pub activity_area: String,
    pub institution_phone: String,
    pub website: Option<String>,
    pub responsible_name: String,
    pub responsible_cpf: String,
    pub responsible_role: String,
    pub responsible_phone: String,
    #[serde(flatten)]
    pub address: Address,
    #[serde(flatten)]
    pub account: Account,
}

impl Form for DonorInstitutionForm {
    const KIND: FormKind = FormKind::DonorInstitution;

    const STEPS: &'static [Step] = &[
        Step {
            name: "institution",
            fields: &[
                ruled(FieldId::InstitutionName),
                ruled(FieldId::Cnpj),
                ruled(FieldId::ActivityArea),
                ruled(FieldId::InstitutionPhone),
            ],
        },
        Step {
            name: "responsible",
            fields: &[
                ruled(FieldId::ResponsibleName),
                ruled(FieldId::ResponsibleCpf),
                ruled(FieldId::ResponsibleRole),
                ruled(FieldId::ResponsiblePhone),
            ],
        },
        Step {
            name: "address",
            fields: ADDRESS_FIELDS,
        },
        Step {
            name: "account",
            fields: ACCOUNT_FIELDS,
        },
    ];

    fn value(&self, field: FieldId) -> FieldValue<'_> {
        let text = match field {
            FieldId::InstitutionName => &self.institution_name,
            FieldId::Cnpj => &self.cnpj,
            FieldId::ActivityArea => &self.activity_area,
            FieldId::InstitutionPhone => &self.institution_phone,
            FieldId::ResponsibleName => &self.responsible_name,
            FieldId::ResponsibleCpf => &self.responsible_cpf,
            FieldId::ResponsibleRole => &self.responsible_role,
            FieldId::ResponsiblePhone => &self.responsible_phone,
            _ => {
                return self
                    .address
                    .value(field)
                    .or_else(|| self.account.value(field))
                    .unwrap_or(EMPTY);
            }
        };
        text.into()
    }
}

// ============================================================================
// LOGIN
// ============================================================================

/// Sign-in form. The password is only required to be present here; its
/// strength was checked at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Form for LoginForm {
    const KIND: FormKind = FormKind::Login;

    const STEPS: &'static [Step] = &[Step {
        name: "login",
        fields: &[
            (FieldId::Email, Rule::Email),
            (FieldId::Password, Rule::Required),
        ],
    }];

    fn value(&self, field: FieldId) -> FieldValue<'_> {
        match field {
            FieldId::Email => (&self.email).into(),
            FieldId::Password => (&self.password).into(),
            _ => EMPTY,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorReason;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn policy() -> Policy {
        Policy::on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn account() -> Account {
        Account {
            email: "ana@example.com".into(),
            email_confirmation: "ana@example.com".into(),
            password: "Senha123!".into(),
            password_confirmation: "Senha123!".into(),
            accept_terms: true,
        }
    }

    fn address() -> Address {
        Address {
            cep: "01310-100".into(),
            street: "Avenida Paulista".into(),
            number: "1578".into(),
            complement: None,
            neighborhood: "Bela Vista".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        }
    }

    fn adopter() -> AdopterForm {
        AdopterForm {
            name: "Ana Souza".into(),
            cpf: "529.982.247-25".into(),
            birth_date: "1990-04-12".into(),
            phone: "(11) 91234-5678".into(),
            marital_status: "solteiro".into(),
            occupation: "Engenheira".into(),
            address: address(),
            housing: Housing::default(),
            account: account(),
        }
    }

    #[test]
    fn test_complete_adopter_passes() {
        assert_eq!(adopter().validate(policy()), Ok(()));
    }

    #[test]
    fn test_step_collects_every_failure_in_order() {
        let form = AdopterForm {
            cpf: "111.111.111-11".into(),
            birth_date: "2010-01-01".into(),
            phone: "11912345678".into(),
            occupation: String::new(),
            ..adopter()
        };

        let errors = form.validate_step(1, policy()).unwrap_err();
        let got: Vec<_> = errors.errors().to_vec();
        assert_eq!(
            got,
            vec![
                FieldError::new(FieldId::Cpf, ErrorReason::CpfInvalid),
                FieldError::new(FieldId::BirthDate, ErrorReason::AgeMinimum),
                FieldError::new(FieldId::Phone, ErrorReason::PhoneInvalid),
                FieldError::new(FieldId::Occupation, ErrorReason::Required),
            ]
        );
    }

    #[test]
    fn test_other_steps_are_not_checked() {
        let form = AdopterForm {
            account: Account::default(),
            ..adopter()
        };
        assert!(form.validate_step(1, policy()).is_ok());
        assert!(form.validate_step(2, policy()).is_ok());
        assert!(form.validate_step(3, policy()).is_ok());
        assert!(form.validate_step(4, policy()).is_err());
    }

    #[test]
    fn test_out_of_range_step_checks_nothing() {
        let form = AdopterForm::default();
        assert!(form.validate_step(0, policy()).is_ok());
        assert!(form.validate_step(5, policy()).is_ok());
    }

    #[test]
    fn test_account_step_uses_form_references() {
        let form = DonorPersonForm {
            name: "Ana".into(),
            cpf: "52998224725".into(),
            birth_date: "1990-04-12".into(),
            phone: "(11) 3456-7890".into(),
            address: address(),
            account: Account {
                email_confirmation: "Ana@example.com".into(),
                password_confirmation: String::new(),
                accept_terms: false,
                ..account()
            },
        };

        let errors = form.validate_step(3, policy()).unwrap_err();
        assert_eq!(errors.reason_for(FieldId::EmailConfirmation), Some(ErrorReason::EmailMismatch));
        assert_eq!(errors.reason_for(FieldId::PasswordConfirmation), Some(ErrorReason::Required));
        assert_eq!(errors.reason_for(FieldId::AcceptTerms), Some(ErrorReason::TermsRequired));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_institution_steps() {
        let form = DonorInstitutionForm {
            institution_name: "Abrigo Patas".into(),
            cnpj: "11.222.333/0001-81".into(),
            activity_area: "abrigo".into(),
            institution_phone: "(21) 2345-6789".into(),
            website: None,
            responsible_name: "Carlos".into(),
            responsible_cpf: "111.444.777-35".into(),
            responsible_role: "Diretor".into(),
            responsible_phone: "(21) 98765-4321".into(),
            address: address(),
            account: account(),
        };
        assert!(form.validate(policy()).is_ok());

        let broken = DonorInstitutionForm {
            cnpj: "11.222.333/0001-82".into(),
            responsible_cpf: String::new(),
            ..form
        };
        let errors = broken.validate(policy()).unwrap_err();
        assert_eq!(errors.reason_for(FieldId::Cnpj), Some(ErrorReason::CnpjInvalid));
        assert_eq!(errors.reason_for(FieldId::ResponsibleCpf), Some(ErrorReason::Required));
    }

    #[test]
    fn test_login_only_requires_password() {
        let form = LoginForm {
            email: "ana@example.com".into(),
            password: "123".into(),
        };
        assert!(form.validate(policy()).is_ok());

        let errors = LoginForm::default().validate(policy()).unwrap_err();
        assert_eq!(errors.reason_for(FieldId::Email), Some(ErrorReason::Required));
        assert_eq!(errors.reason_for(FieldId::Password), Some(ErrorReason::Required));
    }

    #[test]
    fn test_deserializes_camel_case_payload() {
        let json = r#"{
            "name": "Ana Souza",
            "cpf": "529.982.247-25",
            "birthDate": "1990-04-12",
            "phone": "(11) 91234-5678",
            "maritalStatus": "casado",
            "occupation": "Professora",
            "cep": "01310-100",
            "street": "Avenida Paulista",
            "number": "1578",
            "neighborhood": "Bela Vista",
            "city": "São Paulo",
            "state": "SP",
            "residenceType": "apartment",
            "ownership": "rented",
            "isScreened": true,
            "email": "ana@example.com",
            "emailConfirmation": "ana@example.com",
            "password": "Senha123!",
            "passwordConfirmation": "Senha123!",
            "acceptTerms": true
        }"#;

        let form: AdopterForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.housing.residence_type, ResidenceType::Apartment);
        assert_eq!(form.housing.ownership, Ownership::Rented);
        assert!(form.housing.is_screened);
        assert!(!form.housing.has_yard);
        assert_eq!(form.address.state, "SP");
        assert!(form.validate(policy()).is_ok());
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in FormKind::ALL {
            assert_eq!(kind.as_str().parse::<FormKind>(), Ok(kind));
        }
        assert_eq!(FormKind::Adopter.steps().len(), 4);
        assert_eq!(FormKind::DonorPerson.steps().len(), 3);
        assert_eq!(FormKind::DonorInstitution.steps().len(), 4);
        assert_eq!(FormKind::Login.steps().len(), 1);
    }
}
