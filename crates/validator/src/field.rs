//! Field identifiers and rule dispatch.
//!
//! Forms refer to their inputs through the closed [`FieldId`] set. Each
//! field has a default [`Rule`]; [`Rule::apply`] runs it against a
//! [`FieldValue`] with whatever cross-field data the rule needs from a
//! [`FieldContext`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationResult};
use crate::validators::{self, ADULT_AGE, Accepted, Checked, Confirms, Filled, MinimumAge};

// ============================================================================
// FIELD IDENTIFIERS
// ============================================================================

/// Every input of the registration and login forms.
///
/// The string form is the camelCase key used in form payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Cpf,
    BirthDate,
    Phone,
    MaritalStatus,
    Occupation,
    Cep,
    Street,
    Number,
    Neighborhood,
    City,
    State,
    Email,
    EmailConfirmation,
    Password,
    PasswordConfirmation,
    AcceptTerms,
    InstitutionName,
    Cnpj,
    ActivityArea,
    InstitutionPhone,
    ResponsibleName,
    ResponsibleCpf,
    ResponsibleRole,
    ResponsiblePhone,
}

impl FieldId {
    /// Every field, in declaration order.
    pub const ALL: [Self; 25] = [
        Self::Name,
        Self::Cpf,
        Self::BirthDate,
        Self::Phone,
        Self::MaritalStatus,
        Self::Occupation,
        Self::Cep,
        Self::Street,
        Self::Number,
        Self::Neighborhood,
        Self::City,
        Self::State,
        Self::Email,
        Self::EmailConfirmation,
        Self::Password,
        Self::PasswordConfirmation,
        Self::AcceptTerms,
        Self::InstitutionName,
        Self::Cnpj,
        Self::ActivityArea,
        Self::InstitutionPhone,
        Self::ResponsibleName,
        Self::ResponsibleCpf,
        Self::ResponsibleRole,
        Self::ResponsiblePhone,
    ];

    /// Returns the camelCase payload key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cpf => "cpf",
            Self::BirthDate => "birthDate",
            Self::Phone => "phone",
            Self::MaritalStatus => "maritalStatus",
            Self::Occupation => "occupation",
            Self::Cep => "cep",
            Self::Street => "street",
            Self::Number => "number",
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::State => "state",
            Self::Email => "email",
            Self::EmailConfirmation => "emailConfirmation",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
            Self::AcceptTerms => "acceptTerms",
            Self::InstitutionName => "institutionName",
            Self::Cnpj => "cnpj",
            Self::ActivityArea => "activityArea",
            Self::InstitutionPhone => "institutionPhone",
            Self::ResponsibleName => "responsibleName",
            Self::ResponsibleCpf => "responsibleCpf",
            Self::ResponsibleRole => "responsibleRole",
            Self::ResponsiblePhone => "responsiblePhone",
        }
    }

    /// The rule registration forms apply to this field.
    #[must_use]
    pub const fn rule(self) -> Rule {
        match self {
            Self::Cpf | Self::ResponsibleCpf => Rule::Cpf,
            Self::Cnpj => Rule::Cnpj,
            Self::BirthDate => Rule::Age,
            Self::Phone | Self::InstitutionPhone | Self::ResponsiblePhone => Rule::Phone,
            Self::Cep => Rule::Cep,
            Self::Email => Rule::Email,
            Self::EmailConfirmation => Rule::EmailConfirmation,
            Self::Password => Rule::Password,
            Self::PasswordConfirmation => Rule::PasswordConfirmation,
            Self::AcceptTerms => Rule::Terms,
            Self::Name
            | Self::MaritalStatus
            | Self::Occupation
            | Self::Street
            | Self::Number
            | Self::Neighborhood
            | Self::City
            | Self::State
            | Self::InstitutionName
            | Self::ActivityArea
            | Self::ResponsibleName
            | Self::ResponsibleRole => Rule::Required,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a key that names no known field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

// ============================================================================
// FIELD VALUES
// ============================================================================

/// A raw value as typed by the user: text or a check box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl<'a> FieldValue<'a> {
    /// Whether the value counts as filled in: non-empty text or `true`.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Flag(flag) => *flag,
        }
    }

    /// Reads the value as text. A set flag reads as `"true"`, a cleared one
    /// as empty.
    #[must_use]
    pub fn as_text(&self) -> &'a str {
        match self {
            Self::Text(text) => *text,
            Self::Flag(true) => "true",
            Self::Flag(false) => "",
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

// ============================================================================
// POLICY AND CONTEXT
// ============================================================================

/// Tunables shared by every field of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Policy {
    /// Reference date for age checks.
    pub today: NaiveDate,
    /// Required full years for the birth date rule.
    pub minimum_age: u32,
}

impl Policy {
    /// Adult age threshold against an explicit date.
    #[must_use]
    pub const fn on(today: NaiveDate) -> Self {
        Self {
            today,
            minimum_age: ADULT_AGE,
        }
    }

    /// Adult age threshold against the local calendar date.
    #[must_use]
    pub fn today() -> Self {
        Self::on(chrono::Local::now().date_naive())
    }

    /// Overrides the age threshold.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_minimum_age(mut self, years: u32) -> Self {
        self.minimum_age = years;
        self
    }
}

/// Cross-field data for rules that compare against another input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldContext<'a> {
    /// Policy for the pass.
    pub policy: Policy,
    /// The email the confirmation must repeat.
    pub email: &'a str,
    /// The password the confirmation must repeat.
    pub password: &'a str,
}

impl<'a> FieldContext<'a> {
    /// Creates a context with empty references.
    #[must_use]
    pub const fn new(policy: Policy) -> Self {
        Self {
            policy,
            email: "",
            password: "",
        }
    }

    /// Sets the email reference.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_email(mut self, email: &'a str) -> Self {
        self.email = email;
        self
    }

    /// Sets the password reference.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_password(mut self, password: &'a str) -> Self {
        self.password = password;
        self
    }
}

// ============================================================================
// RULES
// ============================================================================

/// The validation rules a field can be subject to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Required,
    Email,
    EmailConfirmation,
    Password,
    PasswordConfirmation,
    Phone,
    Cep,
    Cpf,
    Cnpj,
    Age,
    Terms,
}

impl Rule {
    /// Runs the rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cadastro_validator::field::{FieldContext, FieldValue, Policy, Rule};
    /// use cadastro_validator::foundation::ErrorReason;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let ctx = FieldContext::new(Policy::on(today)).with_email("a@b.com");
    ///
    /// assert!(Rule::EmailConfirmation.apply(FieldValue::Text("a@b.com"), &ctx).is_ok());
    /// assert_eq!(Rule::Terms.apply(FieldValue::Flag(false), &ctx), Err(ErrorReason::TermsRequired));
    /// ```
    pub fn apply(self, value: FieldValue<'_>, ctx: &FieldContext<'_>) -> ValidationResult {
        match self {
            Self::Required => match value {
                FieldValue::Text(text) => Filled.validate(text),
                FieldValue::Flag(flag) => Checked.validate(&flag),
            },
            Self::Terms => Accepted.validate(&value.is_present()),
            Self::Email => validators::email().validate(value.as_text()),
            Self::EmailConfirmation => Confirms::email(ctx.email).validate(value.as_text()),
            Self::Password => validators::password().validate(value.as_text()),
            Self::PasswordConfirmation => {
                Confirms::password(ctx.password).validate(value.as_text())
            }
            Self::Phone => validators::phone().validate(value.as_text()),
            Self::Cep => validators::cep().validate(value.as_text()),
            Self::Cpf => validators::cpf().validate(value.as_text()),
            Self::Cnpj => validators::cnpj().validate(value.as_text()),
            Self::Age => MinimumAge::new(ctx.policy.minimum_age, ctx.policy.today)
                .validate(value.as_text()),
        }
    }
}

/// Validates `value` with the default rule of `field`.
pub fn validate_field(
    field: FieldId,
    value: FieldValue<'_>,
    ctx: &FieldContext<'_>,
) -> ValidationResult {
    field.rule().apply(value, ctx)
}

// ============================================================================
// TESTS
// ============================================================================
