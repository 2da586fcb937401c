//! Subcommand handlers. Each returns the process exit code: `0` when the
//! input is valid, `1` when it is not. Operational failures are errors.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use cadastro_validator::catalog::{self, Choice};
use cadastro_validator::field::{FieldContext, FieldValue, Policy, Rule};
use cadastro_validator::foundation::FieldErrors;
use cadastro_validator::form::{
    AdopterForm, DonorInstitutionForm, DonorPersonForm, Form, FormKind, LoginForm,
};
use cadastro_validator::messages;
use clap::ValueEnum;
use serde::de::DeserializeOwned;

// ============================================================================
// ARGUMENT ENUMS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
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

impl From<RuleArg> for Rule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Required => Self::Required,
            RuleArg::Email => Self::Email,
            RuleArg::EmailConfirmation => Self::EmailConfirmation,
            RuleArg::Password => Self::Password,
            RuleArg::PasswordConfirmation => Self::PasswordConfirmation,
            RuleArg::Phone => Self::Phone,
            RuleArg::Cep => Self::Cep,
            RuleArg::Cpf => Self::Cpf,
            RuleArg::Cnpj => Self::Cnpj,
            RuleArg::Age => Self::Age,
            RuleArg::Terms => Self::Terms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskArg {
    Cpf,
    Cnpj,
    Phone,
    Cep,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    Adopter,
    DonorPerson,
    DonorInstitution,
    Login,
}

impl From<FormArg> for FormKind {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Adopter => Self::Adopter,
            FormArg::DonorPerson => Self::DonorPerson,
            FormArg::DonorInstitution => Self::DonorInstitution,
            FormArg::Login => Self::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogArg {
    States,
    MaritalStatus,
    ActivityAreas,
    ResidenceTypes,
    OwnershipTypes,
}

impl CatalogArg {
    const fn table(self) -> &'static [Choice] {
        match self {
            Self::States => catalog::STATES,
            Self::MaritalStatus => catalog::MARITAL_STATUS,
            Self::ActivityAreas => catalog::ACTIVITY_AREAS,
            Self::ResidenceTypes => catalog::RESIDENCE_TYPES,
            Self::OwnershipTypes => catalog::OWNERSHIP_TYPES,
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Checks one value. `against` is the email or password a confirmation
/// must repeat.
pub fn run_validate(
    rule: RuleArg,
    value: &str,
    against: Option<&str>,
    policy: Policy,
) -> anyhow::Result<u8> {
    let reference = against.unwrap_or_default();
    let ctx = FieldContext::new(policy)
        .with_email(reference)
        .with_password(reference);

    let value = match rule {
        RuleArg::Terms => FieldValue::Flag(
            value
                .parse::<bool>()
                .with_context(|| format!("`{value}` is not `true` or `false`"))?,
        ),
        _ => FieldValue::Text(value),
    };

    let rule = Rule::from(rule);
    match rule.apply(value, &ctx) {
        Ok(()) => {
            println!("ok");
            Ok(0)
        }
        Err(reason) => {
            tracing::debug!(?rule, reason = %reason, "value rejected");
            println!("{reason}: {}", messages::pt_br(reason));
            Ok(1)
        }
    }
}

pub fn run_format(mask: MaskArg, value: &str) -> u8 {
    let formatted = match mask {
        MaskArg::Cpf => cadastro_mask::cpf(value),
        MaskArg::Cnpj => cadastro_mask::cnpj(value),
        MaskArg::Phone => cadastro_mask::phone(value),
        MaskArg::Cep => cadastro_mask::cep(value),
        MaskArg::Date => cadastro_mask::date(value),
    };
    println!("{formatted}");
    0
}

pub fn run_sanitize(value: &str) -> u8 {
    println!("{}", cadastro_mask::sanitize(value));
    0
}

/// Validates a JSON form payload read from `path` (`-` for stdin).
pub fn run_form(
    form: FormArg,
    path: &Path,
    step: Option<usize>,
    json: bool,
    policy: Policy,
) -> anyhow::Result<u8> {
    let payload = read_payload(path)?;
    let kind = FormKind::from(form);
    tracing::info!(form = %kind, path = %path.display(), ?step, "validating form");

    let outcome = match kind {
        FormKind::Adopter => check::<AdopterForm>(&payload, step, policy),
        FormKind::DonorPerson => check::<DonorPersonForm>(&payload, step, policy),
        FormKind::DonorInstitution => check::<DonorInstitutionForm>(&payload, step, policy),
        FormKind::Login => check::<LoginForm>(&payload, step, policy),
    }
    .with_context(|| format!("invalid {kind} payload in `{}`", path.display()))?;

    let errors = outcome.err().unwrap_or_default();
    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else if errors.is_empty() {
        println!("ok");
    } else {
        for error in &errors {
            println!("{}: {}", error.field, error.reason);
        }
    }

    Ok(u8::from(errors.has_errors()))
}

pub fn run_catalog(table: CatalogArg, json: bool) -> anyhow::Result<u8> {
    let choices = table.table();
    if json {
        println!("{}", serde_json::to_string_pretty(choices)?);
    } else {
        for choice in choices {
            println!("{}\t{}", choice.value, choice.label);
        }
    }
    Ok(0)
}

// ============================================================================
// HELPERS
// ============================================================================

fn read_payload(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read form from stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

fn check<F: Form + DeserializeOwned>(
    payload: &str,
    step: Option<usize>,
    policy: Policy,
) -> serde_json::Result<Result<(), FieldErrors>> {
    let form: F = serde_json::from_str(payload)?;
    Ok(match step {
        Some(step) => form.validate_step(step, policy),
        None => form.validate(policy),
    })
}
