//! Option tables offered by the registration forms.
//!
//! Each table is an immutable slice of [`Choice`]s. `value` is what a form
//! submits, `label` is the pt-BR text shown to the user.

use serde::Serialize;

/// One selectable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

/// The 27 federative units, alphabetical by name.
pub const STATES: &[Choice] = &[
    choice("AC", "Acre"),
    choice("AL", "Alagoas"),
    choice("AP", "Amapá"),
    choice("AM", "Amazonas"),
    choice("BA", "Bahia"),
    choice("CE", "Ceará"),
    choice("DF", "Distrito Federal"),
    choice("ES", "Espírito Santo"),
    choice("GO", "Goiás"),
    choice("MA", "Maranhão"),
    choice("MT", "Mato Grosso"),
    choice("MS", "Mato Grosso do Sul"),
    choice("MG", "Minas Gerais"),
    choice("PA", "Pará"),
    choice("PB", "Paraíba"),
    choice("PR", "Paraná"),
    choice("PE", "Pernambuco"),
    choice("PI", "Piauí"),
    choice("RJ", "Rio de Janeiro"),
    choice("RN", "Rio Grande do Norte"),
    choice("RS", "Rio Grande do Sul"),
    choice("RO", "Rondônia"),
    choice("RR", "Roraima"),
    choice("SC", "Santa Catarina"),
    choice("SP", "São Paulo"),
    choice("SE", "Sergipe"),
    choice("TO", "Tocantins"),
];

pub const MARITAL_STATUS: &[Choice] = &[
    choice("solteiro", "Solteiro(a)"),
    choice("casado", "Casado(a)"),
    choice("divorciado", "Divorciado(a)"),
    choice("viuvo", "Viúvo(a)"),
    choice("uniao_estavel", "União Estável"),
];

/// Kinds of institution that can register as donors.
pub const ACTIVITY_AREAS: &[Choice] = &[
    choice("ong", "ONG"),
    choice("abrigo", "Abrigo"),
    choice("veterinaria", "Clínica Veterinária"),
    choice("pet_shop", "Pet Shop"),
    choice("outros", "Outros"),
];

pub const RESIDENCE_TYPES: &[Choice] = &[choice("house", "Casa"), choice("apartment", "Apartamento")];

pub const OWNERSHIP_TYPES: &[Choice] = &[choice("owned", "Própria"), choice("rented", "Alugada")];

/// Looks up the option submitted as `value`.
///
/// # Examples
///
/// ```
/// use cadastro_validator::catalog::{self, STATES};
///
/// assert_eq!(catalog::find(STATES, "SP").map(|c| c.label), Some("São Paulo"));
/// assert_eq!(catalog::find(STATES, "sp"), None);
/// ```
#[must_use]
pub fn find(table: &'static [Choice], value: &str) -> Option<&'static Choice> {
    table.iter().find(|choice| choice.value == value)
}
