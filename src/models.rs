//! Data model shared by the validators and the dispatcher

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as KindDisplay, EnumIter, EnumString};
use thiserror::Error;

/// The declared type of an input value. Decides which validator runs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    KindDisplay,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Kind {
    Cpf,
    Email,
}

/// Returned when a value cannot be turned into a validated wrapper type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid {_0}")]
pub struct InvalidInput(pub Kind);

/// How a raw CPF is cleaned up before the digit checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpfNormalization {
    /// Only whitespace is removed. Formatted numbers such as
    /// `123.456.789-09` keep their punctuation and are rejected.
    #[default]
    WhitespaceOnly,
    /// Every character that is not an ASCII digit is removed.
    DigitsOnly,
}

/// Which grammar e-mail addresses are matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailGrammar {
    /// `local@label.rest`, where `rest` may hold consecutive or trailing dots.
    #[default]
    Permissive,
    /// Dot-separated, non-empty labels on both sides of the `@`.
    Strict,
}

/// The rules a [`crate::Validator`] applies. The default reproduces the
/// historical behavior, quirks included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub cpf: CpfNormalization,
    pub email: EmailGrammar,
}

impl Policy {
    /// Punctuation-tolerant CPF parsing and the strict e-mail grammar.
    pub fn strict() -> Self {
        Self {
            cpf: CpfNormalization::DigitsOnly,
            email: EmailGrammar::Strict,
        }
    }
}

/// Outcome of validating one value, as printed by the demo in JSON mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub value: String,
    pub kind: Kind,
    pub valid: bool,
}
