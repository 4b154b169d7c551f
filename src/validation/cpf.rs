//! Brazilian taxpayer number (CPF) validation
//!
//! A CPF is made of nine base digits followed by two check digits, each
//! computed as a weighted sum modulo 11 of the digits before it.

use derive_more::derive::Display;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CpfNormalization;

/// Number of digits in a CPF, check digits included
pub const CPF_LENGTH: usize = 11;

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Why a CPF was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpfError {
    #[error("a CPF has 11 digits, got {0} characters")]
    WrongLength(usize),

    #[error("a CPF only contains digits, found {0:?}")]
    NonDigit(char),

    #[error("all the digits are identical")]
    RepeatedDigits,

    #[error("wrong check digits: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: String, found: String },
}

/// Wrapper type for a CPF that has been validated.
///
/// Holds the normalized digits only, never the punctuation of the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Cpf(String);

impl Cpf {
    /// The eleven digits, without separators
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The digits in the usual `XXX.XXX.XXX-XX` layout, for display
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_cpf(&value, CpfNormalization::default())
    }
}

impl TryFrom<&str> for Cpf {
    type Error = CpfError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        check_cpf(value, CpfNormalization::default())
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if `raw` is a valid CPF once whitespace is removed.
///
/// Punctuation is kept, so `"123.456.789-09"` is rejected while
/// `"123 456 789 09"` is accepted.
pub fn is_valid_cpf(raw: &str) -> bool {
    check_cpf(raw, CpfNormalization::default()).is_ok()
}

/// Validates a CPF and reports the first rule it breaks
pub fn check_cpf(raw: &str, normalization: CpfNormalization) -> Result<Cpf, CpfError> {
    let cpf = normalize(raw, normalization);

    let result = check_normalized(&cpf);
    if let Err(e) = &result {
        debug!("Rejected CPF {:?}: {}", raw, e);
    }
    result.map(|()| Cpf(cpf))
}

/// Computes the two check digits of the nine base digits of a CPF.
///
/// Every element of `base` must be in `0..=9`.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;

    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

fn normalize(raw: &str, normalization: CpfNormalization) -> String {
    match normalization {
        CpfNormalization::WhitespaceOnly => raw.chars().filter(|c| !c.is_whitespace()).collect(),
        CpfNormalization::DigitsOnly => raw.chars().filter(|c| c.is_ascii_digit()).collect(),
    }
}

fn check_normalized(cpf: &str) -> Result<(), CpfError> {
    let length = cpf.chars().count();
    if length != CPF_LENGTH {
        return Err(CpfError::WrongLength(length));
    }

    if let Some(c) = cpf.chars().find(|c| !c.is_ascii_digit()) {
        return Err(CpfError::NonDigit(c));
    }

    // Only ASCII digits from here on, one byte each
    let digits: Vec<u8> = cpf.bytes().map(|b| b - b'0').collect();

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(CpfError::RepeatedDigits);
    }

    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    let expected = check_digits(&base);

    if expected != digits[9..] {
        return Err(CpfError::CheckDigitMismatch {
            expected: format!("{}{}", expected[0], expected[1]),
            found: cpf[9..].to_string(),
        });
    }

    Ok(())
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();

    match sum % 11 {
        rest if rest < 2 => 0,
        rest => (11 - rest) as u8,
    }
}
