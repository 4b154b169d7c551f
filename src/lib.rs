//! Validation of Brazilian taxpayer numbers (CPF) and e-mail addresses,
//! with a dispatcher choosing the validator from a declared input kind.

pub mod consts;
pub mod dispatch;
pub mod models;
pub mod settings;
pub mod validation;

pub use dispatch::{validate, validate_tagged, Validator};
pub use models::{CpfNormalization, EmailGrammar, InvalidInput, Kind, Policy, Report};
pub use validation::{check_cpf, check_email, is_valid_cpf, is_valid_email, Cpf, CpfError, Email};
