//! Root module for the validators.
//! Re-exports the predicates and the validated wrapper types.

mod cpf;
mod email;

pub use cpf::{check_cpf, check_digits, is_valid_cpf, Cpf, CpfError, CPF_LENGTH};
pub use email::{check_email, is_valid_email, Email, MAX_EMAIL_LENGTH};
