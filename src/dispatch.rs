//! Routes a value to the validator matching its declared kind.
//!
//! Each call is independent: nothing is remembered between two validations.

use log::debug;

use crate::models::{Kind, Policy, Report};
use crate::validation::{check_cpf, check_email};

/// Validates `value` as the given kind, with the default policy.
pub fn validate(value: &str, kind: Kind) -> bool {
    Validator::default().validate(value, kind)
}

/// Like [`validate`], but with the kind given as text (`"cpf"`, `"email"`).
/// An unknown tag never validates.
pub fn validate_tagged(value: &str, tag: &str) -> bool {
    match tag.parse::<Kind>() {
        Ok(kind) => validate(value, kind),
        Err(_) => {
            debug!("Unknown input kind {:?}", tag);
            false
        }
    }
}

/// Applies a fixed [`Policy`] to every value it is given
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: Policy,
}

impl Validator {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn validate(&self, value: &str, kind: Kind) -> bool {
        match kind {
            Kind::Cpf => check_cpf(value, self.policy.cpf).is_ok(),
            Kind::Email => check_email(value, self.policy.email).is_ok(),
        }
    }

    /// Validates every `(value, kind)` pair, keeping the input order
    pub fn validate_all<'a, I>(&self, inputs: I) -> Vec<Report>
    where
        I: IntoIterator<Item = (&'a str, Kind)>,
    {
        inputs
            .into_iter()
            .map(|(value, kind)| Report {
                value: value.to_owned(),
                kind,
                valid: self.validate(value, kind),
            })
            .collect()
    }
}
