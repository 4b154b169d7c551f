//! Syntactic e-mail address validation. No DNS or mailbox lookups.

use derive_more::derive::Display;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{EmailGrammar, InvalidInput, Kind};

/// Longest address accepted by the strict grammar
pub const MAX_EMAIL_LENGTH: usize = 254;

// The last class admits dots anywhere, so `a@b..c` and `a@b.c.` match
static PERMISSIVE_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
        .expect("Failed to compile permissive email regex")
});

static STRICT_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_+-]+(?:\.[a-zA-Z0-9_+-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)+$",
    )
    .expect("Failed to compile strict email regex")
});

/// Wrapper type for an e-mail address that has been validated
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_email(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInput(Kind::Email))
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        check_email(value, EmailGrammar::default())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if the whole of `raw` matches the permissive grammar
pub fn is_valid_email(raw: &str) -> bool {
    matches(raw, EmailGrammar::default())
}

/// Validates an e-mail address against the given grammar
pub fn check_email(raw: &str, grammar: EmailGrammar) -> Result<Email, InvalidInput> {
    if matches(raw, grammar) {
        Ok(Email(raw.to_owned()))
    } else {
        Err(InvalidInput(Kind::Email))
    }
}

fn matches(raw: &str, grammar: EmailGrammar) -> bool {
    let valid = match grammar {
        EmailGrammar::Permissive => PERMISSIVE_EMAIL_REGEX.is_match(raw),
        EmailGrammar::Strict => raw.len() <= MAX_EMAIL_LENGTH && STRICT_EMAIL_REGEX.is_match(raw),
    };

    if !valid {
        debug!("Rejected e-mail address {:?} ({:?} grammar)", raw, grammar);
    }
    valid
}
