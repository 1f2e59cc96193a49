//! The composition rules and the character classes they are built from.

/// Passwords shorter than this (in characters, not bytes) fail the length rule.
pub const MIN_LENGTH: usize = 8;

pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static DIGITS: &str = "0123456789";
/// The special characters accepted by the validator, and the ones the generator draws from.
pub static SPECIAL: &str = "!@#$%^&*()_+-={}|[]:;\"'<>,.?/`~";

pub fn is_uppercase(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

pub fn is_lowercase(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_special(ch: char) -> bool {
    SPECIAL.contains(ch)
}

/// A human-readable description of one rule, for listing the rules to the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuleDescription {
    pub name: &'static str,
    pub requirement: &'static str,
}

/// Every rule a password is checked against, in the order they are evaluated.
pub static RULES: &[RuleDescription] = &[
    RuleDescription {
        name: "length",
        requirement: "Minimum 8 characters",
    },
    RuleDescription {
        name: "uppercase",
        requirement: "At least 1 uppercase letter",
    },
    RuleDescription {
        name: "lowercase",
        requirement: "At least 1 lowercase letter",
    },
    RuleDescription {
        name: "digit",
        requirement: "At least 1 digit",
    },
    RuleDescription {
        name: "special",
        requirement: "At least 1 special character",
    },
    RuleDescription {
        name: "personal data",
        requirement: "Should NOT contain personal details",
    },
];
