//! Checking a password against the composition rules and the user's personal details.

use std::fmt;

use serde::Serialize;

use crate::rules;

/// One rule that a password broke.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "rule", content = "detail", rename_all = "snake_case")]
pub enum ValidationFailure {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    /// The password contains this personal detail, ignoring case.
    ContainsPersonalDetail(String),
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::TooShort => {
                write!(f, "Minimum {} characters required", rules::MIN_LENGTH)
            }
            ValidationFailure::MissingUppercase => {
                f.write_str("At least one uppercase letter required")
            }
            ValidationFailure::MissingLowercase => {
                f.write_str("At least one lowercase letter required")
            }
            ValidationFailure::MissingDigit => f.write_str("At least one digit required"),
            ValidationFailure::MissingSpecial => {
                f.write_str("At least one special character required")
            }
            ValidationFailure::ContainsPersonalDetail(detail) => {
                write!(f, "Password must NOT contain personal details ({})", detail)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strength {
    Strong,
    Medium,
    Weak,
}

impl Strength {
    /// Classify a password by how many rules it failed.
    pub fn from_failure_count(count: usize) -> Strength {
        match count {
            0 => Strength::Strong,
            1..=2 => Strength::Medium,
            _ => Strength::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "STRONG",
            Strength::Medium => "MEDIUM",
            Strength::Weak => "WEAK",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of checking one password.
///
/// Failures are ordered: the composition rules first (length, uppercase, lowercase, digit,
/// special), then one entry per leaked personal detail, in the order the details were given.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
    strength: Strength,
}

impl ValidationResult {
    fn new(failures: Vec<ValidationFailure>) -> ValidationResult {
        let strength = Strength::from_failure_count(failures.len());
        ValidationResult { failures, strength }
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn is_strong(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check `password` against every rule. All rules are applied; none stops the others.
///
/// Blank (empty or whitespace-only) entries of `personal_details` are skipped.
pub fn evaluate<D: AsRef<str>>(password: &str, personal_details: &[D]) -> ValidationResult {
    let mut failures = composition_failures(password);

    let lowered = password.to_lowercase();
    for detail in personal_details {
        let detail = detail.as_ref();
        if detail.trim().is_empty() {
            continue;
        }
        if lowered.contains(&detail.to_lowercase()) {
            failures.push(ValidationFailure::ContainsPersonalDetail(detail.to_owned()));
        }
    }

    let result = ValidationResult::new(failures);
    tracing::debug!(
        failures = result.failures.len(),
        strength = %result.strength,
        "evaluated password"
    );
    result
}

fn composition_failures(password: &str) -> Vec<ValidationFailure> {
    let checks: [(bool, ValidationFailure); 5] = [
        (
            password.chars().count() >= rules::MIN_LENGTH,
            ValidationFailure::TooShort,
        ),
        (
            password.chars().any(rules::is_uppercase),
            ValidationFailure::MissingUppercase,
        ),
        (
            password.chars().any(rules::is_lowercase),
            ValidationFailure::MissingLowercase,
        ),
        (
            password.chars().any(rules::is_digit),
            ValidationFailure::MissingDigit,
        ),
        (
            password.chars().any(rules::is_special),
            ValidationFailure::MissingSpecial,
        ),
    ];
    checks
        .into_iter()
        .filter(|(passed, _)| !passed)
        .map(|(_, failure)| failure)
        .collect()
}
