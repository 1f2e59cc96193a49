//! Password rule checking and strong-password suggestion.
//!
//! [`evaluate`] checks a password against the composition rules (length, uppercase, lowercase,
//! digit, special character) and against a list of the user's personal details, returning every
//! rule that failed along with a [`Strength`] derived from how many failed. [`generate`] suggests
//! a password that passes all of the composition rules.
//!
//! ```
//! use passcheck::{evaluate, Strength};
//!
//! let result = evaluate("MyNameJohn123!", &["john"]);
//! assert_eq!(result.strength(), Strength::Medium);
//!
//! let suggestion = passcheck::generate();
//! assert!(evaluate(suggestion.as_str(), &[] as &[&str]).is_strong());
//! ```

use serde::Serialize;

pub mod password_generation;
pub mod personal;
pub mod rules;
pub mod validation;

pub use password_generation::generate;
pub use personal::{PersonalDetails, PersonalDetailsError};
pub use validation::{evaluate, Strength, ValidationFailure, ValidationResult};

/// A password, kept out of `Debug` output.
#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
