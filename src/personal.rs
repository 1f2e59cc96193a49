use std::io::{self, Read};

use serde::Deserialize;

/// Personal details a password must not contain.
///
/// Every field is optional; absent fields are simply not checked.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PersonalDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub spouse: Option<String>,
    pub child: Option<String>,
}

impl PersonalDetails {
    /// Read personal details from a YAML document.
    ///
    /// An empty document is treated as having no details at all.
    pub fn from_yaml_reader(mut rdr: impl Read) -> Result<PersonalDetails, PersonalDetailsError> {
        let mut raw = String::new();
        rdr.read_to_string(&mut raw).map_err(PersonalDetailsError::Io)?;
        if raw.trim().is_empty() {
            return Ok(PersonalDetails::default());
        }
        serde_yaml::from_str(&raw).map_err(PersonalDetailsError::Yaml)
    }

    /// The details as fragments, in the order: name, email, date of birth, spouse, child.
    pub fn fragments(&self) -> Vec<&str> {
        [
            &self.name,
            &self.email,
            &self.date_of_birth,
            &self.spouse,
            &self.child,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersonalDetailsError {
    #[error("failed to read personal details: {0}")]
    Io(#[source] io::Error),
    #[error("personal details are not valid YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),
}
