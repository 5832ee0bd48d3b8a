//! Location name value object
//!
//! A free-text place name as typed by a user, e.g. `"Houston, Texas"`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A validated, trimmed place name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationName(String);

impl LocationName {
    /// Maximum accepted length in characters, measured before trimming
    pub const MAX_LENGTH: usize = 100;

    /// Validate and trim a raw place name
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocation` if the input is longer than
    /// [`Self::MAX_LENGTH`] characters or empty after trimming.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidLocation(format!(
                "name exceeds {} characters",
                Self::MAX_LENGTH
            )));
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLocation(
                "name must not be empty".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first comma, for `"City, Region"` input
    ///
    /// Returns `None` when the name has no comma or nothing precedes it.
    #[must_use]
    pub fn city_only(&self) -> Option<&str> {
        let (city, _) = self.0.split_once(',')?;
        let city = city.trim();
        (!city.is_empty()).then_some(city)
    }
}

impl TryFrom<String> for LocationName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocationName> for String {
    fn from(value: LocationName) -> Self {
        value.0
    }
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
