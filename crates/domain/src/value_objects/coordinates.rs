//! Resolved coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geocoded place: position plus the locality metadata the geocoder returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
    /// Resolved city name
    city: String,
    /// State or region, empty when unknown
    #[serde(default)]
    state: String,
    /// Country name
    #[serde(default = "unknown")]
    country: String,
}

fn unknown() -> String {
    Coordinates::UNKNOWN.to_string()
}

impl Coordinates {
    /// Placeholder used when the geocoder does not report a name or country
    pub const UNKNOWN: &'static str = "Unknown";

    /// Create new coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(
        latitude: f64,
        longitude: f64,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
            city: city.into(),
            state: state.into(),
            country: country.into(),
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Resolved city name (`"Unknown"` if the geocoder omitted it)
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State or region (empty if the geocoder omitted it)
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Country (`"Unknown"` if the geocoder omitted it)
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.is_empty() {
            write!(f, "{} ({:.4}, {:.4})", self.city, self.latitude, self.longitude)
        } else {
            write!(
                f,
                "{}, {} ({:.4}, {:.4})",
                self.city, self.state, self.latitude, self.longitude
            )
        }
    }
}
