//! WMO weather interpretation codes

use serde::{Deserialize, Serialize};

/// Weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45)
    Fog,
    /// Depositing rime fog (WMO 48)
    RimeFog,
    /// Light drizzle (WMO 51)
    LightDrizzle,
    /// Moderate drizzle (WMO 53)
    ModerateDrizzle,
    /// Dense drizzle (WMO 55)
    DenseDrizzle,
    /// Slight rain (WMO 61)
    SlightRain,
    /// Moderate rain (WMO 63)
    ModerateRain,
    /// Heavy rain (WMO 65)
    HeavyRain,
    /// Slight snow (WMO 71)
    SlightSnow,
    /// Moderate snow (WMO 73)
    ModerateSnow,
    /// Heavy snow (WMO 75)
    HeavySnow,
    /// Snow grains (WMO 77)
    SnowGrains,
    /// Slight rain showers (WMO 80)
    SlightRainShowers,
    /// Moderate rain showers (WMO 81)
    ModerateRainShowers,
    /// Violent rain showers (WMO 82)
    ViolentRainShowers,
    /// Slight snow showers (WMO 85)
    SlightSnowShowers,
    /// Heavy snow showers (WMO 86)
    HeavySnowShowers,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Thunderstorm with slight hail (WMO 96)
    ThunderstormSlightHail,
    /// Thunderstorm with heavy hail (WMO 99)
    ThunderstormHeavyHail,
    /// Code not in the table
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::RimeFog,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            61 => Self::SlightRain,
            63 => Self::ModerateRain,
            65 => Self::HeavyRain,
            71 => Self::SlightSnow,
            73 => Self::ModerateSnow,
            75 => Self::HeavySnow,
            77 => Self::SnowGrains,
            80 => Self::SlightRainShowers,
            81 => Self::ModerateRainShowers,
            82 => Self::ViolentRainShowers,
            85 => Self::SlightSnowShowers,
            86 => Self::HeavySnowShowers,
            95 => Self::Thunderstorm,
            96 => Self::ThunderstormSlightHail,
            99 => Self::ThunderstormHeavyHail,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description of the weather condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Foggy",
            Self::RimeFog => "Depositing rime fog",
            Self::LightDrizzle => "Light drizzle",
            Self::ModerateDrizzle => "Moderate drizzle",
            Self::DenseDrizzle => "Dense drizzle",
            Self::SlightRain => "Slight rain",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRain => "Heavy rain",
            Self::SlightSnow => "Slight snow",
            Self::ModerateSnow => "Moderate snow",
            Self::HeavySnow => "Heavy snow",
            Self::SnowGrains => "Snow grains",
            Self::SlightRainShowers => "Slight rain showers",
            Self::ModerateRainShowers => "Moderate rain showers",
            Self::ViolentRainShowers => "Violent rain showers",
            Self::SlightSnowShowers => "Slight snow showers",
            Self::HeavySnowShowers => "Heavy snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormSlightHail => "Thunderstorm with slight hail",
            Self::ThunderstormHeavyHail => "Thunderstorm with heavy hail",
            Self::Unknown => "Unknown",
        }
    }
}

/// Describe a raw WMO code, falling back to `"Code N"` for unknown codes
#[must_use]
pub fn describe_wmo_code(code: u8) -> String {
    match WeatherCondition::from_wmo_code(code) {
        WeatherCondition::Unknown => format!("Code {code}"),
        condition => condition.description().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_conditions() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_wmo_code(3), WeatherCondition::Overcast);
        assert_eq!(WeatherCondition::from_wmo_code(63), WeatherCondition::ModerateRain);
        assert_eq!(
            WeatherCondition::from_wmo_code(99),
            WeatherCondition::ThunderstormHeavyHail
        );
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(WeatherCondition::from_wmo_code(4), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_wmo_code(255), WeatherCondition::Unknown);
    }

    #[test]
    fn describe_known_and_unknown() {
        assert_eq!(describe_wmo_code(45), "Foggy");
        assert_eq!(describe_wmo_code(96), "Thunderstorm with slight hail");
        assert_eq!(describe_wmo_code(42), "Code 42");
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&WeatherCondition::PartlyCloudy).expect("serialize");
        assert_eq!(json, r#""partly_cloudy""#);
    }
}
