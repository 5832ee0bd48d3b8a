//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod location_name;
mod weather_condition;

pub use coordinates::Coordinates;
pub use location_name::LocationName;
pub use weather_condition::{WeatherCondition, describe_wmo_code};
