//! Domain layer for weathercast
//!
//! Contains the forecast model, the summarizer, and the validation rules
//! for location names. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
