//! weathercast HTTP presentation layer
//!
//! Serves the summarized forecast as JSON on `/` and `/weather`, plus a
//! `/health` probe.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use routes::create_router;
pub use state::AppState;
