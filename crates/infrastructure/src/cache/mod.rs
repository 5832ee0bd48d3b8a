//! Cache implementations
//!
//! - `ResponseCache`: in-memory TTL cache with lazy expiry, shared by all
//!   request handlers

mod response_cache;

pub use response_cache::ResponseCache;
