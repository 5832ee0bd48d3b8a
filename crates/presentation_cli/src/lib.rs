//! weathercast CLI
//!
//! Argument definitions and command implementations for the `weathercast`
//! binary. Commands write their output to a caller-supplied writer.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
