//! Command-line interface module.
//!
//! Provides argument parsing for the subcommand binaries and the
//! dispatcher's routing.

pub mod args;
pub mod dispatch;
