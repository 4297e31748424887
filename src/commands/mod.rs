//! Entry points of the three subcommands.
//!
//! Each `run` receives its parsed arguments, resolves the [`Config`] and
//! does the work; the binaries under `src/bin/` only add error reporting
//! and the exit code.
//!
//! [`Config`]: crate::config::Config

pub mod peertable;
pub mod pin;
pub mod pintable;
