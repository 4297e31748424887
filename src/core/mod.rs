//! Shared helpers used by the subcommands.

pub mod clipboard;
pub mod fanout;
pub mod format;
pub mod geo;
