//! clipfs: tables and pin helpers for a local IPFS (Kubo) daemon.
//!
//! The `clipfs` binary dispatches to `clipfs-pin`, `clipfs-peertable` and
//! `clipfs-pintable`, each a thin wrapper over [`commands`]. All durable
//! state lives in the daemon; this crate only runs its CLI, scrapes the
//! output and renders it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod event;
pub mod ipfs;
pub mod logging;
pub mod state;
pub mod theme;
pub mod ui;

pub use error::{Error, Result};
