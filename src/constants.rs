//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout clipfs, including
//! subcommand names, daemon defaults, API endpoints, and user-facing messages.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Subcommands ===

/// Every subcommand the dispatcher knows about, in help order.
pub const SUBCOMMANDS: [&str; 3] = ["pintable", "peertable", "pin"];
/// Prefix of the per-subcommand executables (`clipfs-pin`, ...).
pub const SUBCOMMAND_BIN_PREFIX: &str = "clipfs-";

/// Dispatcher usage text.
pub const USAGE: &str = "
Usage: clipfs <command>

Available commands:
  pintable   - Interactive table for IPFS MFS files
  peertable  - Display IPFS peers in a table
  pin        - Pin management utilities
";

// === Daemon Defaults ===

/// Executable used to talk to the daemon when nothing else is configured.
pub const DEFAULT_IPFS_BIN: &str = "ipfs";
/// Root of the mutable file system.
pub const MFS_ROOT: &str = "/";

// === Geolocation ===

/// Base URL of the IP geolocation service; lookups hit `<base>/<ip>/json`.
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipinfo.io";
/// Timeout for geolocation requests.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound on simultaneous per-item lookups.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

// === Peer Table ===

/// Number of peers listed when `--limit` is absent or not a number.
pub const DEFAULT_PEER_LIMIT: usize = 20;
/// Location shown when a peer address carries no IP.
pub const UNKNOWN_LOCATION: &str = "Unknown";

// === Pin Table ===

/// Display name for MFS entries with a blank name.
pub const NO_NAME: &str = "(no name)";
/// Above this many choices the picker repeats "Exit" at the top.
pub const PICKER_EXIT_ON_TOP_THRESHOLD: usize = 10;

// === Configuration ===

/// Name of the config subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "clipfs";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CLIPFS_LOG";
/// Log filter used when `CLIPFS_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// === Messages ===

pub const MSG_CID_REQUIRED: &str = "Error: --cid is required.";
pub const MSG_PEER_LIMIT_HINT: &str =
    "The list of peers is limited to 20 items. To change the limit, use the `--limit` flag";
pub const MSG_EXITING: &str = "Exiting...";
pub const MSG_COPIED: &str = "CID copied to clipboard!";
pub const MSG_CLIPBOARD_UNAVAILABLE: &str = "Could not copy to clipboard. CID:";

// === Picker Labels ===

pub const TITLE_SELECT_FILE: &str = "Select a file (use arrow keys)";
pub const TITLE_CHOOSE_ACTION: &str = "Choose an action";
pub const PICKER_FOOTER: &str = " [↑/↓] Move  [Enter] Select  [Esc] Back/Exit ";
pub const LABEL_EXIT: &str = "Exit";
