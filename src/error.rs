//! Error type shared by the library modules.

use std::path::PathBuf;

/// Result alias for library operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced by the daemon client, lookups, config and terminal code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The daemon CLI (or another helper) could not be started at all.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The daemon CLI ran but exited unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    Daemon {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// Geolocation request failed or returned an unreadable body.
    #[error("geolocation lookup for {ip} failed: {source}")]
    Http {
        ip: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("invalid geolocation endpoint: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no clipboard utility available")]
    ClipboardUnavailable,

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
