//! Runtime configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! the optional `config.toml`, then command-line flags and environment
//! variables (see [`crate::cli::args::GlobalArgs`]). The resulting [`Config`]
//! is built once per process and handed to each command explicitly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants;
use crate::error::{Error, Result};

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Daemon CLI executable (name on `PATH` or full path).
    pub ipfs_bin: String,
    /// Base URL of the geolocation service.
    pub geo_endpoint: String,
    /// Per-request timeout for geolocation lookups.
    pub http_timeout: Duration,
    /// Maximum number of concurrent per-item lookups. Always at least 1.
    pub max_concurrency: usize,
    /// Explicit clipboard command (program followed by its arguments).
    pub clipboard_cmd: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ipfs_bin: constants::DEFAULT_IPFS_BIN.to_string(),
            geo_endpoint: constants::DEFAULT_GEO_ENDPOINT.to_string(),
            http_timeout: constants::DEFAULT_HTTP_TIMEOUT,
            max_concurrency: constants::DEFAULT_MAX_CONCURRENCY,
            clipboard_cmd: None,
        }
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    ipfs_bin: Option<String>,
    geo_endpoint: Option<String>,
    http_timeout_secs: Option<u64>,
    max_concurrency: Option<usize>,
    clipboard_cmd: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// A missing file is not an error and yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(default_path) else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(Error::ConfigRead { path, source }),
        }
    }

    /// Parses TOML content on top of the defaults. `path` is only used in
    /// error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let file: FileConfig = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::default().merge(file))
    }

    fn merge(mut self, file: FileConfig) -> Self {
        if let Some(bin) = file.ipfs_bin {
            self.ipfs_bin = bin;
        }
        if let Some(endpoint) = file.geo_endpoint {
            self.geo_endpoint = endpoint;
        }
        if let Some(secs) = file.http_timeout_secs {
            self.http_timeout = Duration::from_secs(secs);
        }
        if let Some(n) = file.max_concurrency {
            self.max_concurrency = n.max(1);
        }
        if let Some(cmd) = file.clipboard_cmd.filter(|c| !c.is_empty()) {
            self.clipboard_cmd = Some(cmd);
        }
        self
    }
}

/// `<platform config dir>/clipfs/config.toml`, if the platform has one.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}
