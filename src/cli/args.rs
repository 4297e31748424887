//! Command-line argument definitions for the subcommand binaries.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser};

use crate::config::Config;
use crate::constants;
use crate::error::Result;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Daemon CLI executable
    #[arg(long, env = "CLIPFS_IPFS_BIN", value_name = "PATH")]
    pub ipfs_bin: Option<String>,

    /// Base URL of the IP geolocation service
    #[arg(long, env = "CLIPFS_GEO_ENDPOINT", value_name = "URL")]
    pub geo_endpoint: Option<String>,

    /// Config file (defaults to <config dir>/clipfs/config.toml)
    #[arg(long, env = "CLIPFS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Loads the config file and applies flag/env overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is unreadable or invalid.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(bin) = &self.ipfs_bin {
            config.ipfs_bin.clone_from(bin);
        }
        if let Some(endpoint) = &self.geo_endpoint {
            config.geo_endpoint.clone_from(endpoint);
        }
        Ok(config)
    }
}

/// Pin a CID, optionally copying it into MFS under a label
#[derive(Parser, Debug)]
#[command(name = "clipfs pin", version, about, long_about = None)]
pub struct PinArgs {
    /// Content identifier to pin
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub cid: Option<String>,

    /// MFS name to copy the pinned object to
    #[arg(long)]
    pub label: Option<String>,

    /// Show pin progress (anything but "false" enables it)
    #[arg(
        long,
        value_name = "BOOL",
        default_value = "true",
        default_missing_value = "true",
        num_args = 0..=1,
        value_parser = parse_progress,
        action = ArgAction::Set
    )]
    pub progress: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl PinArgs {
    /// The CID, treating an empty value the same as a missing one.
    #[must_use]
    pub fn cid(&self) -> Option<&str> {
        self.cid.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// The label, treating an empty value the same as a missing one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.trim().is_empty())
    }
}

/// Display connected swarm peers with their approximate location
#[derive(Parser, Debug)]
#[command(name = "clipfs peertable", version, about, long_about = None)]
pub struct PeerTableArgs {
    /// Maximum number of peers to list (non-numeric values fall back to 20)
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "20",
        value_parser = parse_limit
    )]
    pub limit: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Table of MFS root entries, interactive unless a static format is chosen
#[derive(Parser, Debug)]
#[command(name = "clipfs pintable", version, about, long_about = None)]
pub struct PinTableArgs {
    /// Print a static table and exit
    #[arg(short = 'E', long, conflicts_with_all = ["plain", "json"])]
    pub enhanced: bool,

    /// Print one line per entry and exit
    #[arg(short, long, conflicts_with = "json")]
    pub plain: bool,

    /// Print JSON and exit
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// How the pin table is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Interactive,
    Table,
    Plain,
    Json,
}

impl PinTableArgs {
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        if self.json {
            Presentation::Json
        } else if self.plain {
            Presentation::Plain
        } else if self.enhanced {
            Presentation::Table
        } else {
            Presentation::Interactive
        }
    }
}

/// Parses the process arguments into `P`.
///
/// Help and version requests print and exit 0. Any other parse failure is a
/// usage error: clap's message goes to stderr and the process exits 1.
#[must_use]
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    }
}

/// Exit code for a clap parse result that did not produce arguments.
#[must_use]
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

#[allow(clippy::unnecessary_wraps)]
fn parse_progress(value: &str) -> Result<bool, Infallible> {
    Ok(value != "false")
}

#[allow(clippy::unnecessary_wraps)]
fn parse_limit(value: &str) -> Result<usize, Infallible> {
    Ok(value
        .trim()
        .parse()
        .unwrap_or(constants::DEFAULT_PEER_LIMIT))
}
