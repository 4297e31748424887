//! Top-level command routing.
//!
//! `clipfs <command> [args...]` runs the sibling executable
//! `clipfs-<command>` with the remaining arguments untouched, inherits the
//! standard streams and exits with the child's status.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::constants;
use crate::error::{Error, Result};

/// A subcommand the dispatcher knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    PinTable,
    PeerTable,
    Pin,
}

impl Subcommand {
    /// Looks up a subcommand by its command-line name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pintable" => Some(Self::PinTable),
            "peertable" => Some(Self::PeerTable),
            "pin" => Some(Self::Pin),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PinTable => "pintable",
            Self::PeerTable => "peertable",
            Self::Pin => "pin",
        }
    }

    /// File name of the executable implementing this subcommand.
    #[must_use]
    pub fn binary_name(self) -> String {
        format!(
            "{}{}{}",
            constants::SUBCOMMAND_BIN_PREFIX,
            self.name(),
            std::env::consts::EXE_SUFFIX
        )
    }
}

/// A validated subcommand plus the arguments to forward to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: Subcommand,
    pub args: Vec<OsString>,
}

/// What the dispatcher should do with an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// No command given, or an explicit help request.
    Usage,
    Version,
    /// Unrecognized command name.
    Unknown(String),
    Run(CommandInvocation),
}

/// Decides what to do with a full argument vector (including `argv[0]`).
pub fn route<I>(argv: I) -> Route
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter().skip(1);
    let Some(first) = argv.next() else {
        return Route::Usage;
    };

    let name = first.to_string_lossy();
    match name.as_ref() {
        "-h" | "--help" | "help" => return Route::Usage,
        "-V" | "--version" => return Route::Version,
        _ => {}
    }

    match Subcommand::from_name(&name) {
        Some(command) => Route::Run(CommandInvocation {
            command,
            args: argv.collect(),
        }),
        None => Route::Unknown(name.into_owned()),
    }
}

/// Locates the subcommand executable: next to the running binary if present,
/// otherwise by name on `PATH`.
#[must_use]
pub fn resolve_binary(command: Subcommand) -> PathBuf {
    let name = command.binary_name();
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&name)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(name))
}

/// Runs the invocation to completion and returns the exit code to use.
///
/// A child that reports no code (e.g. killed by a signal) maps to 0.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the child cannot be started or waited on.
pub fn run(invocation: &CommandInvocation) -> Result<i32> {
    let program = resolve_binary(invocation.command);
    tracing::debug!(program = %program.display(), args = ?invocation.args, "dispatching");

    let status = Command::new(&program)
        .args(&invocation.args)
        .status()
        .map_err(|source| Error::Spawn {
            program: program.display().to_string(),
            source,
        })?;

    Ok(status.code().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<OsString> {
        std::iter::once("clipfs")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_no_command_is_usage() {
        assert_eq!(route(argv(&[])), Route::Usage);
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(route(argv(&["--help"])), Route::Usage);
        assert_eq!(route(argv(&["-V"])), Route::Version);
    }

    #[test]
    fn test_unknown_commands() {
        for name in ["pins", "PIN", "", "peer-table", "ls", "--cid=bafy"] {
            assert_eq!(
                route(argv(&[name, "--limit=3"])),
                Route::Unknown(name.to_string()),
                "{name}"
            );
        }
    }

    #[test]
    fn test_args_forwarded_in_order() {
        let route = route(argv(&["pin", "--cid=bafy", "--label=a b", "--progress=false"]));
        assert_eq!(
            route,
            Route::Run(CommandInvocation {
                command: Subcommand::Pin,
                args: vec![
                    OsString::from("--cid=bafy"),
                    OsString::from("--label=a b"),
                    OsString::from("--progress=false"),
                ],
            })
        );
    }

    #[test]
    fn test_help_after_command_is_forwarded() {
        let Route::Run(invocation) = route(argv(&["peertable", "--help"])) else {
            panic!("expected run");
        };
        assert_eq!(invocation.command, Subcommand::PeerTable);
        assert_eq!(invocation.args, vec![OsString::from("--help")]);
    }

    #[test]
    fn test_every_known_name_round_trips() {
        for name in constants::SUBCOMMANDS {
            let command = Subcommand::from_name(name).unwrap();
            assert_eq!(command.name(), name);
            assert!(command.binary_name().starts_with("clipfs-"));
        }
    }

    #[test]
    fn test_missing_binary_falls_back_to_path_name() {
        // Test binaries live in target/*/deps, not next to clipfs-pin.
        let path = resolve_binary(Subcommand::Pin);
        assert!(path.ends_with(Subcommand::Pin.binary_name()));
    }
}
