//! Client for the daemon's own CLI.
//!
//! Every operation shells out to `ipfs` (or the configured binary), waits for
//! it to finish and scrapes its plaintext stdout. There is no timeout; a hung
//! daemon blocks the caller.

mod stat;

use std::process::{Command, Output, Stdio};

pub use stat::FileStat;

use crate::config::Config;
use crate::constants;
use crate::error::{Error, Result};

/// Handle on the daemon CLI executable.
#[derive(Debug, Clone)]
pub struct Ipfs {
    bin: String,
}

impl Ipfs {
    /// Uses `bin` as the daemon CLI.
    #[must_use]
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    /// Uses the binary named in the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ipfs_bin.clone())
    }

    /// `ipfs pin add [--progress] <cid>`, returning trimmed stdout.
    ///
    /// With `progress` the daemon's stderr is passed through so its progress
    /// bar reaches the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon CLI cannot be run or exits non-zero.
    pub fn pin_add(&self, cid: &str, progress: bool) -> Result<String> {
        let mut args = vec!["pin", "add"];
        if progress {
            args.push("--progress");
        }
        args.push(cid);

        let stderr = if progress {
            Stdio::inherit()
        } else {
            Stdio::piped()
        };
        self.run_with(&args, stderr)
    }

    /// `ipfs pin rm <cid>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon CLI cannot be run or exits non-zero.
    pub fn pin_rm(&self, cid: &str) -> Result<String> {
        self.run(&["pin", "rm", cid])
    }

    /// `ipfs files ls <path>`, one name per non-empty line.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon CLI cannot be run or exits non-zero.
    pub fn files_ls(&self, path: &str) -> Result<Vec<String>> {
        Ok(non_empty_lines(&self.run(&["files", "ls", path])?))
    }

    /// `ipfs files stat /<name>` for an entry at the MFS root.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon CLI cannot be run or exits non-zero.
    /// Unexpected output is not an error; see [`FileStat::parse`].
    pub fn files_stat(&self, name: &str) -> Result<FileStat> {
        let path = mfs_path(name);
        Ok(FileStat::parse(&self.run(&["files", "stat", &path])?))
    }

    /// `ipfs files cp <from> <to>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon CLI cannot be run or exits non-zero.
    pub fn files_cp(&self, from: &str, to: &str) -> Result<()> {
        self.run(&["files", "cp", from, to]).map(drop)
    }

    /// `ipfs swarm peers`, one multiaddress per non-empty line.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon CLI cannot be run or exits non-zero.
    pub fn swarm_peers(&self) -> Result<Vec<String>> {
        Ok(non_empty_lines(&self.run(&["swarm", "peers"])?))
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        self.run_with(args, Stdio::piped())
    }

    fn run_with(&self, args: &[&str], stderr: Stdio) -> Result<String> {
        let command = format!("{} {}", self.bin, args.join(" "));
        tracing::debug!(%command, "running daemon command");

        let output: Output = Command::new(&self.bin)
            .args(args)
            .stdin(Stdio::null())
            .stderr(stderr)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Daemon {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Absolute MFS path for a root-level entry name.
#[must_use]
pub fn mfs_path(name: &str) -> String {
    format!("{}{}", constants::MFS_ROOT, name.trim_start_matches('/'))
}

fn non_empty_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mfs_path() {
        assert_eq!(mfs_path("photos"), "/photos");
        assert_eq!(mfs_path("/photos"), "/photos");
        assert_eq!(mfs_path("my label"), "/my label");
    }

    #[test]
    fn test_non_empty_lines() {
        let lines = non_empty_lines("  a\n\n b \n   \nc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let ipfs = Ipfs::new("clipfs-test-no-such-ipfs");
        assert!(matches!(ipfs.swarm_peers(), Err(Error::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_daemon_error() {
        let ipfs = Ipfs::new("false");
        match ipfs.pin_rm("bafy") {
            Err(Error::Daemon { command, .. }) => assert_eq!(command, "false pin rm bafy"),
            other => panic!("expected daemon error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_is_trimmed() {
        // `echo` stands in for the daemon and prints its arguments back.
        let ipfs = Ipfs::new("echo");
        assert_eq!(ipfs.pin_rm("bafy").unwrap(), "pin rm bafy");
        assert_eq!(ipfs.swarm_peers().unwrap(), vec!["swarm peers"]);
    }
}
