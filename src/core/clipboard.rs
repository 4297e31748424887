//! Clipboard access through external utilities.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Copies `text` to the system clipboard.
///
/// With `custom` set, only that command is tried. Otherwise the platform
/// defaults are tried in order until one succeeds.
///
/// # Errors
///
/// Returns [`Error::ClipboardUnavailable`] if no command accepted the text.
pub fn copy_to_clipboard(text: &str, custom: Option<&[String]>) -> Result<()> {
    let copied = match custom {
        Some([program, args @ ..]) => pipe_to_command(program, args, text).is_some(),
        Some([]) => false,
        None => DEFAULT_COMMANDS
            .iter()
            .any(|&(program, args)| pipe_to_command(program, args, text).is_some()),
    };

    if copied {
        Ok(())
    } else {
        Err(Error::ClipboardUnavailable)
    }
}

/// Clipboard utilities tried in order when none is configured.
#[cfg(target_os = "macos")]
const DEFAULT_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const DEFAULT_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
const DEFAULT_COMMANDS: &[(&str, &[&str])] = &[];

/// Pipe `text` to a command's stdin.
fn pipe_to_command<S: AsRef<std::ffi::OsStr>>(cmd: &str, args: &[S], text: &str) -> Option<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let written = child
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));

    // Reap the child even when the write failed.
    let status = child.wait().ok()?;
    if let Err(e) = written {
        tracing::debug!(cmd, "writing to clipboard command failed: {e}");
        return None;
    }
    if !status.success() {
        tracing::debug!(cmd, %status, "clipboard command failed");
    }
    status.success().then_some(())
}
