//! `clipfs pin`: pin a CID and optionally label it in MFS.

use crate::cli::args::PinArgs;
use crate::constants;
use crate::error::Result;
use crate::ipfs::{mfs_path, Ipfs};

/// Runs the subcommand and returns the process exit code.
///
/// A missing `--cid` is a usage error (exit 1) detected before the config is
/// loaded or the daemon is contacted. Daemon failures are logged and do not
/// change the exit code: pinning is best effort and a labeled pin whose copy
/// step fails stays pinned without a label.
///
/// # Errors
///
/// Returns an error only if the configuration cannot be loaded.
pub fn run(args: &PinArgs) -> Result<i32> {
    let Some(cid) = args.cid() else {
        eprintln!("{}", constants::MSG_CID_REQUIRED);
        return Ok(1);
    };

    let config = args.global.load_config()?;
    let ipfs = Ipfs::from_config(&config);

    if let Err(e) = pin(&ipfs, cid, args.label(), args.progress) {
        tracing::error!(cid, label = args.label(), "pin failed: {e}");
    }
    Ok(0)
}

/// Pins `cid`, then copies it to `/<label>` when a label is given.
///
/// The daemon's pin output is printed as soon as the pin succeeds.
///
/// # Errors
///
/// Returns the first daemon failure. Nothing is rolled back.
pub fn pin(ipfs: &Ipfs, cid: &str, label: Option<&str>, progress: bool) -> Result<()> {
    let output = ipfs.pin_add(cid, progress)?;
    println!("{output}");

    let Some(label) = label else {
        return Ok(());
    };

    let pinned = pinned_cid(&output).unwrap_or(cid);
    ipfs.files_cp(&format!("/ipfs/{pinned}"), &mfs_path(label))?;
    println!("Pinned [{cid}] with label: [{label}]");
    Ok(())
}

/// Extracts the CID from `pinned <cid> recursively|directly`.
fn pinned_cid(output: &str) -> Option<&str> {
    output.lines().rev().find_map(|line| {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some("pinned"), Some(cid)) => Some(cid),
            _ => None,
        }
    })
}
