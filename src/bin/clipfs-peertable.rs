//! `clipfs peertable` implementation binary.

use clipfs::cli::args::{parse_or_exit, PeerTableArgs};
use clipfs::{commands, logging};
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let args: PeerTableArgs = parse_or_exit();
    commands::peertable::run(&args)?;
    Ok(())
}
