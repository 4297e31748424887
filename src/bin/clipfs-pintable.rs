//! `clipfs pintable` implementation binary.

use clipfs::cli::args::{parse_or_exit, PinTableArgs};
use clipfs::{commands, logging};
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let args: PinTableArgs = parse_or_exit();
    commands::pintable::run(&args)?;
    Ok(())
}
