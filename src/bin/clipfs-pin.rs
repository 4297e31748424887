//! `clipfs pin` implementation binary.

use clipfs::cli::args::{parse_or_exit, PinArgs};
use clipfs::{commands, logging};
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let args: PinArgs = parse_or_exit();
    let code = commands::pin::run(&args)?;
    std::process::exit(code);
}
