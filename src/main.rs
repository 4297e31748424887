//! `clipfs` dispatcher.

use clipfs::cli::dispatch::{self, Route};
use clipfs::{constants, logging};
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let code = match dispatch::route(std::env::args_os()) {
        Route::Usage => {
            println!("{}", constants::USAGE);
            0
        }
        Route::Version => {
            println!("{} {}", constants::APP_NAME, constants::APP_VERSION);
            0
        }
        Route::Unknown(name) => {
            eprintln!("Unknown command: {name}");
            eprintln!("Available commands: {}", constants::SUBCOMMANDS.join(", "));
            1
        }
        Route::Run(invocation) => dispatch::run(&invocation)?,
    };

    std::process::exit(code);
}
