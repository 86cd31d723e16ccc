use clap::Parser;
use log::debug;
use pixelveil_core::PixelVeilError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, PixelVeilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");

    match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Unveil(unveil) => unveil.run(),
        Commands::Clear(clear) => clear.run(),
        Commands::Tint(tint) => tint.run(),
        Commands::Diff(diff) => diff.run(),
    }
}
