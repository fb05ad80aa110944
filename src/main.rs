mod cli;
mod config;
mod ops;
mod paths;
mod platform;
mod resolve;
mod secrets;

#[cfg(test)]
mod test_helpers;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use platform::{KeyringStore, RealFs, RealPrompter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "hypy=info",
        1 => "hypy=debug",
        _ => "hypy=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .without_time()
        .init();

    let fs = RealFs;
    let overrides = cli.overrides();
    match cli.command {
        Command::Init { force } => {
            ops::init::run(force, &fs)?;
        }
        Command::Show => {
            ops::show::run(&overrides, &fs, &KeyringStore, &RealPrompter)?;
        }
    }

    Ok(())
}
