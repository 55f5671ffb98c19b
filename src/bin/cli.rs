// src/bin/cli.rs
use bulletin_scrape::{cli, log};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    let _log = log::init(&args.log_file, &args.log_level)?;
    cli::run(args)?;
    Ok(())
}
