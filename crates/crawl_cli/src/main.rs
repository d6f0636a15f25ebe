mod cli;
mod commands;

use std::io;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    crawl_logging::initialize(cli.log_destination(), cli.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Normalize(args) => commands::run_normalize(args, &mut out),
        Command::Extract(args) => commands::run_extract(args, &mut out),
    }
}
