mod cli;
mod config;
mod decompose_cmd;
mod generate;
mod logging;
mod reconstruct_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Decompose(args) => decompose_cmd::run(args),
        Command::Reconstruct(args) => reconstruct_cmd::run(args),
    }
}
