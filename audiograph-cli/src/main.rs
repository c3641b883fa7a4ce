use std::process;

use audiograph_cli::cli::types::Cli;
use audiograph_types::log::error;
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = audiograph_cli::cli::run(cli) {
        error!("{e}");
        process::exit(1);
    }
}
