#![forbid(unsafe_code)]

use clap::Parser;
use drills::cli::{Cli, run};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);

    std::process::exit(run(cli));
}
