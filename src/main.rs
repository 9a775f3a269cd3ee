use clap::Parser;
use std::process;

use gitversion::cli::{self, Cli};
use gitversion::logger;

fn main() {
    let cli_args = Cli::parse();
    logger::setup_log(cli_args.verbose);

    let exit_code = cli::resolve::run(&cli_args);

    process::exit(exit_code);
}
