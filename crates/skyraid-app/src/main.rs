use clap::Parser;
use log::error;

use skyraid_app::cli::{self, Cli};
use skyraid_app::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = cli::run(&cli) {
        error!("{err}");
        std::process::exit(1);
    }
}
