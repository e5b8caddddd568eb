//! Ride Tracker: record ride-sharing trips into the shared ride file.

use clap::Parser;

use rides_cli::app::AppContext;
use rides_cli::cli::TrackerCli;
use rides_cli::commands::handle_track;
use rides_cli::errors::exit_with;
use rides_cli::logging::{init_logging, Verbosity};

fn main() {
    let cli = TrackerCli::parse();
    init_logging(
        Verbosity::from_flags(cli.global.quiet, cli.global.verbose),
        !cli.global.no_color,
    );

    let ctx = AppContext::new(&cli.global);
    if let Err(err) = handle_track(&ctx, &cli) {
        exit_with(err);
    }
}
