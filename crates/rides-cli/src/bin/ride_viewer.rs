//! Ride Viewer: show every ride recorded in the shared ride file.

use clap::Parser;

use rides_cli::app::AppContext;
use rides_cli::cli::ViewerCli;
use rides_cli::commands::handle_view;
use rides_cli::errors::exit_with;
use rides_cli::logging::{init_logging, Verbosity};

fn main() {
    let cli = ViewerCli::parse();
    init_logging(
        Verbosity::from_flags(cli.global.quiet, cli.global.verbose),
        !cli.global.no_color,
    );

    let ctx = AppContext::new(&cli.global);
    if let Err(err) = handle_view(&ctx, &cli) {
        exit_with(err);
    }
}
