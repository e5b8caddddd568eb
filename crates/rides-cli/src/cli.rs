use clap::{Args, Parser};

use rides_core::VERSION;

/// Options shared by both ride applications
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to the ride file (default: rides.csv in the working directory)
    #[arg(short, long, env = "RIDES_FILE", value_name = "PATH")]
    pub file: Option<String>,

    /// Path to the config file
    #[arg(short, long, env = "RIDES_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// More log output on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII symbols and table borders
    #[arg(long)]
    pub ascii: bool,
}

/// Ride Tracker - record a ride-sharing trip
#[derive(Parser, Debug)]
#[command(name = "ride-tracker")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct TrackerCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Set a field value (e.g. --field "Pickup Location=A St")
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// Disable interactive prompts and save once from --field values
    #[arg(long)]
    pub no_input: bool,
}

/// Ride Viewer - browse recorded rides
#[derive(Parser, Debug)]
#[command(name = "ride-viewer")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct ViewerCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Show the table once and exit instead of offering refresh
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_tracker_cli_is_valid() {
        TrackerCli::command().debug_assert();
    }

    #[test]
    fn test_viewer_cli_is_valid() {
        ViewerCli::command().debug_assert();
    }

    #[test]
    fn test_tracker_collects_fields() {
        let cli = TrackerCli::parse_from([
            "ride-tracker",
            "--no-input",
            "--field",
            "Date=2024-01-01",
            "--field",
            "Pickup Location=A St",
            "-vv",
        ]);
        assert!(cli.no_input);
        assert_eq!(cli.fields.len(), 2);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_viewer_flags() {
        let cli = ViewerCli::parse_from([
            "ride-viewer",
            "--json",
            "--once",
            "--file",
            "/tmp/r.csv",
        ]);
        assert!(cli.json && cli.once);
        assert_eq!(cli.global.file.as_deref(), Some("/tmp/r.csv"));
    }
}
