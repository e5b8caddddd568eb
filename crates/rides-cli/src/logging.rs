//! Logging setup for the ride applications.
//!
//! Logs go to stderr so they never mix with the form prompts or the table on
//! stdout. The default level is `warn`; `-v` flags raise it and `RUST_LOG`
//! overrides everything.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Info and above.
    Verbose,
    /// Debug and above.
    Debug,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a verbosity.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Default filter directive covering both rides crates.
    fn directive(self) -> String {
        let level = self.to_level().as_str().to_lowercase();
        format!("rides_core={level},rides_cli={level}")
    }
}

/// ANSI styling on log lines only for a terminal, and never when color is
/// turned off by `--no-color` or `NO_COLOR`.
fn use_ansi(color: bool, stderr_is_tty: bool, no_color_env: bool) -> bool {
    color && stderr_is_tty && !no_color_env
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbosity: Verbosity, color: bool) {
    let ansi = use_ansi(
        color,
        std::io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
