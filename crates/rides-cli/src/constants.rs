//! Constants used throughout the CLI.

/// Exit codes for the ride applications.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure, including unreadable or unwritable ride files.
    pub const FAILURE: i32 = 1;

    /// Invalid user input (missing required fields, bad --field syntax).
    pub const INVALID_INPUT: i32 = 4;
}

/// Longest cell shown in the pretty history table before truncation.
pub const TABLE_CELL_MAX: usize = 40;
