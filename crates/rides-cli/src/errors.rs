//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so non-interactive callers can
//! tell a rejected ride from a broken file.

use std::fmt;

use rides_core::RidesError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input
    InvalidInput { message: String, hint: Option<String> },

    /// Ride file could not be read or written
    Storage(String),

    /// Already shown to the user; only the exit code remains
    Reported(i32),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::Storage(message) => write!(f, "{}", message),
            CliError::Reported(code) => write!(f, "exit status {}", code),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint line.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Storage(_) => exit_codes::FAILURE,
            CliError::Reported(code) => *code,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        if !matches!(self, CliError::Reported(_)) {
            eprintln!("Error: {}", self);
        }
        std::process::exit(self.exit_code())
    }
}

impl From<RidesError> for CliError {
    fn from(err: RidesError) -> Self {
        match err {
            RidesError::Validation { .. } => CliError::invalid_input_with_hint(
                err.to_string(),
                "Hint: pass them with --field \"NAME=VALUE\".",
            ),
            RidesError::UnknownField(_) | RidesError::InvalidInput(_) => {
                CliError::invalid_input(err.to_string())
            }
            other => CliError::Storage(other.to_string()),
        }
    }
}

/// Exit for an error bubbled up to `main`, using the typed code when there is one.
pub fn exit_with(err: anyhow::Error) -> ! {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        cli_err.exit()
    }
    if let Some(core_err) = err.downcast_ref::<RidesError>() {
        let code = match core_err {
            RidesError::Validation { .. }
            | RidesError::UnknownField(_)
            | RidesError::InvalidInput(_) => super::constants::exit_codes::INVALID_INPUT,
            _ => super::constants::exit_codes::FAILURE,
        };
        eprintln!("Error: {}", core_err);
        std::process::exit(code)
    }
    eprintln!("Error: {:#}", err);
    std::process::exit(super::constants::exit_codes::FAILURE)
}
