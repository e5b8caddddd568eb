//! Application-level utilities shared by both binaries.
//!
//! This module provides:
//! - Path resolution for the config and ride files
//! - A context that loads configuration lazily

mod context;
mod resolver;

pub use context::AppContext;
