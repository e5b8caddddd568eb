//! Ride Tracker and Ride Viewer terminal applications.
//!
//! Both binaries share one ride file; this library holds the flag parsing,
//! configuration, rendering and command handlers they are built from.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod helpers;
pub mod logging;
pub mod output;
pub mod ui;
