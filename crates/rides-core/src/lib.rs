//! # Rides Core
//!
//! Core library for Rides - a personal log of ride-sharing trips kept in a
//! plain CSV file.
//!
//! This crate provides the record model, form state, and file storage used by
//! the `ride-tracker` entry form and the `ride-viewer` history viewer,
//! independent of the terminal interface.
//!
//! ## Architecture
//!
//! - **record**: the nine ride fields and the `RideRecord` type
//! - **form**: editable form state, validation, and save
//! - **history**: the reloadable table model behind the viewer
//! - **storage**: the `RideStore` trait and the CSV file implementation

pub mod error;
pub mod form;
pub mod history;
pub mod record;
pub mod storage;

pub use error::{Result, RidesError};
pub use form::FormState;
pub use history::{HistoryRow, HistoryTable};
pub use record::{RideField, RideRecord};
pub use storage::{CsvRideStore, RideStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
