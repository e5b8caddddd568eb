//! Storage for ride records.
//!
//! - **traits**: the `RideStore` interface shared by both applications
//! - **csv_file**: the shared CSV file implementation
//! - **memory**: an in-memory implementation
//! - **types**: read outcomes

pub mod csv_file;
pub mod memory;
pub mod traits;
pub mod types;

pub use csv_file::{CsvRideStore, DEFAULT_FILE_NAME};
pub use memory::MemoryRideStore;
pub use traits::RideStore;
pub use types::ReadOutcome;
