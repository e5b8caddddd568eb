//! Ride store trait definition.
//!
//! `RideStore` is the seam between the two applications and the shared file.
//! The entry form only appends; the history viewer only reads.

use std::path::Path;

use super::types::ReadOutcome;
use crate::error::Result;
use crate::record::RideRecord;

/// Append-only storage for ride records.
///
/// Implementations must ensure:
/// - Records are read back in the order they were appended
/// - Appending never rewrites or reorders existing records
/// - A store that has never been written to reads as zero records, not an error
pub trait RideStore {
    /// Location of the backing data, for display and logging.
    fn path(&self) -> &Path;

    /// Append one record.
    ///
    /// The record is written as-is; callers validate before appending.
    ///
    /// # Errors
    ///
    /// Returns `RidesError::Io` or `RidesError::Csv` if the write fails.
    fn append(&mut self, record: &RideRecord) -> Result<()>;

    /// Read every record from the beginning.
    ///
    /// Never caches: each call observes appends made by other writers since
    /// the previous call. On failure the outcome still carries the records
    /// read before the error.
    fn read_all(&self) -> ReadOutcome;

    /// Read every record, discarding partial results on failure.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while reading.
    fn load_all(&self) -> Result<Vec<RideRecord>> {
        self.read_all().into_result()
    }
}
