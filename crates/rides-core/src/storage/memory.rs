//! In-memory ride store.

use std::path::Path;

use super::traits::RideStore;
use super::types::ReadOutcome;
use crate::error::Result;
use crate::record::RideRecord;

/// A `RideStore` that keeps records in a `Vec`. Useful for dry runs and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryRideStore {
    records: Vec<RideRecord>,
}

impl MemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RideRecord] {
        &self.records
    }
}

impl RideStore for MemoryRideStore {
    fn path(&self) -> &Path {
        Path::new(":memory:")
    }

    fn append(&mut self, record: &RideRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> ReadOutcome {
        ReadOutcome::complete(self.records.clone())
    }
}
