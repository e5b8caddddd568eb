//! Result types for reading the ride file.

use crate::error::{Result, RidesError};
use crate::record::RideRecord;

/// Everything a read produced: the records parsed in file order, and the
/// error that stopped the read, if any.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub records: Vec<RideRecord>,
    pub error: Option<RidesError>,
}

impl ReadOutcome {
    /// A complete read.
    pub fn complete(records: Vec<RideRecord>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    /// A read that stopped early; `records` holds what was parsed before `error`.
    pub fn partial(records: Vec<RideRecord>, error: RidesError) -> Self {
        Self {
            records,
            error: Some(error),
        }
    }

    /// Collapse into a plain result, dropping partial records on failure.
    pub fn into_result(self) -> Result<Vec<RideRecord>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.records),
        }
    }
}
