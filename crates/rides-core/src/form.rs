//! Entry form state.
//!
//! `FormState` is the editable buffer behind the form inputs. Saving never
//! reads the buffer directly: it takes a [`RideRecord`] snapshot by value, so
//! what gets validated is exactly what gets written.

use tracing::{debug, info};

use crate::error::Result;
use crate::record::{RideField, RideRecord};
use crate::storage::RideStore;

/// Editable values for the nine form inputs. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    buffer: RideRecord,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: RideField) -> &str {
        self.buffer.get(field)
    }

    pub fn set(&mut self, field: RideField, value: impl Into<String>) {
        self.buffer.set(field, value);
    }

    /// Reset all nine fields to empty.
    pub fn clear(&mut self) {
        self.buffer = RideRecord::default();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer == RideRecord::default()
    }

    /// Capture the current values as an immutable record.
    pub fn snapshot(&self) -> RideRecord {
        self.buffer.clone()
    }

    /// Validate the current values and append them to `store`.
    ///
    /// On success the form is cleared and the saved record is returned. On any
    /// error the buffer is left untouched so the user can fix and retry.
    ///
    /// # Errors
    ///
    /// Returns `RidesError::Validation` without touching the store when a
    /// required field is empty, or the store's error if the append fails.
    pub fn submit<S: RideStore + ?Sized>(&mut self, store: &mut S) -> Result<RideRecord> {
        let record = self.snapshot();
        save_record(store, record.clone())?;
        self.clear();
        Ok(record)
    }
}

/// Validate a record snapshot and append it to `store`.
///
/// # Errors
///
/// See [`FormState::submit`].
pub fn save_record<S: RideStore + ?Sized>(store: &mut S, record: RideRecord) -> Result<()> {
    if let Err(err) = record.validate() {
        debug!(error = %err, "rejected ride before write");
        return Err(err);
    }
    store.append(&record)?;
    info!(path = %store.path().display(), date = %record.date, "saved ride");
    Ok(())
}
