//! The history viewer's table model.
//!
//! A `HistoryTable` is redrawn wholesale: every load clears the current rows
//! and reads the store from the beginning. There is no caching between loads,
//! so a refresh always reflects appends made by other processes.

use tracing::{debug, info};

use crate::error::Result;
use crate::record::{RideField, RideRecord};
use crate::storage::RideStore;

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Position in the file at load time. Display-only: it shifts if the file
    /// is edited, so it must never be stored or used as a key.
    pub index: usize,
    pub record: RideRecord,
}

impl HistoryRow {
    /// Cell values in display column order.
    pub fn cells(&self) -> Vec<String> {
        RideField::ALL
            .iter()
            .map(|f| self.record.get(*f).to_string())
            .collect()
    }
}

/// Rows currently shown by the viewer.
#[derive(Debug, Clone, Default)]
pub struct HistoryTable {
    rows: Vec<HistoryRow>,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display column headings, in order.
    pub fn columns() -> [&'static str; 9] {
        RideField::ALL.map(|f| f.heading())
    }

    /// Clear the table and reload it from `store`.
    ///
    /// A missing file loads as zero rows. If the read fails part way, the rows
    /// read before the failure stay in the table and the error is returned so
    /// the caller can report it.
    ///
    /// # Errors
    ///
    /// Returns the store's read error.
    pub fn load<S: RideStore + ?Sized>(&mut self, store: &S) -> Result<usize> {
        self.rows.clear();

        let outcome = store.read_all();
        self.rows.extend(
            outcome
                .records
                .into_iter()
                .enumerate()
                .map(|(index, record)| HistoryRow { index, record }),
        );

        match outcome.error {
            Some(err) => {
                // The caller shows the error itself.
                debug!(
                    path = %store.path().display(),
                    loaded = self.rows.len(),
                    error = %err,
                    "ride history loaded partially"
                );
                Err(err)
            }
            None => {
                info!(path = %store.path().display(), rows = self.rows.len(), "loaded ride history");
                Ok(self.rows.len())
            }
        }
    }

    /// Reload from scratch. Same as [`HistoryTable::load`].
    ///
    /// # Errors
    ///
    /// Returns the store's read error.
    pub fn refresh<S: RideStore + ?Sized>(&mut self, store: &S) -> Result<usize> {
        self.load(store)
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows as display cells.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(HistoryRow::cells).collect()
    }

    /// The records behind the rows, in file order.
    pub fn records(&self) -> Vec<&RideRecord> {
        self.rows.iter().map(|row| &row.record).collect()
    }
}
