//! CSV file ride store.
//!
//! File layout:
//!
//! ```text
//! Date,Time,Pickup Location,Drop-off Location,Fare,Driver,Rating,Payment Method,Notes
//! 2024-01-01,,A St,B Ave,,,,,
//! ```
//!
//! The header is written by the first append into a missing or empty file.
//! Reads map columns by header name, so reordered or missing columns are
//! tolerated; a missing value reads as the empty string.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::{debug, warn};

use super::traits::RideStore;
use super::types::ReadOutcome;
use crate::error::{Result, RidesError};
use crate::record::{RideField, RideRecord};

/// Default file name, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "rides.csv";

/// Ride store backed by a single comma-separated file.
#[derive(Debug, Clone)]
pub struct CsvRideStore {
    path: PathBuf,
}

impl CsvRideStore {
    /// Point a store at `path`. Nothing is created until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A header is needed when the file is absent or has no bytes yet.
    fn needs_header(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(err) => Err(RidesError::io(&self.path, err)),
        }
    }

    fn read_from(&self, file: File) -> ReadOutcome {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(err) => return ReadOutcome::partial(Vec::new(), RidesError::csv(&self.path, err)),
        };
        if headers.is_empty() {
            debug!(path = %self.path.display(), "ride file is empty");
            return ReadOutcome::default();
        }

        let columns = ColumnMap::from_headers(&headers);
        if columns.is_unrecognized() {
            return ReadOutcome::partial(
                Vec::new(),
                RidesError::UnrecognizedHeader {
                    path: self.path.clone(),
                },
            );
        }
        if !columns.is_complete() {
            warn!(
                path = %self.path.display(),
                missing = ?columns.missing(),
                "ride file header is missing columns; they will read as empty"
            );
        }

        let mut records = Vec::new();
        for row in reader.records() {
            match row {
                Ok(row) => records.push(columns.project(&row)),
                Err(err) => {
                    return ReadOutcome::partial(records, RidesError::csv(&self.path, err));
                }
            }
        }
        ReadOutcome::complete(records)
    }
}

impl RideStore for CsvRideStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn append(&mut self, record: &RideRecord) -> Result<()> {
        let write_header = self.needs_header()?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| RidesError::io(&self.path, err))?;
        debug!(path = %self.path.display(), write_header, "appending ride");

        if !write_header {
            let terminated =
                ends_with_newline(&mut file).map_err(|err| RidesError::io(&self.path, err))?;
            if !terminated {
                warn!(path = %self.path.display(), "last row had no line terminator; adding one");
                file.write_all(b"\n")
                    .map_err(|err| RidesError::io(&self.path, err))?;
            }
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);
        if write_header {
            writer
                .write_record(RideField::header())
                .map_err(|err| RidesError::csv(&self.path, err))?;
        }
        writer
            .write_record(record.values())
            .map_err(|err| RidesError::csv(&self.path, err))?;
        writer
            .flush()
            .map_err(|err| RidesError::io(&self.path, err))?;
        let file = writer
            .into_inner()
            .map_err(|err| RidesError::io(&self.path, err.into_error()))?;
        sync(file).map_err(|err| RidesError::io(&self.path, err))
    }

    fn read_all(&self) -> ReadOutcome {
        match File::open(&self.path) {
            Ok(file) => self.read_from(file),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no ride file yet");
                ReadOutcome::default()
            }
            Err(err) => ReadOutcome::partial(Vec::new(), RidesError::io(&self.path, err)),
        }
    }
}

/// Whether the last byte of a non-empty file is `\n`.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn sync(mut file: File) -> io::Result<()> {
    file.flush()?;
    file.sync_data()
}

/// Where each ride field lives in the file's header, if anywhere.
#[derive(Debug)]
struct ColumnMap {
    positions: [Option<usize>; 9],
}

impl ColumnMap {
    /// First occurrence wins when a header name repeats.
    fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = [None; 9];
        for (i, name) in headers.iter().enumerate() {
            if let Some(field) = RideField::from_label(name) {
                positions[field.index()].get_or_insert(i);
            }
        }
        Self { positions }
    }

    fn is_unrecognized(&self) -> bool {
        self.positions.iter().all(Option::is_none)
    }

    fn is_complete(&self) -> bool {
        self.positions.iter().all(Option::is_some)
    }

    fn missing(&self) -> Vec<RideField> {
        RideField::ALL
            .into_iter()
            .filter(|f| self.positions[f.index()].is_none())
            .collect()
    }

    fn project(&self, row: &StringRecord) -> RideRecord {
        RideRecord::from_values(self.positions.map(|pos| {
            pos.and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        }))
    }
}
