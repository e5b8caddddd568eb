//! The ride record and its fixed set of fields.
//!
//! A record is nine free-text attributes. The order of [`RideField::ALL`] is
//! the order of the persisted header and of every written row.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, RidesError};

/// One of the nine ride attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideField {
    Date,
    Time,
    Pickup,
    Dropoff,
    Fare,
    Driver,
    Rating,
    Payment,
    Notes,
}

impl RideField {
    /// All fields, in header order.
    pub const ALL: [RideField; 9] = [
        RideField::Date,
        RideField::Time,
        RideField::Pickup,
        RideField::Dropoff,
        RideField::Fare,
        RideField::Driver,
        RideField::Rating,
        RideField::Payment,
        RideField::Notes,
    ];

    /// Fields that must be non-empty before a record can be saved.
    pub const REQUIRED: [RideField; 3] = [RideField::Date, RideField::Pickup, RideField::Dropoff];

    /// Column name in the persisted header row.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Pickup => "Pickup Location",
            Self::Dropoff => "Drop-off Location",
            Self::Fare => "Fare",
            Self::Driver => "Driver",
            Self::Rating => "Rating",
            Self::Payment => "Payment Method",
            Self::Notes => "Notes",
        }
    }

    /// Short column heading used by the history table.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::Dropoff => "Dropoff",
            Self::Payment => "Payment",
            other => other.label(),
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Position of this field in header order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Exact match against a persisted header name.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// The nine header names, in order.
    pub fn header() -> [&'static str; 9] {
        Self::ALL.map(|f| f.label())
    }
}

impl FromStr for RideField {
    type Err = RidesError;

    /// Lenient lookup: header name or short heading, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| {
                f.label().eq_ignore_ascii_case(wanted) || f.heading().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| RidesError::UnknownField(s.to_string()))
    }
}

/// A single ride, as saved by the entry form.
///
/// Serialized field names match the header row so that JSON output and the
/// CSV file use the same keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RideRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Pickup Location")]
    pub pickup: String,
    #[serde(rename = "Drop-off Location")]
    pub dropoff: String,
    #[serde(rename = "Fare")]
    pub fare: String,
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Payment Method")]
    pub payment: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl RideRecord {
    /// Build a record from values given in header order.
    pub fn from_values(values: [String; 9]) -> Self {
        let [date, time, pickup, dropoff, fare, driver, rating, payment, notes] = values;
        Self {
            date,
            time,
            pickup,
            dropoff,
            fare,
            driver,
            rating,
            payment,
            notes,
        }
    }

    pub fn get(&self, field: RideField) -> &str {
        match field {
            RideField::Date => &self.date,
            RideField::Time => &self.time,
            RideField::Pickup => &self.pickup,
            RideField::Dropoff => &self.dropoff,
            RideField::Fare => &self.fare,
            RideField::Driver => &self.driver,
            RideField::Rating => &self.rating,
            RideField::Payment => &self.payment,
            RideField::Notes => &self.notes,
        }
    }

    fn slot_mut(&mut self, field: RideField) -> &mut String {
        match field {
            RideField::Date => &mut self.date,
            RideField::Time => &mut self.time,
            RideField::Pickup => &mut self.pickup,
            RideField::Dropoff => &mut self.dropoff,
            RideField::Fare => &mut self.fare,
            RideField::Driver => &mut self.driver,
            RideField::Rating => &mut self.rating,
            RideField::Payment => &mut self.payment,
            RideField::Notes => &mut self.notes,
        }
    }

    pub fn set(&mut self, field: RideField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Values in header order, ready to be written as one row.
    pub fn values(&self) -> [&str; 9] {
        RideField::ALL.map(|f| self.get(f))
    }

    /// Required fields that are empty, in header order.
    pub fn missing_required(&self) -> Vec<RideField> {
        RideField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Check that every required field is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `RidesError::Validation` naming each empty required field.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RidesError::Validation { missing })
        }
    }
}
