//! JSON output for ride records.

use rides_core::RideRecord;

/// Convert records to a JSON array keyed by header name.
pub fn records_json(records: &[&RideRecord]) -> serde_json::Value {
    serde_json::Value::Array(
        records
            .iter()
            .map(|record| serde_json::to_value(record).unwrap_or(serde_json::Value::Null))
            .collect(),
    )
}
