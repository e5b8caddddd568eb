//! Output formatting helpers for the ride viewer.

mod json;

pub use json::records_json;
