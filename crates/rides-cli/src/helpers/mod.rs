//! Input helpers for the entry form.

mod fields;

pub use fields::{apply_cli_fields, field_prompt, parse_cli_fields, prompt_for_fields};
