//! Field prompting and `--field` parsing for the entry form.

use dialoguer::Input;

use rides_core::{FormState, RideField};

use crate::errors::CliError;

/// Prompt label for a field; required fields are marked with `*`.
pub fn field_prompt(field: RideField) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

/// Prompt for every field in order, pre-filled with the form's current values.
///
/// Empty input is accepted for every field; required fields are checked on
/// save, not here, so the user can fill the form in any order.
pub fn prompt_for_fields(form: &mut FormState) -> anyhow::Result<()> {
    for field in RideField::ALL {
        let value: String = Input::new()
            .with_prompt(field_prompt(field))
            .with_initial_text(form.get(field))
            .allow_empty(true)
            .interact_text()?;
        form.set(field, value);
    }
    Ok(())
}

/// Parse `NAME=VALUE` arguments into ride fields.
///
/// Names match header names or short headings, case-insensitively. Only the
/// first `=` splits, so values may contain `=`.
pub fn parse_cli_fields(fields: &[String]) -> anyhow::Result<Vec<(RideField, String)>> {
    let mut result = Vec::with_capacity(fields.len());
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            return Err(CliError::invalid_input(format!(
                "Invalid field format '{}'. Use NAME=VALUE",
                field
            ))
            .into());
        };
        let parsed: RideField = key.parse()?;
        result.push((parsed, value.to_string()));
    }
    Ok(result)
}

/// Load parsed `--field` values into the form. Later values win.
pub fn apply_cli_fields(form: &mut FormState, values: Vec<(RideField, String)>) {
    for (field, value) in values {
        form.set(field, value);
    }
}
