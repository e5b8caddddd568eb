//! Entry form: collect one ride at a time and append it to the ride file.

use dialoguer::Select;

use rides_core::{FormState, RideField, RideRecord, RideStore};

use crate::app::AppContext;
use crate::cli::TrackerCli;
use crate::errors::CliError;
use crate::helpers::{apply_cli_fields, parse_cli_fields, prompt_for_fields};
use crate::ui::{self, UiContext};

const FORM_TITLE: &str = "Ride Tracker";

const ACTIONS: [&str; 4] = ["Save ride", "Clear fields", "Edit fields", "Quit"];

pub fn handle_track(ctx: &AppContext, args: &TrackerCli) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;
    let mut store = ctx.open_store()?;

    let mut form = FormState::new();
    let values = parse_cli_fields(&args.fields)?;
    apply_cli_fields(&mut form, values);

    if !args.no_input && ui_ctx.is_interactive() {
        run_form(ctx, &ui_ctx, &mut store, &mut form)
    } else {
        save_once(ctx, &ui_ctx, &mut store, &mut form)
    }
}

/// Single save from `--field` values. Any failure ends the run.
fn save_once<S: RideStore>(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    store: &mut S,
    form: &mut FormState,
) -> anyhow::Result<()> {
    if form.is_empty() {
        return Err(CliError::invalid_input_with_hint(
            "No ride fields given",
            "Hint: pass them with --field \"NAME=VALUE\".",
        )
        .into());
    }
    let record = form.submit(store).map_err(|err| {
        if !err.is_validation() {
            tracing::error!(path = %store.path().display(), error = %err, "save failed");
        }
        CliError::from(err)
    })?;
    if !ctx.quiet() {
        ui::print(ui_ctx, &saved_receipt(ui_ctx, store, &record));
    }
    Ok(())
}

/// Prompt, then offer save/clear/edit/quit until the user quits.
///
/// A failed save is reported and the form keeps its values so the user can
/// correct them.
fn run_form<S: RideStore>(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    store: &mut S,
    form: &mut FormState,
) -> anyhow::Result<()> {
    if !ctx.quiet() {
        let path = store.path().display().to_string();
        ui::print(ui_ctx, &ui::header(ui_ctx, FORM_TITLE, Some(&path)));
        ui::print(ui_ctx, &ui::hint(ui_ctx, "Fields marked * are required."));
    }

    prompt_for_fields(form)?;
    loop {
        let choice = Select::new()
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match choice {
            0 => match form.submit(store) {
                Ok(record) => {
                    ui::print(ui_ctx, &saved_receipt(ui_ctx, store, &record));
                    prompt_for_fields(form)?;
                }
                Err(err) if err.is_validation() => {
                    ui::print_error(ui_ctx, &err.to_string(), None);
                }
                Err(err) => {
                    tracing::error!(path = %store.path().display(), error = %err, "save failed");
                    ui::print_error(ui_ctx, &err.to_string(), Some("Your entries were kept."));
                }
            },
            1 => {
                form.clear();
                prompt_for_fields(form)?;
            }
            2 => prompt_for_fields(form)?,
            _ => return Ok(()),
        }
    }
}

fn saved_receipt<S: RideStore>(ui_ctx: &UiContext, store: &S, record: &RideRecord) -> String {
    let path = store.path().display().to_string();
    let mut items: Vec<(&str, &str)> = RideField::REQUIRED
        .iter()
        .map(|field| (field.label(), record.get(*field)))
        .collect();
    items.push(("File", path.as_str()));
    ui::receipt(ui_ctx, "Ride saved", &items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use rides_core::storage::MemoryRideStore;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_saved_receipt_lists_required_fields_and_file() {
        let store = MemoryRideStore::new();
        let record = RideRecord::from_values([
            "2024-01-01".to_string(),
            String::new(),
            "A St".to_string(),
            "B Ave".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ]);
        let text = saved_receipt(&plain_ctx(), &store, &record);
        assert_eq!(
            text,
            "status=ok\ndate=2024-01-01\npickup_location=A St\ndrop_off_location=B Ave\nfile=:memory:"
        );
    }
}
