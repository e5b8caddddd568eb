//! Ride history viewer.

use dialoguer::Select;

use rides_core::{CsvRideStore, HistoryTable, RideStore};

use crate::app::AppContext;
use crate::cli::ViewerCli;
use crate::constants::{exit_codes, TABLE_CELL_MAX};
use crate::errors::CliError;
use crate::output::records_json;
use crate::ui::{self, OutputMode, UiContext};

const VIEW_TITLE: &str = "Ride History";

pub fn handle_view(ctx: &AppContext, args: &ViewerCli) -> anyhow::Result<()> {
    OutputMode::validate_flags(args.json, args.format.as_deref())
        .map_err(|e| CliError::invalid_input(e.to_string()))?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let mut table = HistoryTable::new();

    if args.once || args.json || !ui_ctx.is_interactive() {
        let loaded = table.load(&store);
        show(ctx, &ui_ctx, &store, &table, loaded.as_ref().err());
        // The error badge is already on stderr; only the exit code is left.
        return loaded
            .map(|_| ())
            .map_err(|_| CliError::Reported(exit_codes::FAILURE).into());
    }

    loop {
        let loaded = table.refresh(&store);
        show(ctx, &ui_ctx, &store, &table, loaded.as_ref().err());

        let choice = Select::new()
            .items(&["Refresh", "Quit"])
            .default(0)
            .interact()?;
        if choice != 0 {
            return Ok(());
        }
    }
}

/// Print the table. A load error is shown above whatever rows were read.
fn show(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    store: &CsvRideStore,
    table: &HistoryTable,
    error: Option<&rides_core::RidesError>,
) {
    if ui_ctx.mode.is_json() {
        let json = serde_json::to_string_pretty(&records_json(&table.records()))
            .unwrap_or_else(|_| "[]".to_string());
        println!("{}", json);
        if let Some(err) = error {
            ui::print_error(ui_ctx, &err.to_string(), None);
        }
        return;
    }

    let path = store.path().display().to_string();
    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        ui::print(ui_ctx, &ui::header(ui_ctx, VIEW_TITLE, Some(&path)));
    }
    if let Some(err) = error {
        ui::print_error(ui_ctx, &err.to_string(), None);
    }

    let rows = table_rows(ui_ctx, table);
    let rendered = ui::table(ui_ctx, &HistoryTable::columns(), &rows);
    if !rendered.is_empty() {
        ui::print(ui_ctx, &rendered);
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        let footer = format!("{} in {}", ui::count_label(table.len()), path);
        ui::print(ui_ctx, &ui::kv(ui_ctx, "Showing", &footer));
    }
}

/// Cells for display. Pretty mode keeps each cell on one short line; plain
/// mode only flattens line breaks and tabs.
fn table_rows(ui_ctx: &UiContext, table: &HistoryTable) -> Vec<Vec<String>> {
    table
        .cells()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let line = ui::single_line(cell);
                    if ui_ctx.mode.is_pretty() {
                        ui::truncate(&line, TABLE_CELL_MAX)
                    } else {
                        line.replace('\t', " ")
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rides_core::storage::MemoryRideStore;
    use rides_core::{RideField, RideRecord, RideStore};

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            is_tty: mode.is_pretty(),
            color: false,
            unicode: false,
            width: 120,
            mode,
        }
    }

    fn loaded_table(notes: &str) -> HistoryTable {
        let mut store = MemoryRideStore::new();
        let mut record = RideRecord::default();
        record.set(RideField::Date, "2024-01-01");
        record.set(RideField::Pickup, "A St");
        record.set(RideField::Dropoff, "B Ave");
        record.set(RideField::Notes, notes);
        store.append(&record).unwrap();
        let mut table = HistoryTable::new();
        table.load(&store).unwrap();
        table
    }

    #[test]
    fn test_table_rows_plain_flattens_notes() {
        let table = loaded_table("left\tumbrella\nin car");
        let rows = table_rows(&ctx(OutputMode::Plain), &table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][8], "left umbrella in car");
        assert_eq!(rows[0][0], "2024-01-01");
    }

    #[test]
    fn test_table_rows_pretty_truncates() {
        let long = "x".repeat(TABLE_CELL_MAX + 10);
        let table = loaded_table(&long);
        let rows = table_rows(&ctx(OutputMode::Pretty), &table);
        assert_eq!(rows[0][8].chars().count(), TABLE_CELL_MAX);
        assert!(rows[0][8].ends_with("..."));
    }
}
