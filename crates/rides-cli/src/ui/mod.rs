//! UI primitives for the ride applications.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and ANSI styles
//! - **Render**: Headers, tables, receipts, hints, error messages
//! - **Format**: String utilities (truncate, single-line, counts)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{UiContext, UiFlags};
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, error_message, header, hint, kv, print, print_error, receipt, table,
};

pub use format::{count_label, single_line, truncate};
