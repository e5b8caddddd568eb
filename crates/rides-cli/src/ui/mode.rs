//! Output mode routing logic.

/// Output mode determines how the ride table and messages are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Tab-separated rows, stable for scripts
    #[default]
    Plain,
    /// Bordered table, badges and colors (TTY only)
    Pretty,
}

/// Accepted `--format` values.
pub const FORMATS: [&str; 2] = ["table", "plain"];

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` wins over everything
    /// 2. `--format plain` forces plain
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is a TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }

        if format_flag == Some("plain") || term_is_dumb {
            return Self::Plain;
        }

        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Reject `--format` values other than `table` and `plain`, and the
    /// `--format` + `--json` combination.
    pub fn validate_flags(json_flag: bool, format_flag: Option<&str>) -> anyhow::Result<()> {
        let Some(format) = format_flag else {
            return Ok(());
        };
        if json_flag {
            return Err(anyhow::anyhow!("--format cannot be used with --json"));
        }
        if !FORMATS.contains(&format) {
            return Err(anyhow::anyhow!(
                "Unsupported format: {} (use {})",
                format,
                FORMATS.join(" or ")
            ));
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
