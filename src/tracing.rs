//! Tracing setup and selection-state diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,message=debug` - scoped filtering
//! - `RUST_LOG=specimen_studio::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/specimen-studio/logs/specimen-studio.log` with
//! daily rotation. The file layer always records at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{SelectionCoordinator, SelectionRange, SelectionState};

/// File name prefix of the rolling log
pub const LOG_FILE_NAME: &str = "specimen-studio.log";

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the selection coordinator for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    pub page: String,
    pub cell: Option<String>,
    pub state: SelectionState,
    pub stored: Option<SelectionRange>,
    pub has_editor: bool,
}

impl SelectionSnapshot {
    pub fn from_coordinator(selection: &SelectionCoordinator) -> Self {
        Self {
            page: selection.selected_page_id().to_string(),
            cell: selection.selected_cell().map(|cell| cell.to_string()),
            state: selection.state(),
            stored: selection.stored_range(),
            has_editor: selection.has_editor(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.page != other.page {
            changes.push(format!("page: {} → {}", self.page, other.page));
        }
        if self.cell != other.cell {
            changes.push(format!(
                "cell: {} → {}",
                self.cell.as_deref().unwrap_or("-"),
                other.cell.as_deref().unwrap_or("-")
            ));
        }
        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.stored != other.stored {
            let describe = |range: Option<SelectionRange>| match range {
                Some(range) => format!("{}..{}", range.from, range.to),
                None => "-".to_string(),
            };
            changes.push(format!(
                "stored: {} → {}",
                describe(self.stored),
                describe(other.stored)
            ));
        }
        if self.has_editor != other.has_editor {
            let status = if other.has_editor { "attached" } else { "detached" };
            changes.push(format!("editor {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellRef, PageId};

    #[test]
    fn test_diff_reports_cell_and_state_changes() {
        let mut selection = SelectionCoordinator::new(PageId::new("page-1"));
        let before = SelectionSnapshot::from_coordinator(&selection);
        assert_eq!(before.diff(&before.clone()), None);

        selection.select_cell(CellRef::new(PageId::new("page-1"), 2));
        let after = SelectionSnapshot::from_coordinator(&selection);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("cell: - → page-1#2"), "{}", diff);
        assert!(diff.contains("state: Idle → CellDefault"), "{}", diff);
    }
}
