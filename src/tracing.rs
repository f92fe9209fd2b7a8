//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection reconciliation and style transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=session=debug,message=debug` - scoped filtering
//! - `RUST_LOG=case_cycle::orchestrator=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/case-cycle/logs/case-cycle.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::case::CaseVariant;
use crate::model::Session;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/case-cycle/logs/case-cycle.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "case-cycle.log");
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

/// Lightweight snapshot of session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub variant: CaseVariant,
    pub history_depth: usize,
    pub redo_depth: usize,
    pub record_count: usize,
}

impl SessionSnapshot {
    pub fn from_session(session: &Session) -> Self {
        Self {
            variant: session.current_variant(),
            history_depth: session.history.depth(),
            redo_depth: session.history.redo_entries().len(),
            record_count: session.tracker.len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.variant != other.variant {
            changes.push(format!("variant: {} → {}", self.variant, other.variant));
        }
        if self.history_depth != other.history_depth || self.redo_depth != other.redo_depth {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.history_depth, self.redo_depth, other.history_depth, other.redo_depth
            ));
        }
        if self.record_count != other.record_count {
            changes.push(format!(
                "records: {} → {}",
                self.record_count, other.record_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
