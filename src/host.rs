//! Boundary with the editor host
//!
//! The host sees two things: a single error slot and the quickfix list.
//! Results cross this boundary as typed data, never as command strings built
//! by hand, so there is no quoting or escaping to get wrong.

use tracing::error;

use crate::quickfix::DiagnosticRecord;

/// What this crate is allowed to do to the editor host
pub trait Host {
    /// Overwrite the host-visible error slot. Last write wins; this is a
    /// slot, not a queue.
    fn report_error(&mut self, message: String);

    /// Replace the host's quickfix list with `records`, in the given order
    fn set_quickfix(&mut self, records: &[DiagnosticRecord]);

    /// Hand a plain text result (a resolved path, build output) to the host
    fn show(&mut self, text: &str);
}

/// Host binding for running under a plain terminal or an editor's job API:
/// errors go to stderr (the host-visible error channel), the quickfix list is
/// emitted as JSON on stdout.
#[derive(Debug, Default)]
pub struct StdioHost;

impl StdioHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for StdioHost {
    fn report_error(&mut self, message: String) {
        error!("{message}");
        eprintln!("vimvs-bridge: {message}");
    }

    fn set_quickfix(&mut self, records: &[DiagnosticRecord]) {
        // Serialization of these records cannot fail; fall back to an empty
        // list rather than panicking in the output path
        let json = serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string());
        println!("{json}");
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

/// In-memory host used by tests to observe reporter behavior
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub error_slot: Option<String>,
    pub reports: usize,
    pub quickfix: Vec<DiagnosticRecord>,
    pub shown: Vec<String>,
}

#[cfg(test)]
impl Host for RecordingHost {
    fn report_error(&mut self, message: String) {
        self.reports += 1;
        self.error_slot = Some(message);
    }

    fn set_quickfix(&mut self, records: &[DiagnosticRecord]) {
        self.quickfix = records.to_vec();
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}
