//! JSONL activity log: one self-contained JSON object per line.
//!
//! Lines are assembled in memory and written with a single `write_all` so a
//! reader tailing the stream never sees interleaved partial lines. Write
//! failures degrade the writer to discard mode; the watch loop never fails
//! because of logging.

#![allow(missing_docs)]

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Severity level for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Critical,
}

/// Event types emitted by the watch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    WatchStart,
    Sample,
    WatchStop,
    Error,
}

/// A single JSONL log entry. All fields are optional except `ts`, `event`, `severity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    pub event: EventType,
    pub severity: Severity,
    /// Command text being sampled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    /// Parsed sample value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Window length after the sample was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_len: Option<usize>,
    /// Wall time spent running the command, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// WBG error code if the event is a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Freeform details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogEntry {
    /// Create a new entry stamped with the current UTC time.
    pub fn new(event: EventType, severity: Severity) -> Self {
        Self {
            ts: format_utc_now(),
            event,
            severity,
            command: None,
            shell: None,
            value: None,
            window_len: None,
            duration_ms: None,
            error_code: None,
            error_message: None,
            details: None,
        }
    }
}

/// Line-oriented JSON writer over any byte sink.
///
/// A writer built with [`JsonlWriter::disabled`] accepts entries and drops
/// them, so call sites never branch on whether logging is on.
pub struct JsonlWriter<W: Write> {
    sink: Option<W>,
    lines_written: u64,
}

impl JsonlWriter<io::Stderr> {
    /// Stderr-backed writer, or a discarding one when `enabled` is false.
    pub fn stderr(enabled: bool) -> Self {
        if enabled {
            Self::new(io::stderr())
        } else {
            Self::disabled()
        }
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Some(sink),
            lines_written: 0,
        }
    }

    pub fn disabled() -> Self {
        Self {
            sink: None,
            lines_written: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Write a single log entry as one atomic JSONL line.
    pub fn write_entry(&mut self, entry: &LogEntry) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let line = match serde_json::to_string(entry) {
            Ok(json) => format!("{json}\n"),
            Err(e) => {
                let _ = writeln!(io::stderr(), "[WBG-JSONL] serialize error: {e}");
                return;
            }
        };

        if sink.write_all(line.as_bytes()).and_then(|()| sink.flush()).is_err() {
            // Sink is gone (closed pipe, full disk); stop trying.
            self.sink = None;
            return;
        }
        self.lines_written += 1;
    }

    /// Recover the sink. `None` if disabled or degraded.
    pub fn into_inner(self) -> Option<W> {
        self.sink
    }
}

fn format_utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// ──────────────────────── tests ────────────────────────
