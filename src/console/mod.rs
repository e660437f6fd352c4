//! Console Output Abstraction
//!
//! Everything the tool says to an operator goes through a `Console` sink, so
//! tests can swap in a recording sink and assert on messages instead of
//! scraping process output.

use std::io::Write;
use std::sync::Mutex;

use chrono::Utc;

/// Severity/kind of a console message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Warn,
    Info,
    Progress,
    Verbose,
}

impl MessageKind {
    /// Label used when rendering the message as a log line
    pub fn label(&self) -> &'static str {
        match self {
            MessageKind::Error => "ERROR",
            MessageKind::Warn => "WARN",
            MessageKind::Info => "INFO",
            MessageKind::Progress => "PROGRESS",
            MessageKind::Verbose => "VERBOSE",
        }
    }
}

/// Sink for operator-visible messages
pub trait Console: Send + Sync {
    /// Emit one message
    fn message(&self, kind: MessageKind, text: &str);

    fn error(&self, text: &str) {
        self.message(MessageKind::Error, text);
    }

    fn warn(&self, text: &str) {
        self.message(MessageKind::Warn, text);
    }

    fn info(&self, text: &str) {
        self.message(MessageKind::Info, text);
    }

    fn progress(&self, text: &str) {
        self.message(MessageKind::Progress, text);
    }

    fn verbose(&self, text: &str) {
        self.message(MessageKind::Verbose, text);
    }
}

/// Console that writes timestamped log lines to any writer
pub struct LogConsole {
    out: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl LogConsole {
    /// Create a console writing to the given sink
    pub fn new(out: Box<dyn Write + Send>, verbose: bool) -> Self {
        Self {
            out: Mutex::new(out),
            verbose,
        }
    }

    /// Create a console writing to stdout
    pub fn stdout(verbose: bool) -> Self {
        Self::new(Box::new(std::io::stdout()), verbose)
    }
}

impl Console for LogConsole {
    fn message(&self, kind: MessageKind, text: &str) {
        if kind == MessageKind::Verbose && !self.verbose {
            return;
        }
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        if let Ok(mut out) = self.out.lock() {
            // A broken sink must never take down the caller.
            let _ = writeln!(out, "{} {:8} {}", timestamp, kind.label(), text);
        }
    }
}

/// Console that records messages for test assertions
#[derive(Default)]
pub struct RecordingConsole {
    messages: Mutex<Vec<(MessageKind, String)>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages recorded so far
    pub fn messages(&self) -> Vec<(MessageKind, String)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// True if any recorded message of the given kind contains `needle`
    pub fn contains(&self, kind: MessageKind, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|(k, text)| *k == kind && text.contains(needle))
    }
}

impl Console for RecordingConsole {
    fn message(&self, kind: MessageKind, text: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((kind, text.to_string()));
        }
    }
}
