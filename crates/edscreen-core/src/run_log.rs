//! Append-only log of the steps of one run.
//!
//! Every event is mirrored to `tracing` when it is recorded, so the log file
//! and the console see the same sequence.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use edscreen_model::SourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    SourceLoaded {
        source: SourceKind,
        path: PathBuf,
        rows: usize,
    },
    SourceAbsent {
        source: SourceKind,
        reason: String,
    },
    SourceFailed {
        source: SourceKind,
        error: String,
    },
    SubstanceProcessed {
        index: usize,
        total: usize,
        cas: String,
        matched: usize,
    },
    RunCompleted {
        substances: usize,
    },
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceLoaded { source, path, rows } => write!(
                f,
                "{}: loaded {} rows from {}",
                source.namespace(),
                rows,
                path.display()
            ),
            Self::SourceAbsent { source, reason } => {
                write!(f, "{}: not available ({reason})", source.namespace())
            }
            Self::SourceFailed { source, error } => {
                write!(f, "{}: could not be used ({error})", source.namespace())
            }
            Self::SubstanceProcessed {
                index,
                total,
                cas,
                matched,
            } => write!(
                f,
                "substance {index} of {total} processed: {cas} ({matched} sources matched)"
            ),
            Self::RunCompleted { substances } => {
                write!(f, "run completed: {substances} substances screened")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLogEntry {
    pub at: DateTime<Utc>,
    pub event: RunEvent,
}

impl fmt::Display for RunLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.at.format("%Y-%m-%d %H:%M:%S"), self.event)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunLog {
    entries: Vec<RunLogEntry>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event and emits it as a tracing event.
    pub fn record(&mut self, event: RunEvent) {
        emit(&event);
        self.entries.push(RunLogEntry {
            at: Utc::now(),
            event,
        });
    }

    pub fn entries(&self) -> &[RunLogEntry] {
        &self.entries
    }

    pub fn events(&self) -> impl Iterator<Item = &RunEvent> {
        self.entries.iter().map(|entry| &entry.event)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per event, in recording order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

fn emit(event: &RunEvent) {
    match event {
        RunEvent::SourceLoaded { source, path, rows } => info!(
            source = %source,
            path = %path.display(),
            rows,
            "source loaded"
        ),
        RunEvent::SourceAbsent { source, reason } => {
            info!(source = %source, reason = %reason, "source absent");
        }
        RunEvent::SourceFailed { source, error } => {
            warn!(source = %source, error = %error, "source failed");
        }
        RunEvent::SubstanceProcessed {
            index,
            total,
            cas,
            matched,
        } => info!(index, total, cas = %cas, matched, "substance processed"),
        RunEvent::RunCompleted { substances } => info!(substances, "screening completed"),
    }
}
