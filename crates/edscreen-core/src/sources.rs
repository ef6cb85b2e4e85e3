//! Loading configured sources into tables the matcher can borrow.
//!
//! Each source ends up in exactly one [`SourceLoad`] state. Only `Loaded`
//! sources take part in matching; the merger treats `Failed` like `Absent`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

use edscreen_ingest::{IngestError, file_sha256, read_sheet};
use edscreen_model::{SourceKind, SourceTable};
use edscreen_standards::{SourceLayout, SourceSetting};

use crate::run_log::{RunEvent, RunLog};

/// A source table read from disk, with its fingerprint.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub table: SourceTable,
    pub path: PathBuf,
    pub sha256: Option<String>,
}

impl LoadedSource {
    pub fn rows(&self) -> usize {
        self.table.len()
    }
}

#[derive(Debug, Clone)]
pub enum SourceLoad {
    Loaded(LoadedSource),
    Absent { reason: String },
    Failed { error: String },
}

impl SourceLoad {
    pub fn table(&self) -> Option<&SourceTable> {
        match self {
            Self::Loaded(loaded) => Some(&loaded.table),
            Self::Absent { .. } | Self::Failed { .. } => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::Absent { .. } => "absent",
            Self::Failed { .. } => "failed",
        }
    }
}

/// One source of a run: how to match it and what was loaded.
#[derive(Debug, Clone)]
pub struct RunSource {
    pub layout: SourceLayout,
    pub load: SourceLoad,
}

impl RunSource {
    pub fn kind(&self) -> SourceKind {
        self.layout.kind
    }

    /// A source backed by an in-memory table.
    pub fn from_table(layout: SourceLayout, table: SourceTable) -> Self {
        note_short_sheet(&layout, &table);
        let load = SourceLoad::Loaded(LoadedSource {
            path: PathBuf::from(table.name()),
            table,
            sha256: None,
        });
        Self { layout, load }
    }

    pub fn absent(layout: SourceLayout, reason: impl Into<String>) -> Self {
        Self {
            layout,
            load: SourceLoad::Absent {
                reason: reason.into(),
            },
        }
    }

    /// Event describing the load outcome.
    pub fn load_event(&self) -> RunEvent {
        let source = self.kind();
        match &self.load {
            SourceLoad::Loaded(loaded) => RunEvent::SourceLoaded {
                source,
                path: loaded.path.clone(),
                rows: loaded.rows(),
            },
            SourceLoad::Absent { reason } => RunEvent::SourceAbsent {
                source,
                reason: reason.clone(),
            },
            SourceLoad::Failed { error } => RunEvent::SourceFailed {
                source,
                error: error.clone(),
            },
        }
    }
}

/// Logs layouts that read past the last populated column.
///
/// Such sheets still load: cells beyond the populated area project as
/// empty values.
fn note_short_sheet(layout: &SourceLayout, table: &SourceTable) {
    if table.is_empty() {
        return;
    }
    let width = table.width();
    if let Some(column) = layout.max_column()
        && column.index() >= width
    {
        debug!(
            source = %layout.kind,
            column = %column,
            width,
            "layout reads past the populated columns"
        );
    }
}

/// Reads one file according to a layout.
pub fn load_source_file(layout: &SourceLayout, path: &Path) -> SourceLoad {
    let table = match read_sheet(path, &layout.sheet) {
        Ok(table) => table,
        Err(IngestError::FileNotFound { path }) => {
            return SourceLoad::Absent {
                reason: format!("file not found: {}", path.display()),
            };
        }
        Err(error) => {
            return SourceLoad::Failed {
                error: error.to_string(),
            };
        }
    };
    note_short_sheet(layout, &table);
    let sha256 = match file_sha256(path) {
        Ok(digest) => Some(digest),
        Err(error) => {
            debug!(path = %path.display(), error = %error, "could not fingerprint source");
            None
        }
    };
    SourceLoad::Loaded(LoadedSource {
        table,
        path: path.to_path_buf(),
        sha256,
    })
}

/// Loads every resolved source, recording one event per outcome.
///
/// A configured path wins over a discovered one. Disabled sources and
/// sources with no path are absent.
pub fn load_sources(
    settings: &[SourceSetting],
    discovered: &BTreeMap<SourceKind, PathBuf>,
    log: &mut RunLog,
) -> Vec<RunSource> {
    let span = info_span!("load_sources", sources = settings.len());
    let _guard = span.enter();

    let mut sources = Vec::with_capacity(settings.len());
    for setting in settings {
        let layout = setting.layout.clone();
        let source = if !setting.enabled {
            RunSource::absent(layout, "disabled in configuration")
        } else if let Some(path) = setting
            .path
            .as_ref()
            .or_else(|| discovered.get(&setting.kind()))
        {
            let load = load_source_file(&layout, path);
            RunSource { layout, load }
        } else {
            RunSource::absent(layout, "no file configured")
        };
        log.record(source.load_event());
        sources.push(source);
    }
    sources
}
