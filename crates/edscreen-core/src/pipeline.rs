//! The screening run: enrich, classify, summarise.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use edscreen_ingest::read_substances;
use edscreen_model::{Record, SourceKind, Substance, SummaryRow};
use edscreen_standards::RunConfig;

use crate::classification::ClassificationDeriver;
use crate::context::RunContext;
use crate::merger::RecordMerger;
use crate::run_log::{RunEvent, RunLog};
use crate::sources::{RunSource, SourceLoad};
use crate::summary::project_summaries;

/// Per-source outcome of a run, as reported in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub source: SourceKind,
    pub namespace: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    /// Why the source was absent or failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Records whose namespace for this source answered `Yes`.
    pub matches: usize,
}

impl SourceReport {
    fn new(source: &RunSource, records: &[Record]) -> Self {
        let kind = source.kind();
        let matches = records
            .iter()
            .filter(|record| record.namespace(kind).presence().is_yes())
            .count();
        let (path, rows, sha256, detail) = match &source.load {
            SourceLoad::Loaded(loaded) => (
                Some(loaded.path.clone()),
                Some(loaded.rows()),
                loaded.sha256.clone(),
                None,
            ),
            SourceLoad::Absent { reason } => (None, None, None, Some(reason.clone())),
            SourceLoad::Failed { error } => (None, None, None, Some(error.clone())),
        };
        Self {
            source: kind,
            namespace: kind.namespace(),
            status: source.load.status(),
            path,
            rows,
            sha256,
            detail,
            matches,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScreenResult {
    pub records: Vec<Record>,
    pub summary: Vec<SummaryRow>,
    pub sources: Vec<SourceReport>,
    pub log: RunLog,
}

/// Screens substances against the sources of `ctx`.
///
/// Enrichment runs first, then the classification and summary passes over
/// the finished records.
pub fn screen(substances: &[Substance], ctx: RunContext) -> ScreenResult {
    let span = info_span!("screen", substances = substances.len());
    let _guard = span.enter();

    let RunContext {
        sources,
        mapping,
        mut log,
    } = ctx;

    let mut merger = RecordMerger::new(substances);
    merger.enrich(&sources, &mut log);
    let mut records = merger.into_records();

    ClassificationDeriver::new(&mapping).derive_all(&mut records);
    let summary = project_summaries(&records);

    log.record(RunEvent::RunCompleted {
        substances: records.len(),
    });

    let sources = sources
        .iter()
        .map(|source| SourceReport::new(source, &records))
        .collect();
    ScreenResult {
        records,
        summary,
        sources,
        log,
    }
}

/// Reads the input list, loads the configured sources and screens.
///
/// # Errors
///
/// Fails when the input list cannot be read or lacks a `CAS` column, or
/// when the configuration is invalid.
pub fn run_screen(input: &Path, config: &RunConfig) -> Result<ScreenResult> {
    let substances = read_substances(input)
        .with_context(|| format!("failed to read input list {}", input.display()))?;
    let ctx = RunContext::from_config(config)?;
    Ok(screen(&substances, ctx))
}
