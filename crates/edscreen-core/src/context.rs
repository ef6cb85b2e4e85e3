//! Everything a screening run reads besides the substance list.
//!
//! The context is built once before matching starts and passed through the
//! run explicitly; there is no process-wide state.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::{info, warn};

use edscreen_ingest::{discover_source_files, list_source_files};
use edscreen_standards::{ClassificationMapping, RunConfig};

use crate::run_log::RunLog;
use crate::sources::{RunSource, load_sources};

#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Sources in enrichment order.
    pub sources: Vec<RunSource>,
    pub mapping: ClassificationMapping,
    pub log: RunLog,
}

impl RunContext {
    /// A context over already-loaded sources.
    ///
    /// Load events are recorded for each source.
    pub fn new(sources: Vec<RunSource>) -> Self {
        let mut log = RunLog::new();
        for source in &sources {
            log.record(source.load_event());
        }
        Self {
            sources,
            mapping: ClassificationMapping::standard(),
            log,
        }
    }

    pub fn with_mapping(mut self, mapping: ClassificationMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Resolves the configuration and loads every source it names.
    ///
    /// # Errors
    ///
    /// Fails on invalid layouts only; unreadable sources are recorded as
    /// failed and the run continues without them.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        let settings = config
            .resolve()
            .context("invalid source configuration")?;
        let discovered = match config.databases.as_deref() {
            Some(dir) => match list_source_files(dir) {
                Ok(files) => {
                    let found = discover_source_files(&files);
                    info!(
                        databases = %dir.display(),
                        files = files.len(),
                        matched = found.len(),
                        "scanned databases folder"
                    );
                    found
                }
                Err(error) => {
                    warn!(databases = %dir.display(), %error, "databases folder unusable");
                    BTreeMap::new()
                }
            },
            None => BTreeMap::new(),
        };
        let mut log = RunLog::new();
        let sources = load_sources(&settings, &discovered, &mut log);
        Ok(Self {
            sources,
            mapping: ClassificationMapping::standard(),
            log,
        })
    }
}
