//! Files written at the end of a run.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;
use tracing::info;

use edscreen_core::{RunLog, ScreenResult, SourceReport};

use crate::frames::{records_frame, summary_frame};

pub const RESULTS_STEM: &str = "EDscreener_results";
pub const SUMMARY_STEM: &str = "EDscreener_summary";
pub const LOG_FILE: &str = "EDscreener_log.txt";
pub const MANIFEST_FILE: &str = "EDscreener_manifest.json";

/// Table formats written for results and summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Both,
}

impl OutputFormat {
    pub fn csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    pub fn json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub results_csv: Option<PathBuf>,
    pub summary_csv: Option<PathBuf>,
    pub results_json: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

impl OutputPaths {
    pub fn all(&self) -> Vec<&Path> {
        [
            &self.results_csv,
            &self.summary_csv,
            &self.results_json,
            &self.summary_json,
            &self.log,
            &self.manifest,
        ]
        .into_iter()
        .flatten()
        .map(PathBuf::as_path)
        .collect()
    }
}

/// Run metadata written next to the tables.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest<'a> {
    pub generated_at: String,
    pub input: &'a Path,
    pub substances: usize,
    pub sources: &'a [SourceReport],
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(BufWriter::new(file))
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("write {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

pub fn write_log(log: &RunLog, path: &Path) -> Result<()> {
    let mut text = log.lines().join("\n");
    text.push('\n');
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}

/// Writes every output file of a run into `output_dir`.
///
/// # Errors
///
/// Fails when the directory cannot be created or a file cannot be written.
pub fn write_outputs(
    result: &ScreenResult,
    input: &Path,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let mut paths = OutputPaths::default();

    if format.csv() {
        let results = output_dir.join(format!("{RESULTS_STEM}.csv"));
        write_csv(&mut records_frame(&result.records)?, &results)?;
        let summary = output_dir.join(format!("{SUMMARY_STEM}.csv"));
        write_csv(&mut summary_frame(&result.summary)?, &summary)?;
        paths.results_csv = Some(results);
        paths.summary_csv = Some(summary);
    }
    if format.json() {
        let results = output_dir.join(format!("{RESULTS_STEM}.json"));
        write_json(&result.records, &results)?;
        let summary = output_dir.join(format!("{SUMMARY_STEM}.json"));
        write_json(&result.summary, &summary)?;
        paths.results_json = Some(results);
        paths.summary_json = Some(summary);
    }

    let log = output_dir.join(LOG_FILE);
    write_log(&result.log, &log)?;
    paths.log = Some(log);

    let manifest = Manifest {
        generated_at: Utc::now().to_rfc3339(),
        input,
        substances: result.records.len(),
        sources: &result.sources,
    };
    let manifest_path = output_dir.join(MANIFEST_FILE);
    write_json(&manifest, &manifest_path)?;
    paths.manifest = Some(manifest_path);

    info!(
        output_dir = %output_dir.display(),
        files = paths.all().len(),
        "outputs written"
    );
    Ok(paths)
}
