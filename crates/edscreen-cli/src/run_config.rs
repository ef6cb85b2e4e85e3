//! Assembling the run configuration from the config file and flags.
//!
//! Precedence, lowest first: built-in layouts, the TOML file, command line
//! flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use edscreen_model::SourceKind;
use edscreen_standards::{RunConfig, load_run_config};

/// Folder next to the input list searched when none is configured.
pub const DEFAULT_DATABASES_DIR: &str = "databases";

/// A `KIND=PATH` source flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOverride {
    pub kind: SourceKind,
    pub path: PathBuf,
}

impl FromStr for SourceOverride {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, path) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected KIND=PATH, got '{raw}'"))?;
        let kind = kind.parse::<SourceKind>().map_err(|error| error.to_string())?;
        let path = path.trim();
        if path.is_empty() {
            return Err(format!("missing path for source '{kind}'"));
        }
        Ok(Self {
            kind,
            path: PathBuf::from(path),
        })
    }
}

/// Builds the configuration for screening `input`.
///
/// # Errors
///
/// Fails when the config file cannot be read or parsed.
pub fn build_run_config(
    input: &Path,
    config_path: Option<&Path>,
    databases: Option<&Path>,
    overrides: &[SourceOverride],
) -> Result<RunConfig> {
    let mut config = match config_path {
        Some(path) => load_run_config(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(dir) = databases {
        config.databases = Some(dir.to_path_buf());
    }
    if config.databases.is_none() {
        let fallback = input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(DEFAULT_DATABASES_DIR);
        if fallback.is_dir() {
            debug!(databases = %fallback.display(), "using databases folder next to input");
            config.databases = Some(fallback);
        }
    }
    for source in overrides {
        config.set_source_path(source.kind, source.path.clone());
    }
    Ok(config)
}
