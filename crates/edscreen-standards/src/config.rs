//! TOML run configuration.
//!
//! The file only overrides what differs from the built-in layouts:
//!
//! ```toml
//! databases = "databases"
//!
//! [sources.efsa-ppp]
//! path = "databases/PPP ED list 2025-01-31.xlsx"
//! key_columns = ["A", "B"]
//!
//! [sources.efsa-ppp.columns]
//! "Status" = "H"
//!
//! [sources.bpr]
//! enabled = false
//! ```

#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use edscreen_ingest::SheetSelector;
use edscreen_model::{ColumnRef, SourceKind};

use crate::defaults::default_layout;
use crate::error::StandardsError;
use crate::layout::{CandidateKey, KeyColumns, MatchRule, SourceLayout};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Folder searched for source snapshots by file name.
    #[serde(default)]
    pub databases: Option<PathBuf>,
    #[serde(default)]
    pub sources: BTreeMap<String, SourceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Defaults to enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub sheet: Option<SheetSelector>,
    #[serde(default)]
    pub key_columns: Option<Vec<String>>,
    /// Detail field label to column letters.
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
    /// Also accept cells containing the EC number.
    #[serde(default)]
    pub contains_ec: Option<bool>,
}

/// A fully resolved source: validated layout plus where to read it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSetting {
    pub layout: SourceLayout,
    pub path: Option<PathBuf>,
    pub enabled: bool,
}

impl SourceSetting {
    pub fn kind(&self) -> SourceKind {
        self.layout.kind
    }
}

/// Reads a TOML config; relative paths resolve against the file's folder.
pub fn load_run_config(path: &Path) -> Result<RunConfig, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let mut config: RunConfig = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(base) = path.parent() {
        config.rebase(base);
    }
    Ok(config)
}

impl RunConfig {
    fn rebase(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(databases) = self.databases.as_mut() {
            join(databases);
        }
        for entry in self.sources.values_mut() {
            if let Some(path) = entry.path.as_mut() {
                join(path);
            }
        }
    }

    /// Sets the path of one source, replacing any configured path.
    ///
    /// An entry written under an alias of the key (`efsa_ppp`, `EFSA-PPP`)
    /// is updated in place so its other settings are kept.
    pub fn set_source_path(&mut self, kind: SourceKind, path: PathBuf) {
        let key = self
            .sources
            .keys()
            .find(|key| key.parse::<SourceKind>().ok() == Some(kind))
            .cloned()
            .unwrap_or_else(|| kind.key().to_string());
        self.sources.entry(key).or_default().path = Some(path);
    }

    /// Resolves every known source, in enrichment order.
    ///
    /// # Errors
    ///
    /// Unknown source keys, two keys naming the same source, unknown field
    /// labels and invalid column letters are configuration errors.
    pub fn resolve(&self) -> Result<Vec<SourceSetting>, StandardsError> {
        let mut entries: BTreeMap<SourceKind, &SourceEntry> = BTreeMap::new();
        for (key, entry) in &self.sources {
            let kind = key
                .parse::<SourceKind>()
                .map_err(|_| StandardsError::UnknownSource { key: key.clone() })?;
            if entries.insert(kind, entry).is_some() {
                return Err(StandardsError::DuplicateSource {
                    source_key: kind.key().to_string(),
                });
            }
        }

        let mut settings = Vec::with_capacity(SourceKind::ALL.len());
        for kind in SourceKind::ALL {
            let mut layout = default_layout(kind);
            let Some(entry) = entries.get(&kind) else {
                settings.push(SourceSetting {
                    layout,
                    path: None,
                    enabled: true,
                });
                continue;
            };
            apply_entry(&mut layout, entry)?;
            settings.push(SourceSetting {
                layout,
                path: entry.path.clone(),
                enabled: entry.enabled.unwrap_or(true),
            });
        }
        Ok(settings)
    }
}

fn parse_column(kind: SourceKind, field: &str, value: &str) -> Result<ColumnRef, StandardsError> {
    value.parse().map_err(|_| StandardsError::InvalidColumn {
        source_key: kind.key().to_string(),
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn apply_entry(layout: &mut SourceLayout, entry: &SourceEntry) -> Result<(), StandardsError> {
    let kind = layout.kind;
    if let Some(sheet) = &entry.sheet {
        layout.sheet = sheet.clone();
    }
    if let Some(columns) = &entry.key_columns {
        let parsed = columns
            .iter()
            .map(|value| parse_column(kind, "key_columns", value))
            .collect::<Result<Vec<_>, _>>()?;
        layout.key_columns = if parsed.is_empty() {
            KeyColumns::All
        } else {
            KeyColumns::Only(parsed)
        };
    }
    for (field, value) in &entry.columns {
        let column = parse_column(kind, field, value)?;
        if !layout.set_column(field, column) {
            return Err(StandardsError::UnknownField {
                source_key: kind.key().to_string(),
                field: field.clone(),
            });
        }
    }
    if let Some(contains_ec) = entry.contains_ec {
        layout
            .rules
            .retain(|rule| !matches!(rule, MatchRule::Contains { key: CandidateKey::Ec, .. }));
        if contains_ec {
            layout.rules.push(MatchRule::Contains {
                key: CandidateKey::Ec,
                min_len: 2,
            });
        }
    }
    Ok(())
}
