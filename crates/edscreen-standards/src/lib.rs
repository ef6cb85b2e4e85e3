#![deny(unsafe_code)]

pub mod classification;
pub mod config;
pub mod defaults;
pub mod error;
pub mod layout;

pub use crate::classification::{ClassificationMapping, HazardCategory};
pub use crate::config::{RunConfig, SourceEntry, SourceSetting, load_run_config};
pub use crate::defaults::{default_layout, default_layouts};
pub use crate::error::StandardsError;
pub use crate::layout::{CandidateKey, KeyColumns, MatchRule, SourceLayout};
