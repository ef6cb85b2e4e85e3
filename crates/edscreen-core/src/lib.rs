//! Screening run: source loading, record merging and derived views.

pub mod classification;
pub mod context;
pub mod merger;
pub mod pipeline;
pub mod run_log;
pub mod sources;
pub mod summary;

pub use classification::{
    ClassificationDeriver, HARMONISED_TYPE, OTHER_CLASSIFICATION, classify_hazard_text,
};
pub use context::RunContext;
pub use merger::{RecordMerger, merge_source};
pub use pipeline::{ScreenResult, SourceReport, run_screen, screen};
pub use run_log::{RunEvent, RunLog, RunLogEntry};
pub use sources::{LoadedSource, RunSource, SourceLoad, load_source_file, load_sources};
pub use summary::{project_summaries, project_summary};
