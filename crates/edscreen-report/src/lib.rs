//! Output files of a screening run.
//!
//! - **Results**: one row per substance, every record column
//! - **Summary**: the condensed cross-source view
//! - **Log**: one line per run event
//! - **Manifest**: source fingerprints and statuses

mod frames;
mod writers;

pub use frames::{records_frame, summary_frame};
pub use writers::{
    LOG_FILE, MANIFEST_FILE, Manifest, OutputFormat, OutputPaths, RESULTS_STEM, SUMMARY_STEM,
    write_csv, write_json, write_log, write_outputs,
};
