use std::path::PathBuf;

use edscreen_core::ScreenResult;
use edscreen_report::OutputPaths;

#[derive(Debug)]
pub struct ScreenOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub result: ScreenResult,
    /// `None` for dry runs.
    pub outputs: Option<OutputPaths>,
}
