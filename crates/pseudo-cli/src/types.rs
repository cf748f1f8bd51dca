use std::path::PathBuf;

use pseudo_transform::AnonymizationReport;

#[derive(Debug)]
pub struct AnonymizeResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report: AnonymizationReport,
}

#[derive(Debug)]
pub struct GenerateResult {
    pub output: PathBuf,
    pub rows: usize,
    pub columns: Vec<String>,
}
