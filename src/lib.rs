pub mod error;
pub mod parsers;
pub mod source_unit;
pub mod summarizer;
pub mod utils;

pub use error::{Result, SummarizeError};
pub use summarizer::{AnalysisResult, CodebaseReport, FileReport, summarize, summarize_file};

use log::{debug, info};
use std::path::Path;

/// Summarizes every Python file under `root_path` and writes the JSON report.
pub fn analyze_codebase(
    root_path: &Path,
    output_path: &Path,
    num_threads: usize,
) -> Result<CodebaseReport> {
    info!("Starting codebase summarization");
    debug!("Root path: {:?}, Output path: {:?}", root_path, output_path);

    let report = summarizer::summarize_codebase(root_path, num_threads)?;

    info!("Exporting report to JSON at {:?}", output_path);
    utils::export_report_to_json(&report, output_path)?;

    info!(
        "Summarization complete: {} files, {} failed",
        report.file_count(),
        report.failure_count()
    );

    Ok(report)
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
