pub mod body;
pub mod classifier;
pub mod processor;
pub mod renderer;

pub use classifier::classify_declarations;
pub use processor::{CodebaseReport, FileReport, summarize_codebase};
pub use renderer::{render_explanation, render_summary};

use crate::error::Result;
use crate::source_unit::SourceUnit;
use log::{debug, error, trace};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The two texts produced for one script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub summary: String,
    pub explanation: String,
}

/// Parses `source` and renders its summary and explanation. Syntax errors are
/// returned as-is; nothing is rendered for a script that does not parse.
pub fn summarize(source: &str) -> Result<AnalysisResult> {
    trace!("Summarizing {} bytes of source", source.len());
    let unit = SourceUnit::parse(source)?;
    Ok(summarize_unit(&unit))
}

pub fn summarize_unit(unit: &SourceUnit) -> AnalysisResult {
    let declarations = classify_declarations(unit);

    AnalysisResult {
        summary: render_summary(&declarations),
        explanation: render_explanation(&declarations),
    }
}

pub fn summarize_file(file_path: &Path) -> Result<AnalysisResult> {
    let content = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read file {:?}: {}", file_path, e);
            return Err(e.into());
        }
    };

    let result = summarize(&content)?;
    debug!("Summarized {:?}", file_path);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummarizeError;

    #[test]
    fn test_summarize_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.py");
        fs::write(&path, "def add(a, b):\n    return a + b\n").unwrap();

        let result = summarize_file(&path).unwrap();
        assert_eq!(result.summary, "Functions found: add");
    }

    #[test]
    fn test_summarize_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = summarize_file(&dir.path().join("absent.py")).unwrap_err();
        assert!(matches!(err, SummarizeError::Io(_)));
    }

    #[test]
    fn test_summarize_unit_matches_summarize() {
        let source = "class Foo:\n    pass\n";
        let unit = SourceUnit::parse(source).unwrap();
        assert_eq!(summarize_unit(&unit), summarize(source).unwrap());
    }
}
