use crate::error::Result;
use crate::summarizer::CodebaseReport;
use log::{error, info};
use std::fs;
use std::path::Path;

pub fn export_report_to_json(report: &CodebaseReport, output_path: &Path) -> Result<()> {
    info!(
        "Exporting report for {} files to JSON: {:?}",
        report.file_count(),
        output_path
    );

    let json = match serde_json::to_string_pretty(report) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize report to JSON: {}", e);
            return Err(e.into());
        }
    };

    match fs::write(output_path, &json) {
        Ok(_) => {
            info!(
                "Successfully wrote {} bytes to {:?}",
                json.len(),
                output_path
            );
            Ok(())
        }
        Err(e) => {
            error!("Failed to write JSON to file {:?}: {}", output_path, e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::{AnalysisResult, FileReport};

    #[test]
    fn test_export_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.json");
        let report = CodebaseReport {
            root: "src".to_string(),
            files: vec![FileReport {
                file_path: "src/app.py".to_string(),
                result: Some(AnalysisResult {
                    summary: "Classes found: App".to_string(),
                    explanation: "...".to_string(),
                }),
                error: None,
            }],
        };

        export_report_to_json(&report, &output).unwrap();

        let written: CodebaseReport =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, report);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("report.json");
        let report = CodebaseReport {
            root: ".".to_string(),
            files: vec![],
        };
        assert!(export_report_to_json(&report, &output).is_err());
    }
}
