use crate::error::Result;
use crate::parsers::common::{get_supported_extensions, is_python_file};
use crate::summarizer::{AnalysisResult, summarize_file};
use log::{debug, error, info, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome for a single file: either a result or the error that stopped it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileReport {
    pub file_path: String,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodebaseReport {
    pub root: String,
    pub files: Vec<FileReport>,
}

impl CodebaseReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn failure_count(&self) -> usize {
        self.files.iter().filter(|f| !f.is_ok()).count()
    }
}

pub fn summarize_codebase(root_path: &Path, num_threads: usize) -> Result<CodebaseReport> {
    info!(
        "Starting parallel summarization of {:?} with {} threads",
        root_path, num_threads
    );

    if !root_path.exists() {
        error!("Path does not exist: {:?}", root_path);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("path does not exist: {}", root_path.display()),
        )
        .into());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;

    info!(
        "Scanning directory for files with extensions {:?}",
        get_supported_extensions()
    );
    let files_to_process = collect_files_to_process(root_path);
    info!("Found {} files to process", files_to_process.len());

    let files: Vec<FileReport> = pool.install(|| {
        files_to_process
            .par_iter()
            .map(|path| summarize_one(path))
            .collect()
    });

    let report = CodebaseReport {
        root: root_path.to_string_lossy().into_owned(),
        files,
    };

    info!(
        "Summarized {} files ({} failed)",
        report.file_count(),
        report.failure_count()
    );
    Ok(report)
}

fn summarize_one(path: &Path) -> FileReport {
    debug!("Processing file: {:?}", path);
    let file_path = path.to_string_lossy().into_owned();

    match summarize_file(path) {
        Ok(result) => FileReport {
            file_path,
            result: Some(result),
            error: None,
        },
        Err(e) => {
            warn!("Could not summarize {:?}: {}", path, e);
            FileReport {
                file_path,
                result: None,
                error: Some(e.to_string()),
            }
        }
    }
}

fn collect_files_to_process(root_path: &Path) -> Vec<PathBuf> {
    let mut visited_files = HashSet::new();
    let mut files_to_process = Vec::new();

    for entry in WalkDir::new(root_path).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if !is_python_file(path) {
            trace!("Skipping unsupported file: {:?}", path);
            continue;
        }

        let canonical_path = match fs::canonicalize(path) {
            Ok(p) => p,
            Err(e) => {
                warn!("Failed to canonicalize path {:?}: {}", path, e);
                continue;
            }
        };

        if !visited_files.insert(canonical_path) {
            trace!("Skipping already visited file: {:?}", path);
            continue;
        }

        files_to_process.push(path.to_path_buf());
    }

    files_to_process.sort();
    files_to_process
}
