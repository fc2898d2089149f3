use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The source text is not valid Python. `line` and `column` are 1-based.
    #[error("SyntaxError: {message} (line {line}, column {column})")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Parser error: {0}")]
    Parser(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SummarizeError {
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, SummarizeError::Syntax { .. })
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
