// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PDF text cannot be extracted from {path}: {reason}")]
    ExtractionDenied { path: PathBuf, reason: String },

    #[error("{kind} not found at {path}")]
    ResourceMissing { kind: ResourceKind, path: PathBuf },

    #[error("Malformed PDF {path}: {message}")]
    MalformedInput { path: PathBuf, message: String },

    #[error("Malformed resource {path} (line {line}): {message}")]
    MalformedResource {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// External resources the pipeline loads before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    StopwordList,
    LanguageModel,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::StopwordList => write!(f, "Stopword list"),
            ResourceKind::LanguageModel => write!(f, "Language model"),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_missing_message() {
        let err = PipelineError::ResourceMissing {
            kind: ResourceKind::StopwordList,
            path: PathBuf::from("stoppord.csv"),
        };
        assert_eq!(err.to_string(), "Stopword list not found at stoppord.csv");
    }

    #[test]
    fn test_extraction_denied_message() {
        let err = PipelineError::ExtractionDenied {
            path: PathBuf::from("report.pdf"),
            reason: "copying is not permitted".to_string(),
        };
        assert!(err.to_string().contains("report.pdf"));
        assert!(err.to_string().contains("not permitted"));
    }
}
