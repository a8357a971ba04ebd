// file: src/utils/validation.rs
// description: input validation helpers run before any PDF parsing
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::fs;
use std::path::Path;

const BYTES_PER_MB: u64 = 1_048_576;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn has_pdf_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
    }

    pub fn is_pdf_bytes(bytes: &[u8]) -> bool {
        bytes.starts_with(b"%PDF")
    }

    /// `max_mb == 0` means no limit.
    pub fn validate_file_size(size: u64, max_mb: usize) -> Result<()> {
        let max_bytes = max_mb as u64 * BYTES_PER_MB;
        if max_bytes > 0 && size > max_bytes {
            return Err(PipelineError::Validation(format!(
                "File too large: {} bytes (max {} MB)",
                size, max_mb
            )));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("report.pdf");
        fs::write(&file_path, "%PDF-1.4").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_pdf_extension() {
        assert!(Validator::has_pdf_extension(Path::new("ica2021.pdf")));
        assert!(Validator::has_pdf_extension(Path::new("ICA2021.PDF")));
        assert!(!Validator::has_pdf_extension(Path::new("notes.txt")));
        assert!(!Validator::has_pdf_extension(Path::new("pdf")));
    }

    #[test]
    fn test_pdf_magic_bytes() {
        assert!(Validator::is_pdf_bytes(b"%PDF-1.7\n"));
        assert!(!Validator::is_pdf_bytes(b"PK\x03\x04"));
        assert!(!Validator::is_pdf_bytes(b""));
    }

    #[test]
    fn test_validate_file_size() {
        assert!(Validator::validate_file_size(BYTES_PER_MB, 1).is_ok());
        assert!(Validator::validate_file_size(BYTES_PER_MB + 1, 1).is_err());
        assert!(Validator::validate_file_size(u64::MAX, 0).is_ok());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(Validator::truncate_text("räkenskapsår", 5), "räken...");
    }
}
