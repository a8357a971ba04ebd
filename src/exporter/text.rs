// file: src/exporter/text.rs
// description: plain-text writers for raw extracted text and lemma lists

use crate::error::{PipelineError, Result};
use crate::exporter::ensure_parent_dir;
use crate::models::{LemmaSequence, RawText};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn save_raw_text(path: &Path, text: &RawText) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, text.as_str()).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved extracted text to {}", path.display());
    Ok(())
}

/// One lemma per line.
pub fn save_lemma_lines(path: &Path, lemmas: &LemmaSequence) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut content = lemmas.as_slice().join("\n");
    if !content.is_empty() {
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} lemmas to {}", lemmas.len(), path.display());
    Ok(())
}
