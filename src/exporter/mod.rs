// file: src/exporter/mod.rs
// description: output writers for extracted text and lemma records
// reference: internal module structure

pub mod json;
pub mod text;

pub use json::JsonExporter;
pub use text::{save_lemma_lines, save_raw_text};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::LemmaRecord;
use std::fs;
use std::path::Path;

pub fn export_record(
    path: &Path,
    format: OutputFormat,
    pretty: bool,
    record: &LemmaRecord,
) -> Result<()> {
    match format {
        OutputFormat::Json => JsonExporter::new(path, pretty).export(record),
        OutputFormat::Text => save_lemma_lines(path, &record.lemmas),
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
