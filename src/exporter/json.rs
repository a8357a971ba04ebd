// file: src/exporter/json.rs
// description: json export of a lemma run record

use crate::error::Result;
use crate::exporter::ensure_parent_dir;
use crate::models::LemmaRecord;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_path: output_path.into(),
            pretty,
        }
    }

    pub fn export(&self, record: &LemmaRecord) -> Result<()> {
        ensure_parent_dir(&self.output_path)?;

        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };

        fs::write(&self.output_path, json)?;
        info!(
            "Wrote {} lemmas to {}",
            record.lemmas.len(),
            self.output_path.display()
        );
        Ok(())
    }
}
