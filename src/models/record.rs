// file: src/models/record.rs
// description: persisted record of one pipeline run and its lemma output
// reference: internal data structures

use crate::models::LemmaSequence;
use crate::pipeline::RunStats;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub run_id: Uuid,
    pub source_path: String,
    pub source_sha256: String,
    pub processed_at: String,
    pub model: String,
    pub stats: RunStats,
    pub lemmas: LemmaSequence,
}

impl LemmaRecord {
    pub fn new(
        source_path: String,
        source_sha256: String,
        model: String,
        stats: RunStats,
        lemmas: LemmaSequence,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            source_path,
            source_sha256,
            processed_at: Utc::now().to_rfc3339(),
            model,
            stats,
            lemmas,
        }
    }

    pub fn compute_hash(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }
}
