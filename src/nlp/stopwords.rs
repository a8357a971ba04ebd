// file: src/nlp/stopwords.rs
// description: stopword list loading and the stopword filtering stage
// reference: https://docs.rs/csv

use crate::error::{PipelineError, ResourceKind, Result};
use crate::models::{FilteredText, SurfaceForm, TokenSequence};
use crate::pipeline::Stage;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{debug, info};

/// Stopwords as listed in the resource. Entries are stored verbatim; only the
/// token side is lowercased when testing membership.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Reads the first column of every non-empty row of a headerless CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PipelineError::ResourceMissing {
                kind: ResourceKind::StopwordList,
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| PipelineError::MalformedResource {
                path: path.to_path_buf(),
                line: 0,
                message: e.to_string(),
            })?;

        let mut words = FxHashSet::default();
        for record in reader.records() {
            let record = record.map_err(|e| PipelineError::MalformedResource {
                path: path.to_path_buf(),
                line: e.position().map(|p| p.line() as usize).unwrap_or(0),
                message: e.to_string(),
            })?;

            if let Some(word) = record.get(0).filter(|w| !w.is_empty()) {
                words.insert(word.to_string());
            }
        }

        info!("Loaded {} stopwords from {}", words.len(), path.display());
        Ok(Self { words })
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Stage 4: drops stopwords and flattens the survivors back to text.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: StopwordSet,
}

impl StopwordFilter {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn filter<T: SurfaceForm>(&self, items: &[T]) -> FilteredText {
        let kept: Vec<&str> = items
            .iter()
            .map(SurfaceForm::surface)
            .filter(|surface| !self.stopwords.is_stopword(surface))
            .collect();

        debug!("Kept {} of {} tokens", kept.len(), items.len());
        FilteredText::new(kept.join(" "))
    }
}

impl Stage for StopwordFilter {
    type Input = TokenSequence;
    type Output = FilteredText;

    fn name(&self) -> &'static str {
        "remove stopwords"
    }

    fn run(&self, input: TokenSequence) -> Result<FilteredText> {
        Ok(self.filter(input.as_slice()))
    }
}
