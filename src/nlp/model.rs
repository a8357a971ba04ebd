// file: src/nlp/model.rs
// description: language models resolved by name from a model directory
// reference: https://docs.rs/csv

use crate::error::{PipelineError, ResourceKind, Result};
use crate::models::{Token, TokenSequence};
use crate::nlp::tokenizer::{Piece, split_words};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

pub const LEXICON_FILE: &str = "lemmas.tsv";
pub const BLANK_PREFIX: &str = "blank:";

/// Tokenization plus lemma annotation for one language.
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;

    fn analyze(&self, text: &str) -> TokenSequence;
}

/// Resolves `name` to a model. `blank:<lang>` needs no files; any other name
/// must exist as `<model_dir>/<name>/lemmas.tsv`.
pub fn load_model(name: &str, model_dir: &Path) -> Result<Arc<dyn LanguageModel>> {
    if let Some(lang) = name.strip_prefix(BLANK_PREFIX) {
        info!("Using blank tokenizer-only model for '{}'", lang);
        return Ok(Arc::new(BlankModel::new(lang)));
    }

    let model = LexiconModel::load(name, &model_dir.join(name))?;
    Ok(Arc::new(model))
}

/// Tokenizer without a lexicon; every lemma equals its surface form.
#[derive(Debug, Clone)]
pub struct BlankModel {
    name: String,
}

impl BlankModel {
    pub fn new(lang: &str) -> Self {
        Self {
            name: format!("{}{}", BLANK_PREFIX, lang),
        }
    }
}

impl LanguageModel for BlankModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, text: &str) -> TokenSequence {
        split_words(text)
            .into_iter()
            .map(|piece| match piece {
                Piece::Word(word) => Token::new(word, word),
                Piece::Punct(punct) => Token::punct(punct),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LexiconEntry {
    lemma: String,
    pos: Option<String>,
}

/// Lookup lemmatizer backed by a `form<TAB>lemma[<TAB>pos]` table.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    name: String,
    entries: FxHashMap<String, LexiconEntry>,
}

impl LexiconModel {
    pub fn load(name: &str, dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PipelineError::ResourceMissing {
                kind: ResourceKind::LanguageModel,
                path: dir.to_path_buf(),
            });
        }

        let lexicon_path = dir.join(LEXICON_FILE);
        if !lexicon_path.is_file() {
            return Err(PipelineError::ResourceMissing {
                kind: ResourceKind::LanguageModel,
                path: lexicon_path,
            });
        }

        let entries = read_lexicon(&lexicon_path)?;
        info!(
            "Loaded language model '{}' with {} lexicon entries",
            name,
            entries.len()
        );

        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }

    pub fn from_entries<'a>(
        name: &str,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(form, lemma)| {
                (
                    form.to_string(),
                    LexiconEntry {
                        lemma: lemma.to_string(),
                        pos: None,
                    },
                )
            })
            .collect();

        Self {
            name: name.to_string(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
    }
}

impl LanguageModel for LexiconModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, text: &str) -> TokenSequence {
        split_words(text)
            .into_iter()
            .map(|piece| match piece {
                Piece::Word(word) => match self.lookup(word) {
                    Some(entry) => Token::new(word, entry.lemma.as_str()).with_pos(entry.pos.clone()),
                    None => Token::new(word, word),
                },
                Piece::Punct(punct) => Token::punct(punct),
            })
            .collect()
    }
}

fn read_lexicon(path: &Path) -> Result<FxHashMap<String, LexiconEntry>> {
    let malformed = |line: usize, message: String| PipelineError::MalformedResource {
        path: PathBuf::from(path),
        line,
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|e| malformed(0, e.to_string()))?;

    let mut entries = FxHashMap::default();

    for record in reader.records() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
            malformed(line, e.to_string())
        })?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let form = record.get(0).map(str::trim).unwrap_or_default();
        let lemma = record.get(1).map(str::trim).unwrap_or_default();

        if form.is_empty() && lemma.is_empty() {
            continue;
        }

        if form.is_empty() || lemma.is_empty() {
            return Err(malformed(
                line,
                "expected tab-separated form and lemma".to_string(),
            ));
        }

        let pos = record
            .get(2)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        entries.insert(
            form.to_string(),
            LexiconEntry {
                lemma: lemma.to_string(),
                pos,
            },
        );
    }

    debug!("Read {} lexicon rows from {}", entries.len(), path.display());
    Ok(entries)
}
