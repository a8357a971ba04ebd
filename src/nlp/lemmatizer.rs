// file: src/nlp/lemmatizer.rs
// description: final stage re-analyzing filtered text into lemmas
// reference: stage boundary over the injected language model

use crate::error::Result;
use crate::models::{FilteredText, LemmaSequence};
use crate::nlp::model::LanguageModel;
use crate::pipeline::Stage;
use std::sync::Arc;

/// Stage 5. Filtering flattened the tokens to a string, so lemmas come from
/// a fresh analysis of that string rather than from the stage 3 tokens.
#[derive(Clone)]
pub struct Lemmatizer {
    model: Arc<dyn LanguageModel>,
}

impl Lemmatizer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }
}

impl Stage for Lemmatizer {
    type Input = FilteredText;
    type Output = LemmaSequence;

    fn name(&self) -> &'static str {
        "lemmatize"
    }

    fn run(&self, input: FilteredText) -> Result<LemmaSequence> {
        Ok(self
            .model
            .analyze(input.as_str())
            .iter()
            .map(|token| token.lemma.clone())
            .collect())
    }
}
