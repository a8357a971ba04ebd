// file: src/nlp/tokenizer.rs
// description: rule-based word splitting and the tokenization stage
// reference: stage boundary over the injected language model

use crate::error::Result;
use crate::models::{CleanedText, TokenSequence};
use crate::nlp::model::LanguageModel;
use crate::pipeline::Stage;
use std::sync::Arc;

/// A surface span produced by [`split_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Word(&'a str),
    Punct(&'a str),
}

/// Splits on whitespace, then peels leading and trailing punctuation off each
/// chunk. A run of one repeated punctuation character stays together, so
/// `"end..."` gives `end` and `...`. Periods and hyphens inside a word are
/// kept (`3.5`, `well-known`).
pub fn split_words(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();

    for chunk in text.split_whitespace() {
        let Some(start) = chunk.find(|c: char| c.is_alphanumeric()) else {
            push_punct_runs(chunk, &mut pieces);
            continue;
        };

        let end = chunk
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(chunk.len());

        push_punct_runs(&chunk[..start], &mut pieces);
        pieces.push(Piece::Word(&chunk[start..end]));
        push_punct_runs(&chunk[end..], &mut pieces);
    }

    pieces
}

fn push_punct_runs<'a>(text: &'a str, pieces: &mut Vec<Piece<'a>>) {
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let run_len = rest
            .char_indices()
            .find(|(_, c)| *c != first)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        pieces.push(Piece::Punct(&rest[..run_len]));
        rest = &rest[run_len..];
    }
}

/// Stage 3: analyzes cleaned text with the shared language model.
#[derive(Clone)]
pub struct Tokenizer {
    model: Arc<dyn LanguageModel>,
}

impl Tokenizer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }
}

impl Stage for Tokenizer {
    type Input = CleanedText;
    type Output = TokenSequence;

    fn name(&self) -> &'static str {
        "tokenize"
    }

    fn run(&self, input: CleanedText) -> Result<TokenSequence> {
        Ok(self.model.analyze(input.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::model::BlankModel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_words("Vi  läser\tårsredovisningen"),
            vec![
                Piece::Word("Vi"),
                Piece::Word("läser"),
                Piece::Word("årsredovisningen"),
            ]
        );
    }

    #[test]
    fn test_split_trailing_period() {
        assert_eq!(
            split_words("Revenue grew."),
            vec![Piece::Word("Revenue"), Piece::Word("grew"), Piece::Punct(".")]
        );
    }

    #[test]
    fn test_internal_punctuation_kept() {
        assert_eq!(
            split_words("3.5 well-known -x"),
            vec![
                Piece::Word("3.5"),
                Piece::Word("well-known"),
                Piece::Punct("-"),
                Piece::Word("x"),
            ]
        );
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(
            split_words("end...- --"),
            vec![
                Piece::Word("end"),
                Piece::Punct("..."),
                Piece::Punct("-"),
                Piece::Punct("--"),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_stage_uses_model() {
        let tokenizer = Tokenizer::new(Arc::new(BlankModel::new("sv")));
        let tokens = tokenizer.run(CleanedText::new("Vi läser.")).unwrap();
        assert_eq!(tokens.surfaces(), vec!["Vi", "läser", "."]);
        assert!(tokens.as_slice()[2].is_punct);
    }
}
