// file: src/models/token.rs
// description: linguistic token produced by a language model
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Anything the stopword filter can test by its surface form.
///
/// Implemented for tokens rather than strings so a filter can never end up
/// iterating the characters of a plain string.
pub trait SurfaceForm {
    fn surface(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: Option<String>,
    pub is_punct: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos: None,
            is_punct: false,
        }
    }

    pub fn punct(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            pos: Some("PUNCT".to_string()),
            is_punct: true,
        }
    }

    pub fn with_pos(mut self, pos: Option<String>) -> Self {
        self.pos = pos;
        self
    }
}

impl SurfaceForm for Token {
    fn surface(&self) -> &str {
        &self.text
    }
}

/// Ordered tokens from one pass of the language model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn surfaces(&self) -> Vec<&str> {
        self.0.iter().map(SurfaceForm::surface).collect()
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punct_token_lemma_is_itself() {
        let token = Token::punct(".");
        assert_eq!(token.lemma, ".");
        assert!(token.is_punct);
        assert_eq!(token.pos.as_deref(), Some("PUNCT"));
    }

    #[test]
    fn test_surfaces_preserve_order() {
        let tokens: TokenSequence = ["Vi", "och", "Vi"]
            .iter()
            .map(|w| Token::new(*w, *w))
            .collect();
        assert_eq!(tokens.surfaces(), vec!["Vi", "och", "Vi"]);
    }
}
