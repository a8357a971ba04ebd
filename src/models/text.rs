// file: src/models/text.rs
// description: typed text artifacts handed between pipeline stages
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Text of every page in document order, as the PDF crate produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText(String);

/// Output of the cleaner: only ASCII letters, digits, whitespace, `.` and `-`,
/// single-spaced and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText(String);

/// Surviving surface forms joined by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredText(String);

/// Terminal pipeline output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LemmaSequence(Vec<String>);

macro_rules! text_artifact {
    ($name:ident) => {
        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn char_count(&self) -> usize {
                self.0.chars().count()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_artifact!(RawText);
text_artifact!(CleanedText);
text_artifact!(FilteredText);

impl LemmaSequence {
    pub fn new(lemmas: Vec<String>) -> Self {
        Self(lemmas)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl FromIterator<String> for LemmaSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
