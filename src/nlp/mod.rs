// file: src/nlp/mod.rs
// description: language model, tokenization, stopword and lemma stages
// reference: internal module structure

pub mod lemmatizer;
pub mod model;
pub mod stopwords;
pub mod tokenizer;

pub use lemmatizer::Lemmatizer;
pub use model::{BlankModel, LanguageModel, LexiconModel, load_model};
pub use stopwords::{StopwordFilter, StopwordSet};
pub use tokenizer::Tokenizer;
