// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod record;
pub mod text;
pub mod token;

pub use record::LemmaRecord;
pub use text::{CleanedText, FilteredText, LemmaSequence, RawText};
pub use token::{SurfaceForm, Token, TokenSequence};
