// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod nlp;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use config::{Config, InputConfig, LanguageConfig, OutputConfig, OutputFormat};
pub use error::{PipelineError, ResourceKind, Result};
pub use exporter::{JsonExporter, export_record, save_raw_text};
pub use extractor::{ExtractedPdf, PdfExtractor};
pub use models::{
    CleanedText, FilteredText, LemmaRecord, LemmaSequence, RawText, SurfaceForm, Token,
    TokenSequence,
};
pub use nlp::{
    BlankModel, LanguageModel, Lemmatizer, LexiconModel, StopwordFilter, StopwordSet, Tokenizer,
    load_model,
};
pub use parser::TextCleaner;
pub use pipeline::{PipelineOutput, PreprocessPipeline, RunStats, Stage};
pub use utils::{StageTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _cleaner = TextCleaner::new();
    }
}
