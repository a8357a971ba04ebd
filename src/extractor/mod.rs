// file: src/extractor/mod.rs
// description: PDF text extraction module exports
// reference: internal module structure

pub mod pdf;

pub use pdf::{ExtractedPdf, PdfExtractor, check_extractable};
