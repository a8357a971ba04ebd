// file: src/extractor/pdf.rs
// description: PDF loading, extractability check and page text extraction
// reference: https://docs.rs/lopdf, https://docs.rs/pdf-extract

use crate::error::{PipelineError, Result};
use crate::models::{LemmaRecord, RawText};
use crate::pipeline::Stage;
use crate::utils::Validator;
use lopdf::{Document, Object};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Bit 5 of the `/P` permission flags: copy or otherwise extract content.
const PERMISSION_EXTRACT: i64 = 1 << 4;

const ENCRYPT_KEY: &[u8] = b"/Encrypt";

#[derive(Debug, Clone)]
pub struct ExtractedPdf {
    pub path: PathBuf,
    pub text: RawText,
    pub page_count: usize,
    pub content_hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    max_file_size_mb: usize,
}

impl PdfExtractor {
    pub fn new(max_file_size_mb: usize) -> Self {
        Self { max_file_size_mb }
    }

    pub fn extract(&self, path: &Path) -> Result<ExtractedPdf> {
        Validator::validate_file_path(path)?;
        if !Validator::has_pdf_extension(path) {
            warn!("Input {} does not have a .pdf extension", path.display());
        }

        let bytes = fs::read(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        Validator::validate_file_size(bytes.len() as u64, self.max_file_size_mb)?;

        if !Validator::is_pdf_bytes(&bytes) {
            return Err(PipelineError::MalformedInput {
                path: path.to_path_buf(),
                message: "missing %PDF header".to_string(),
            });
        }

        let document = Document::load_mem(&bytes).map_err(|e| load_error(path, &bytes, e))?;

        check_extractable(&document)
            .and_then(|()| check_opens_without_password(&document))
            .map_err(|reason| PipelineError::ExtractionDenied {
                path: path.to_path_buf(),
                reason,
            })?;

        let page_count = document.get_pages().len();
        let content_hash = LemmaRecord::compute_hash(&bytes);

        let text = if page_count == 0 {
            debug!("{} has no pages", path.display());
            String::new()
        } else {
            extract_text(&bytes).map_err(|message| PipelineError::MalformedInput {
                path: path.to_path_buf(),
                message,
            })?
        };

        info!(
            "Extracted {} characters from {} page(s) of {}",
            text.chars().count(),
            page_count,
            path.display()
        );

        Ok(ExtractedPdf {
            path: path.to_path_buf(),
            text: RawText::new(text),
            page_count,
            content_hash,
        })
    }
}

impl Stage for PdfExtractor {
    type Input = PathBuf;
    type Output = ExtractedPdf;

    fn name(&self) -> &'static str {
        "extract"
    }

    fn run(&self, input: PathBuf) -> Result<ExtractedPdf> {
        self.extract(&input)
    }
}

/// pdf-extract panics on some malformed content streams instead of
/// returning an error.
fn extract_text(bytes: &[u8]) -> std::result::Result<String, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown cause".to_string());
            Err(format!("text extraction failed on malformed content: {}", detail))
        }
    }
}

/// An encrypted document that cannot be opened cannot be extracted either.
fn load_error(path: &Path, bytes: &[u8], err: lopdf::Error) -> PipelineError {
    let message = err.to_string();
    let lowered = message.to_lowercase();
    let has_encrypt_entry = bytes.windows(ENCRYPT_KEY.len()).any(|w| w == ENCRYPT_KEY);

    if has_encrypt_entry || lowered.contains("crypt") || lowered.contains("password") {
        PipelineError::ExtractionDenied {
            path: path.to_path_buf(),
            reason: message,
        }
    } else {
        PipelineError::MalformedInput {
            path: path.to_path_buf(),
            message,
        }
    }
}

/// Unencrypted documents are always extractable. Encrypted ones must carry a
/// `/P` entry granting content extraction.
pub fn check_extractable(document: &Document) -> std::result::Result<(), String> {
    let Ok(encrypt) = document.trailer.get(b"Encrypt") else {
        return Ok(());
    };

    let dict = match encrypt {
        Object::Reference(id) => document
            .get_dictionary(*id)
            .map_err(|e| format!("unreadable /Encrypt dictionary: {}", e))?,
        Object::Dictionary(dict) => dict,
        _ => return Err("invalid /Encrypt entry".to_string()),
    };

    let permissions = dict
        .get(b"P")
        .and_then(Object::as_i64)
        .map_err(|_| "encrypted document without /P permissions".to_string())?;

    if permissions & PERMISSION_EXTRACT == 0 {
        return Err("document permissions do not allow text extraction".to_string());
    }

    Ok(())
}

/// lopdf loads encrypted documents without decrypting them, so the empty
/// user password is tried here before any text is read.
fn check_opens_without_password(document: &Document) -> std::result::Result<(), String> {
    if document.trailer.get(b"Encrypt").is_err() {
        return Ok(());
    }

    document
        .clone()
        .decrypt("")
        .map_err(|e| format!("document cannot be opened without a password: {}", e))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};
    use std::path::Path;

    /// Single-page document showing `text` in Courier.
    pub fn text_pdf(text: &str) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    pub fn empty_pdf() -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    /// Marks `doc` as encrypted with the given `/P` flags.
    pub fn with_permissions(mut doc: Document, permissions: i64) -> Document {
        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "P" => permissions,
        });
        doc.trailer.set("Encrypt", encrypt_id);
        doc
    }

    /// Drops every `/Resources` entry, leaving `/F1` undefined.
    pub fn without_resources(mut doc: Document) -> Document {
        for object in doc.objects.values_mut() {
            if let Object::Dictionary(dict) = object
                && dict.has(b"Resources")
            {
                dict.set("Resources", dictionary! {});
            }
        }
        doc
    }

    pub fn save(mut doc: Document, path: &Path) {
        doc.save(path).expect("fixture pdf saves");
    }
}
