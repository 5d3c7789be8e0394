//! Document → text seam.
//!
//! Recognising images and PDFs is the job of an external OCR provider. The
//! engine only needs its text, so the shipped extractor accepts documents
//! that already are text and turns away everything else.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Anything that can turn a roster document into plain text.
pub trait TextExtractor {
    fn extract_text(&self, document: &[u8], filename_hint: Option<&str>) -> AppResult<String>;
}

const IMAGE_OR_PDF: [&str; 9] = [
    "pdf", "png", "jpg", "jpeg", "tif", "tiff", "bmp", "gif", "webp",
];

/// Accepts UTF-8 text (an OCR transcription) and normalises line endings.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, document: &[u8], filename_hint: Option<&str>) -> AppResult<String> {
        let name = filename_hint.unwrap_or("<input>");
        let ext = filename_hint
            .and_then(|n| Path::new(n).extension())
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        if let Some(ext) = ext.as_deref()
            && IMAGE_OR_PDF.contains(&ext)
        {
            return Err(AppError::UnsupportedDocument(format!(
                "{name}: .{ext} files need OCR first; pass the extracted text instead"
            )));
        }

        let text = std::str::from_utf8(document)
            .map_err(|_| AppError::UnsupportedDocument(format!("{name}: not UTF-8 text")))?;

        Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
    }
}

/// Read `path` from disk and hand it to `extractor`.
pub fn read_document(path: &Path, extractor: &dyn TextExtractor) -> AppResult<String> {
    let bytes = fs::read(path)?;
    let hint = path.file_name().and_then(|n| n.to_str());
    extractor.extract_text(&bytes, hint)
}
