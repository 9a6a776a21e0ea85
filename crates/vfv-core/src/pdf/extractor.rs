//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// A PDF that opened cleanly, kept as the bytes pdf-extract reads.
struct LoadedPdf {
    pages: usize,
    bytes: Vec<u8>,
}

/// PDF text extractor.
///
/// lopdf opens and (if needed) decrypts the document, pdf-extract turns the
/// resulting bytes into text.
#[derive(Default)]
pub struct PdfExtractor {
    loaded: Option<LoadedPdf>,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a PDF and return its text in one step.
    pub fn text_from_bytes(data: &[u8]) -> Result<String> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        extractor.extract_text()
    }

    fn loaded(&self) -> Result<&LoadedPdf> {
        self.loaded
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()))
    }
}

/// Re-serialize a document decrypted with the empty user password.
fn decrypted_bytes(mut doc: Document) -> Result<Vec<u8>> {
    doc.decrypt("").map_err(|_| PdfError::Encrypted)?;

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PdfError::Parse(format!("cannot re-save decrypted PDF: {e}")))?;
    debug!("Decrypted PDF with empty password");
    Ok(bytes)
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        self.loaded = None;

        let doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;
        let pages = doc.get_pages().len();
        if pages == 0 {
            return Err(PdfError::NoPages);
        }

        let bytes = if doc.is_encrypted() {
            decrypted_bytes(doc)?
        } else {
            data.to_vec()
        };

        debug!("Loaded PDF with {} pages", pages);
        self.loaded = Some(LoadedPdf { pages, bytes });
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.loaded.as_ref().map_or(0, |pdf| pdf.pages as u32)
    }

    fn extract_text(&self) -> Result<String> {
        let pdf = self.loaded()?;
        let text = pdf_extract::extract_text_from_mem(&pdf.bytes)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        debug!("Extracted {} characters from {} pages", text.len(), pdf.pages);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_extractor_is_empty() {
        let extractor = PdfExtractor::new();
        assert!(extractor.loaded.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_extract_without_load_fails() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_text(), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let result = PdfExtractor::text_from_bytes(b"Name: not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    const LINES: [&str; 5] = [
        "Name: john smith",
        "Branch: Main",
        "Vendor Code: AB12CD",
        "Account Number: 1234567890",
        "Date: 2024-01-15",
    ];

    #[test]
    fn test_extracts_text_from_generated_pdf() {
        let data = crate::pdf::test_support::pdf_with_lines(&LINES);

        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();
        assert_eq!(extractor.page_count(), 1);

        let text = extractor.extract_text().unwrap();
        for line in LINES {
            assert!(text.contains(line), "{line:?} not in {text:?}");
        }
    }

    #[test]
    fn test_generated_pdf_yields_every_field() {
        let data = crate::pdf::test_support::pdf_with_lines(&LINES);
        let text = PdfExtractor::text_from_bytes(&data).unwrap();

        let fields = crate::extract::extract_from_text(&text);
        assert!(fields.is_complete(), "missing {:?} in {text:?}", fields.missing());
        assert_eq!(fields.get(crate::Field::Name).as_str(), "John Smith");
        assert_eq!(fields.get(crate::Field::AccountNumber).as_str(), "1234567890");
    }

    #[test]
    fn test_failed_load_clears_previous_state() {
        let mut extractor = PdfExtractor::new();
        extractor
            .load(&crate::pdf::test_support::pdf_with_lines(&LINES))
            .unwrap();
        assert!(extractor.load(b"%PDF-1.4 broken").is_err());
        assert_eq!(extractor.page_count(), 0);
    }
}
