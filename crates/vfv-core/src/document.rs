//! Uploaded documents and the reader that turns them into extractable content.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::DocumentError;
use crate::pdf::PdfExtractor;
use crate::tabular::{self, TabularRecord};

/// Supported document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Csv,
    Xlsx,
}

impl DocumentKind {
    /// Resolve the kind from a filename's extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, DocumentError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "csv" => Ok(DocumentKind::Csv),
            "xlsx" => Ok(DocumentKind::Xlsx),
            _ => Err(DocumentError::UnsupportedKind(filename.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Csv => "csv",
            DocumentKind::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// An uploaded document: its original filename, type and raw bytes.
#[derive(Debug, Clone)]
pub struct Document {
    filename: String,
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl Document {
    /// Wrap in-memory bytes, resolving the kind from `filename`.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DocumentError> {
        let filename = filename.into();
        let kind = DocumentKind::from_filename(&filename)?;
        Ok(Self {
            filename,
            kind,
            bytes,
        })
    }

    /// Read a document from disk. The filename is the path's last component.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let kind = DocumentKind::from_filename(&filename)?;
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Opened {} ({} bytes, {})", filename, bytes.len(), kind);
        Ok(Self {
            filename,
            kind,
            bytes,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// What a reader produced: free text or the first record of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    Text(String),
    Record(TabularRecord),
}

/// Turns a document into extractable content.
///
/// Tabular readers return only the first data row.
pub trait DocumentReader {
    fn read(&self, document: &Document) -> Result<DocumentContent, DocumentError>;
}

/// Default reader: PDF text via lopdf/pdf-extract, CSV via csv, XLSX via calamine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentReader;

impl DocumentReader for FileDocumentReader {
    fn read(&self, document: &Document) -> Result<DocumentContent, DocumentError> {
        match document.kind() {
            DocumentKind::Pdf => {
                let text = PdfExtractor::text_from_bytes(document.bytes())?;
                if text.trim().is_empty() {
                    warn!("{} contains no extractable text", document.filename());
                }
                Ok(DocumentContent::Text(text))
            }
            DocumentKind::Csv => tabular::csv::read_first_record(document.bytes()).map(DocumentContent::Record),
            DocumentKind::Xlsx => tabular::xlsx::read_first_record(document.bytes()).map(DocumentContent::Record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("vendor.PDF").unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename("a.b.csv").unwrap(), DocumentKind::Csv);
        assert_eq!(DocumentKind::from_filename("sheet.xlsx").unwrap(), DocumentKind::Xlsx);
        assert!(matches!(
            DocumentKind::from_filename("notes.txt"),
            Err(DocumentError::UnsupportedKind(_))
        ));
        assert!(DocumentKind::from_filename("noext").is_err());
    }

    #[test]
    fn test_read_csv_document() {
        let doc = Document::new("upload.csv", b"Name,Branch\njohn smith,Main\n".to_vec()).unwrap();
        let content = FileDocumentReader.read(&doc).unwrap();

        match content {
            DocumentContent::Record(record) => assert_eq!(record.get("Branch"), Some("Main")),
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn test_read_pdf_document() {
        let bytes = crate::pdf::test_support::pdf_with_lines(&["Name:", "jane doe", "Branch: North"]);
        let doc = Document::new("upload.pdf", bytes).unwrap();

        let DocumentContent::Text(text) = FileDocumentReader.read(&doc).unwrap() else {
            panic!("expected text content");
        };
        let fields = crate::extract::extract_from_text(&text);
        assert_eq!(fields.get(crate::Field::Name).as_str(), "Jane Doe");
        assert_eq!(fields.get(crate::Field::Branch).as_str(), "North");
    }

    #[test]
    fn test_read_corrupt_pdf_fails() {
        let doc = Document::new("upload.pdf", b"%PDF-garbage".to_vec()).unwrap();
        assert!(matches!(FileDocumentReader.read(&doc), Err(DocumentError::Pdf(_))));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Document::open(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(DocumentError::Io { .. })));
    }
}
