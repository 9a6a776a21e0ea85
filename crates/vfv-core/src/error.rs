//! Error types for the vfv-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the vfv library.
#[derive(Error, Debug)]
pub enum VfvError {
    /// The uploaded document could not be read.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Notification delivery failed.
    #[error("notification error: {0}")]
    Notify(#[from] NotifyError),

    /// Archival of a validated document failed.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning an uploaded document into text or a record.
///
/// Only total unreadability ends up here. Malformed field content is a
/// validation outcome, never a document error.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension is not one of pdf, csv or xlsx.
    #[error("unsupported document type: {0}")]
    UnsupportedKind(String),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// The CSV source could not be parsed.
    #[error("failed to parse CSV: {0}")]
    Csv(String),

    /// The spreadsheet could not be opened or has no usable sheet.
    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    /// The document could not be opened.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised by a notifier.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Sender or recipient is not a valid mailbox.
    #[error("invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    /// The message could not be assembled.
    #[error("failed to build message: {0}")]
    Message(String),

    /// The transport rejected or failed to deliver the message.
    #[error("delivery failed: {0}")]
    Transport(String),
}

/// Errors raised by an archiver.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The original filename has no usable file name component.
    #[error("invalid filename: '{0}'")]
    InvalidFilename(String),

    /// Target exists and overwriting is disabled.
    #[error("archived file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Writing the archive failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the vfv library.
pub type Result<T> = std::result::Result<T, VfvError>;
