//! Core library for vendor file validation.
//!
//! This crate provides:
//! - Document reading (PDF text, first record of CSV/XLSX)
//! - Extraction of the tracked fields (name, branch, vendor code, account number, date)
//! - Validation against the submitter's declared values and format rules
//! - Verdict reporting through notifier and archiver collaborators

pub mod archive;
pub mod document;
pub mod error;
pub mod extract;
pub mod models;
pub mod notify;
pub mod pdf;
pub mod pipeline;
pub mod report;
pub mod tabular;
pub mod validate;

pub use archive::{Archiver, DirectoryArchiver};
pub use document::{Document, DocumentContent, DocumentKind, DocumentReader, FileDocumentReader};
pub use error::{ArchiveError, DocumentError, NotifyError, PdfError, Result, VfvError};
pub use extract::{extract, extract_from_record, extract_from_text};
pub use models::config::AppConfig;
pub use models::fields::{Field, FieldSet, FieldValue, UserDeclaration};
pub use models::verdict::{ValidationError, Verdict};
pub use notify::{notifier_from_config, LogNotifier, Notifier};
#[cfg(feature = "smtp")]
pub use notify::SmtpNotifier;
pub use pipeline::{evaluate, Evaluation, Submission, SubmissionOutcome};
pub use report::{build_verdict, DispatchReport, Reporter, StepOutcome};
pub use tabular::TabularRecord;
pub use validate::validate;
