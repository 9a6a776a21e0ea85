//! One submission, start to finish: read, extract, validate, report.

use serde::Serialize;
use tracing::{info, warn};

use crate::archive::Archiver;
use crate::document::{Document, DocumentReader};
use crate::extract::extract;
use crate::models::fields::{FieldSet, UserDeclaration};
use crate::models::verdict::Verdict;
use crate::notify::Notifier;
use crate::report::{build_verdict, DispatchReport, Reporter};
use crate::validate::validate;

/// Extracted fields and the verdict computed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub fields: FieldSet,
    pub verdict: Verdict,
}

/// Everything a submission produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub dispatch: DispatchReport,
}

/// Read, extract and validate a document without touching collaborators.
///
/// An unreadable document yields an all-absent field set and a verdict that
/// records the failure.
pub fn evaluate(reader: &impl DocumentReader, document: &Document, declaration: &UserDeclaration) -> Evaluation {
    let (fields, extraction_failure) = match reader.read(document) {
        Ok(content) => (extract(&content), None),
        Err(e) => {
            warn!("Error extracting fields from {}: {}", document.filename(), e);
            (FieldSet::blank(), Some(e.to_string()))
        }
    };

    let errors = validate(declaration, &fields);
    let verdict = build_verdict(errors, &fields, extraction_failure);

    info!(
        "Evaluated {}: passed={}, errors={}",
        document.filename(),
        verdict.passed,
        verdict.error_count()
    );
    Evaluation { fields, verdict }
}

/// Processes submissions with a fixed reader and reporter.
pub struct Submission<R, N, A> {
    reader: R,
    reporter: Reporter<N, A>,
}

impl<R: DocumentReader, N: Notifier, A: Archiver> Submission<R, N, A> {
    pub fn new(reader: R, reporter: Reporter<N, A>) -> Self {
        Self { reader, reporter }
    }

    pub fn reporter(&self) -> &Reporter<N, A> {
        &self.reporter
    }

    /// Evaluate a document without dispatching.
    pub fn evaluate(&self, document: &Document, declaration: &UserDeclaration) -> Evaluation {
        evaluate(&self.reader, document, declaration)
    }

    /// Evaluate a document and dispatch the verdict.
    pub fn run(&self, document: &Document, declaration: &UserDeclaration, recipient: Option<&str>) -> SubmissionOutcome {
        let evaluation = self.evaluate(document, declaration);
        let dispatch = self.reporter.dispatch(&evaluation.verdict, document, recipient);
        SubmissionOutcome { evaluation, dispatch }
    }
}
