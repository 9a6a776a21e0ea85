//! Verdict building and dispatch to the notifier and archiver.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::archive::Archiver;
use crate::document::Document;
use crate::models::config::ReportConfig;
use crate::models::fields::FieldSet;
use crate::models::verdict::{ValidationError, Verdict};
use crate::notify::Notifier;

pub const FAILURE_SUBJECT: &str = "Validation Errors Detected";
pub const SUCCESS_SUBJECT: &str = "File Validated Successfully";
pub const SUCCESS_BODY: &str = "Your file has been successfully validated and stored!";

/// Combine validator output with the missing-field summary into a verdict.
///
/// When any field is absent, one [`ValidationError::MissingSummary`] is
/// appended after the validator's errors, on top of the individual
/// missing-field entries already present.
pub fn build_verdict(
    mut errors: Vec<ValidationError>,
    extracted: &FieldSet,
    extraction_failure: Option<String>,
) -> Verdict {
    let missing = extracted.missing();
    if !missing.is_empty() {
        warn!("Missing values in file: {:?}", missing);
        errors.push(ValidationError::MissingSummary { fields: missing });
    }

    Verdict {
        passed: errors.is_empty() && extraction_failure.is_none(),
        errors,
        extraction_failure,
    }
}

/// Body of the failure notification.
pub fn failure_body(verdict: &Verdict) -> String {
    format!("Errors found: {}", verdict.messages().join("\n"))
}

/// What happened to one collaborator step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Completed { detail: String },
    Skipped { reason: String },
    Failed { error: String },
}

impl StepOutcome {
    fn skipped(reason: &str) -> Self {
        StepOutcome::Skipped {
            reason: reason.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }
}

/// Results of handing a verdict to the collaborators.
///
/// Collaborator failures end up here; they never alter the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub archive: StepOutcome,
    pub notification: StepOutcome,
}

/// Hands verdicts to the notifier and, for passing documents, the archiver.
pub struct Reporter<N, A> {
    notifier: N,
    archiver: A,
    config: ReportConfig,
}

impl<N: Notifier, A: Archiver> Reporter<N, A> {
    pub fn new(notifier: N, archiver: A) -> Self {
        Self {
            notifier,
            archiver,
            config: ReportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn archiver(&self) -> &A {
        &self.archiver
    }

    /// Dispatch a verdict.
    ///
    /// Failed: notify with every error, skip archival. Passed: archive the
    /// document, then send the success notification.
    pub fn dispatch(&self, verdict: &Verdict, document: &Document, recipient: Option<&str>) -> DispatchReport {
        if !verdict.passed {
            info!("{} failed validation with {} errors", document.filename(), verdict.error_count());
            let notification = if self.config.notify_on_failure {
                self.send(recipient, FAILURE_SUBJECT, &failure_body(verdict))
            } else {
                StepOutcome::skipped("failure notifications disabled")
            };
            return DispatchReport {
                archive: StepOutcome::skipped("validation failed"),
                notification,
            };
        }

        info!("{} passed validation", document.filename());
        let archive = match self.archiver.store(document.bytes(), document.filename()) {
            Ok(path) => StepOutcome::Completed {
                detail: path.display().to_string(),
            },
            Err(e) => {
                error!("Error saving file: {}", e);
                StepOutcome::Failed { error: e.to_string() }
            }
        };

        let notification = if self.config.notify_on_success {
            self.send(recipient, SUCCESS_SUBJECT, SUCCESS_BODY)
        } else {
            StepOutcome::skipped("success notifications disabled")
        };

        DispatchReport { archive, notification }
    }

    fn send(&self, recipient: Option<&str>, subject: &str, body: &str) -> StepOutcome {
        let Some(recipient) = recipient.map(str::trim).filter(|r| !r.is_empty()) else {
            warn!("No recipient given, skipping notification '{}'", subject);
            return StepOutcome::skipped("no recipient");
        };

        match self.notifier.notify(recipient, subject, body) {
            Ok(()) => StepOutcome::Completed {
                detail: format!("sent to {recipient}"),
            },
            Err(e) => {
                error!("Error sending notification to {}: {}", recipient, e);
                StepOutcome::Failed { error: e.to_string() }
            }
        }
    }
}
