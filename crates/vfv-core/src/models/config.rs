//! Configuration structures for the validation pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for vfv.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Outgoing mail configuration.
    pub smtp: SmtpConfig,

    /// Archival of validated documents.
    pub archive: ArchiveConfig,

    /// Which verdicts trigger a notification.
    pub report: ReportConfig,
}

/// SMTP notifier configuration.
///
/// Passed to the notifier at construction; core code never reads
/// credentials from the environment.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    /// Send mail over SMTP. When disabled, notifications go to the log.
    pub enabled: bool,

    /// SMTP relay host.
    pub server: String,

    /// SMTP port (STARTTLS).
    pub port: u16,

    /// Sender address, also used as the login name.
    pub sender_email: String,

    /// Login password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_password: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            server: "smtp.gmail.com".to_string(),
            port: 587,
            sender_email: String::new(),
            sender_password: None,
        }
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("enabled", &self.enabled)
            .field("server", &self.server)
            .field("port", &self.port)
            .field("sender_email", &self.sender_email)
            .field("sender_password", &self.sender_password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Archive configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Directory validated documents are copied into.
    pub dir: PathBuf,

    /// Replace a previously archived file with the same name.
    pub overwrite: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("validated_files"),
            overwrite: true,
        }
    }
}

/// Reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Notify the submitter when a document passes.
    pub notify_on_success: bool,

    /// Notify the submitter when a document fails.
    pub notify_on_failure: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            notify_on_success: true,
            notify_on_failure: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
