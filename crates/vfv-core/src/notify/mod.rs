//! Notification collaborators.

#[cfg(feature = "smtp")]
mod smtp;

#[cfg(feature = "smtp")]
pub use smtp::SmtpNotifier;

use tracing::info;

use crate::error::NotifyError;
use crate::models::config::SmtpConfig;

/// Result type for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Delivers a message to a recipient.
///
/// Implementations do not retry; a failure is returned to the caller.
pub trait Notifier {
    fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        (**self).notify(recipient, subject, body)
    }
}

/// Writes notifications to the log instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        info!(recipient, subject, "Notification: {}", body);
        Ok(())
    }
}

/// Pick a notifier for the configuration: SMTP when enabled, the log otherwise.
pub fn notifier_from_config(config: &SmtpConfig) -> crate::Result<Box<dyn Notifier>> {
    if !config.enabled {
        return Ok(Box::new(LogNotifier));
    }

    #[cfg(feature = "smtp")]
    {
        Ok(Box::new(SmtpNotifier::new(config)?))
    }

    #[cfg(not(feature = "smtp"))]
    {
        tracing::warn!("SMTP support not compiled in, notifications go to the log");
        Ok(Box::new(LogNotifier))
    }
}
