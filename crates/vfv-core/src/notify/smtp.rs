//! SMTP notifier using lettre.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use tracing::{debug, info};

use super::{Notifier, Result};
use crate::error::NotifyError;
use crate::models::config::SmtpConfig;

/// Sends plain-text mail through a STARTTLS relay.
pub struct SmtpNotifier {
    sender: Mailbox,
    transport: SmtpTransport,
}

impl SmtpNotifier {
    /// Build a notifier from explicit configuration.
    ///
    /// The sender address doubles as the login name when a password is set.
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let sender = parse_mailbox(&config.sender_email)?;

        let mut builder = SmtpTransport::starttls_relay(&config.server)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .port(config.port);

        if let Some(password) = &config.sender_password {
            builder = builder.credentials(Credentials::new(
                config.sender_email.clone(),
                password.clone(),
            ));
        }

        debug!("SMTP notifier for {}:{}", config.server, config.port);
        Ok(Self {
            sender,
            transport: builder.build(),
        })
    }

    fn build_message(&self, recipient: &str, subject: &str, body: &str) -> Result<Message> {
        Message::builder()
            .from(self.sender.clone())
            .to(parse_mailbox(recipient)?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Message(e.to_string()))
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        let message = self.build_message(recipient, subject, body)?;
        self.transport
            .send(&message)
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        info!("Email sent to {}", recipient);
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address.trim().parse().map_err(|e: lettre::address::AddressError| NotifyError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}
