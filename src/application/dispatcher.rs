//! Dispatcher
//!
//! Addresses the digest according to the delivery mode and hands it to the
//! messaging provider. Exactly one send per call, no retries at this layer.

use thiserror::Error;

use crate::config::{MessagingSettings, REQUIRED_MESSAGING_VARS};
use crate::domain::DeliveryMode;
use crate::ports::messaging::{MessageSender, OutboundMessage, SendError, SentMessage};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(
        "Missing Twilio env: {} (required: {})",
        missing.join(", "),
        REQUIRED_MESSAGING_VARS.join(", ")
    )]
    MissingSettings { missing: Vec<&'static str> },

    #[error(transparent)]
    Send(#[from] SendError),
}

/// Messaging settings with every required value present
#[derive(Clone)]
pub struct MessagingCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from: String,
    pub to: String,
    pub mode: DeliveryMode,
}

impl MessagingCredentials {
    /// Check that all four required settings are present.
    ///
    /// Pure; performs no I/O.
    pub fn from_settings(settings: &MessagingSettings) -> Result<Self, DispatchError> {
        match (
            &settings.account_sid,
            &settings.auth_token,
            &settings.from,
            &settings.to,
        ) {
            (Some(account_sid), Some(auth_token), Some(from), Some(to)) => Ok(Self {
                account_sid: account_sid.clone(),
                auth_token: auth_token.clone(),
                from: from.clone(),
                to: to.clone(),
                mode: settings.mode,
            }),
            _ => Err(DispatchError::MissingSettings {
                missing: settings.missing(),
            }),
        }
    }
}

/// Sends the digest through a [`MessageSender`]
#[derive(Debug)]
pub struct Dispatcher<M> {
    sender: M,
    from: String,
    to: String,
}

impl<M: MessageSender> Dispatcher<M> {
    /// Dispatcher with addresses already resolved for `mode`
    pub fn new(sender: M, from: &str, to: &str, mode: DeliveryMode) -> Self {
        Self {
            sender,
            from: mode.address(from),
            to: mode.address(to),
        }
    }

    /// Validate `settings`, then build the sender from the credentials.
    ///
    /// `connect` only runs once validation passes, so a missing setting
    /// never reaches the network.
    pub fn from_settings<F, E>(settings: &MessagingSettings, connect: F) -> Result<Self, E>
    where
        F: FnOnce(&MessagingCredentials) -> Result<M, E>,
        E: From<DispatchError>,
    {
        let credentials = MessagingCredentials::from_settings(settings)?;
        let sender = connect(&credentials)?;
        tracing::debug!(
            mode = %credentials.mode,
            "Dispatcher ready"
        );
        Ok(Self::new(
            sender,
            &credentials.from,
            &credentials.to,
            credentials.mode,
        ))
    }

    pub fn from_address(&self) -> &str {
        &self.from
    }

    pub fn to_address(&self) -> &str {
        &self.to
    }

    /// Send `body` to the configured recipient
    pub async fn send_message(&self, body: &str) -> Result<SentMessage, DispatchError> {
        let message = OutboundMessage {
            from: self.from.clone(),
            to: self.to.clone(),
            body: body.to_string(),
        };

        let sent = self.sender.send(&message).await?;
        tracing::info!(sid = %sent.sid, status = %sent.status, to = %self.to, "Message created");
        Ok(sent)
    }
}
