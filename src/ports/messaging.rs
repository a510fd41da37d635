use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("Messaging provider rejected message (HTTP {status}, code {code:?}): {message}")]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Messaging request failed: {0}")]
    Transport(String),

    #[error("Failed to parse messaging response: {0}")]
    Parse(String),
}

/// Fully addressed message, ready for the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub body: String,
}

/// Provider acknowledgement for a created message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub sid: String,
    pub status: String,
}

/// Outbound messaging channel. One call creates exactly one message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<SentMessage, SendError>;
}
