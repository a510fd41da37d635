//! Twilio API Client
//!
//! Creates messages through the Programmable Messaging REST API. The same
//! endpoint serves SMS and WhatsApp; the channel is chosen by the address
//! prefix, which the dispatcher applies before calling in here.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::{MessageResource, TwilioErrorBody};
use crate::config::DEFAULT_TWILIO_API_URL;
use crate::ports::messaging::{MessageSender, OutboundMessage, SendError, SentMessage};

/// Twilio client configuration
#[derive(Clone)]
pub struct TwilioConfig {
    /// API root, without the version segment
    pub api_base_url: String,
    pub account_sid: String,
    pub auth_token: String,
    /// Request timeout, `None` keeps reqwest's default
    pub timeout: Option<Duration>,
}

impl TwilioConfig {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_TWILIO_API_URL.to_string(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            timeout: Some(Duration::from_secs(30)),
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Message-creation endpoint for this account
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base_url.trim_end_matches('/'),
            self.account_sid
        )
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("api_base_url", &self.api_base_url)
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Twilio Messages client
#[derive(Debug, Clone)]
pub struct TwilioClient {
    config: TwilioConfig,
    http: Client,
}

impl TwilioClient {
    pub fn with_config(config: TwilioConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { config, http })
    }

    /// Map a non-success reply to a [`SendError::Rejected`]
    fn rejection(status: u16, body: &str) -> SendError {
        match serde_json::from_str::<TwilioErrorBody>(body) {
            Ok(error) => {
                if let Some(ref more_info) = error.more_info {
                    tracing::debug!(more_info = %more_info, "Twilio error details");
                }
                SendError::Rejected {
                    status,
                    code: error.code,
                    message: error.message.unwrap_or_else(|| body.to_string()),
                }
            }
            Err(_) => SendError::Rejected {
                status,
                code: None,
                message: body.to_string(),
            },
        }
    }
}

#[async_trait]
impl MessageSender for TwilioClient {
    async fn send(&self, message: &OutboundMessage) -> Result<SentMessage, SendError> {
        let params = [
            ("To", message.to.as_str()),
            ("From", message.from.as_str()),
            ("Body", message.body.as_str()),
        ];

        let response = self
            .http
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::rejection(status.as_u16(), &body));
        }

        let resource: MessageResource =
            serde_json::from_str(&body).map_err(|e| SendError::Parse(e.to_string()))?;

        Ok(SentMessage {
            sid: resource.sid,
            status: resource.status.unwrap_or_else(|| "unknown".to_string()),
        })
    }
}
