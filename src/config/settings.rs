//! Environment Settings
//!
//! Credentials, addresses and the symbol list come from the process
//! environment (or a `.env` file loaded by the binary). They are read once
//! into [`Settings`] and handed to the components from there.

use std::fmt;

use crate::domain::{parse_symbol_list, DeliveryMode};

use super::loader::ConfigError;

pub const ALPHA_VANTAGE_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";
pub const TWILIO_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const TWILIO_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const TWILIO_PHONE_NUMBER: &str = "TWILIO_PHONE_NUMBER";
pub const MY_PHONE_NUMBER: &str = "MY_PHONE_NUMBER";
pub const DELIVERY_MODE: &str = "DELIVERY_MODE";
pub const STOCK_SYMBOLS: &str = "STOCK_SYMBOLS";

/// The four messaging settings a send cannot do without, in report order
pub const REQUIRED_MESSAGING_VARS: [&str; 4] = [
    TWILIO_ACCOUNT_SID,
    TWILIO_AUTH_TOKEN,
    TWILIO_PHONE_NUMBER,
    MY_PHONE_NUMBER,
];

/// Everything one run needs from the environment
#[derive(Clone)]
pub struct Settings {
    pub alpha_vantage_api_key: String,
    pub messaging: MessagingSettings,
    pub symbols: Vec<String>,
}

/// Messaging credentials and addresses.
///
/// Kept optional here; the dispatcher decides whether a send can proceed.
#[derive(Clone, Default)]
pub struct MessagingSettings {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub mode: DeliveryMode,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Empty values count as unset. Only the API key is mandatory at this
    /// stage.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let alpha_vantage_api_key =
            get(ALPHA_VANTAGE_API_KEY).ok_or(ConfigError::MissingVar(ALPHA_VANTAGE_API_KEY))?;

        let mode = match get(DELIVERY_MODE) {
            None => DeliveryMode::Sms,
            Some(raw) => DeliveryMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown {} '{}', falling back to {}",
                    DELIVERY_MODE,
                    raw,
                    DeliveryMode::Sms
                );
                DeliveryMode::Sms
            }),
        };

        let messaging = MessagingSettings {
            account_sid: get(TWILIO_ACCOUNT_SID),
            auth_token: get(TWILIO_AUTH_TOKEN),
            from: get(TWILIO_PHONE_NUMBER),
            to: get(MY_PHONE_NUMBER),
            mode,
        };

        let symbols = parse_symbol_list(lookup(STOCK_SYMBOLS).as_deref());

        Ok(Self {
            alpha_vantage_api_key,
            messaging,
            symbols,
        })
    }

    /// Replace the symbol list with a command-line override
    pub fn with_symbol_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            self.symbols = parse_symbol_list(Some(raw));
        }
        self
    }
}

impl MessagingSettings {
    /// Names of the required messaging variables that are unset
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (TWILIO_ACCOUNT_SID, &self.account_sid),
            (TWILIO_AUTH_TOKEN, &self.auth_token),
            (TWILIO_PHONE_NUMBER, &self.from),
            (MY_PHONE_NUMBER, &self.to),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn redact(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "<set>"
    } else {
        "<unset>"
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("alpha_vantage_api_key", &"<set>")
            .field("messaging", &self.messaging)
            .field("symbols", &self.symbols)
            .finish()
    }
}

impl fmt::Debug for MessagingSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessagingSettings")
            .field("account_sid", &redact(&self.account_sid))
            .field("auth_token", &redact(&self.auth_token))
            .field("from", &self.from)
            .field("to", &self.to)
            .field("mode", &self.mode)
            .finish()
    }
}
