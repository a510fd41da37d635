//! Delivery mode and channel addressing.

use std::fmt;

/// Address prefix that routes a Twilio message over WhatsApp
pub const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Addressing convention used for the outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Plain phone numbers
    #[default]
    Sms,
    /// Channel-prefixed addresses (`whatsapp:+1555...`)
    WhatsApp,
}

impl DeliveryMode {
    /// Parse a configured mode, case-insensitive.
    ///
    /// Returns `None` for unrecognised values so the caller can decide how
    /// loudly to fall back.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sms" => Some(DeliveryMode::Sms),
            "whatsapp" => Some(DeliveryMode::WhatsApp),
            _ => None,
        }
    }

    /// Apply this mode's addressing convention to a raw address.
    ///
    /// WhatsApp adds the channel prefix unless it is already there; SMS
    /// leaves the address untouched.
    pub fn address(&self, raw: &str) -> String {
        match self {
            DeliveryMode::Sms => raw.to_string(),
            DeliveryMode::WhatsApp if raw.starts_with(WHATSAPP_PREFIX) => raw.to_string(),
            DeliveryMode::WhatsApp => format!("{}{}", WHATSAPP_PREFIX, raw),
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryMode::Sms => write!(f, "sms"),
            DeliveryMode::WhatsApp => write!(f, "whatsapp"),
        }
    }
}
