//! Twilio Adapter
//!
//! Implementation of the MessageSender port for Twilio SMS and WhatsApp.

mod client;
mod types;

pub use client::{TwilioClient, TwilioConfig};
pub use types::{MessageResource, TwilioErrorBody};
