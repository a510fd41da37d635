//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, these traits abstract:
//! - The market data provider (one quote per call)
//! - The messaging provider (one outbound message per call)

pub mod quotes;
pub mod messaging;

pub use quotes::{QuoteError, QuoteSource};
pub use messaging::{MessageSender, OutboundMessage, SendError, SentMessage};

#[cfg(test)]
pub use quotes::MockQuoteSource;
#[cfg(test)]
pub use messaging::MockMessageSender;
