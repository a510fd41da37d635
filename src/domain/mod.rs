//! Domain Layer - Quote records, symbol lists, digest formatting and addressing
//!
//! Pure types and functions with no I/O. Everything that talks to the
//! outside world goes through the ports layer.

pub mod quote;
pub mod symbols;
pub mod message;
pub mod delivery;

pub use quote::Quote;
pub use symbols::{clean_symbols, default_symbols, parse_symbol_list, DEFAULT_SYMBOLS};
pub use message::{format_message, ATTRIBUTION, DIGEST_LABEL};
pub use delivery::{DeliveryMode, WHATSAPP_PREFIX};
