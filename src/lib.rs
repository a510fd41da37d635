//! Quote Courier - Morning Stock Digest Library
//!
//! Fetches current quotes for a short watchlist from Alpha Vantage, renders
//! them into one line and delivers it over Twilio SMS or WhatsApp.
//!
//! # Modules
//!
//! - `domain`: Quote records, symbol lists, digest formatting, delivery addressing
//! - `ports`: Trait abstractions (QuoteSource, MessageSender)
//! - `adapters`: External implementations (Alpha Vantage, Twilio, CLI)
//! - `config`: Environment settings and the optional tuning file
//! - `application`: Rate-limited fetcher, dispatcher and the digest job

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
