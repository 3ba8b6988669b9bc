//! # Modstat Bot
//!
//! Discord bot that answers moderator commands with activity histograms.
//!
//! This crate wires the command dispatcher to Discord: poise drives the
//! gateway connection and serenity's HTTP client and cache back the
//! history source and reply sink.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod gateway;

pub use bot::{required_intents, Data, ModstatBot};
pub use error::*;
pub use gateway::SerenityGateway;
