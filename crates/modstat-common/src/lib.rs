//! # Modstat Common
//!
//! Shared types, errors and logging setup for the modstat bot.
//!
//! This crate provides the foundational types used across all other
//! crates in the modstat workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{ModstatError, Result};
pub use logging::{init_logging, LoggingConfig, LoggingGuard};
pub use types::*;
pub use utils::*;
