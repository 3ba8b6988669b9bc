//! # Modstat Config
//!
//! Configuration schema, defaults and loading for the modstat bot.
//!
//! Configuration is read once at startup and is immutable afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
