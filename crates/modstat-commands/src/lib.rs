//! # Modstat Commands
//!
//! Moderator-only text commands for the modstat bot.
//!
//! A message starting with the command prefix passes the permission gate,
//! is bound against the [`CommandRegistry`], and runs one handler that
//! replays channel history through the [`MessageSource`], buckets it, and
//! publishes a histogram through the [`ReplySink`].
//!
//! Nothing in this crate talks to Discord directly; the bot binary supplies
//! the platform implementations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod reporter;
pub mod source;

pub use context::CommandContext;
pub use dispatcher::{Author, Dispatch, Dispatcher, IncomingMessage};
pub use error::{CommandError, UserError};
pub use registry::{ActivityTarget, CommandName, CommandRegistry, CommandSpec, Invocation};
pub use reporter::{ReportKind, Reporter};
pub use source::{ChannelInfo, HistoricalMessage, HistoryStream, MessageSource, ReplySink, StatusHandle};
