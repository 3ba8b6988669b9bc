//! Platform seams: reading channel history and replying in channels.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use modstat_common::{ChannelId, MessageId, Result, UserId};
use std::path::Path;

/// A message replayed from channel history. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalMessage {
    /// Author of the message
    pub author: UserId,
    /// Text content
    pub content: String,
    /// Creation time as reported by the platform
    pub timestamp: DateTime<Utc>,
}

/// A channel in the platform's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    /// Channel id
    pub id: ChannelId,
    /// Channel name
    pub name: String,
    /// Name of the server the channel belongs to
    pub guild_name: String,
}

/// A message the bot sent and may edit later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusHandle {
    /// Channel the message was sent to
    pub channel: ChannelId,
    /// Id of the sent message
    pub message: MessageId,
    /// Text the message was sent with
    pub content: String,
}

/// Lazy, finite, forward-only history, newest message first.
///
/// Each page fetch is a suspension point. Streams are not restartable;
/// ask the source for a new one instead.
pub type HistoryStream = BoxStream<'static, Result<HistoricalMessage>>;

/// Read side of the chat platform.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// History of `channel`, newest first. Consumers bound it with `take`.
    fn history(&self, channel: ChannelId) -> HistoryStream;

    /// Every channel the bot can see.
    async fn channels(&self) -> Result<Vec<ChannelInfo>>;

    /// Looks up a member of the server named `guild_name` by display name.
    async fn find_member(&self, guild_name: &str, name: &str) -> Result<Option<UserId>>;
}

/// Write side of the chat platform.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sends a plain text message.
    async fn say(&self, channel: ChannelId, content: &str) -> Result<StatusHandle>;

    /// Replaces the text of a previously sent message.
    async fn edit(&self, handle: &StatusHandle, content: &str) -> Result<()>;

    /// Uploads `path` as an attachment named `filename`.
    async fn send_file(&self, channel: ChannelId, path: &Path, filename: &str) -> Result<()>;
}
