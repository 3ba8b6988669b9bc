//! Serenity-backed implementations of the command platform traits.

use async_trait::async_trait;
use chrono::DateTime;
use futures::{StreamExt, TryStreamExt};
use modstat_commands::{
    ChannelInfo, HistoricalMessage, HistoryStream, MessageSource, ReplySink, StatusHandle,
};
use modstat_common::{ChannelId, MessageId, ModstatError, Result, UserId};
use poise::serenity_prelude as serenity;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Upper bound on members returned by the search endpoint.
const MEMBER_SEARCH_LIMIT: u64 = 100;

/// Reads history through the REST API and channel and member data from the
/// gateway cache.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<serenity::Http>,
    cache: Arc<serenity::Cache>,
}

impl SerenityGateway {
    /// Creates a gateway over a connected client's HTTP handle and cache.
    pub fn new(http: Arc<serenity::Http>, cache: Arc<serenity::Cache>) -> Self {
        Self { http, cache }
    }

    /// Finds the cached guild named `guild_name` and, if cached, its member
    /// displayed as `name`.
    fn cached_member(
        &self,
        guild_name: &str,
        name: &str,
    ) -> Option<(serenity::GuildId, Option<UserId>)> {
        self.cache.guilds().into_iter().find_map(|guild_id| {
            let guild = self.cache.guild(guild_id)?;
            (guild.name == guild_name).then(|| {
                let member = guild.member_named(name).map(|m| UserId(m.user.id.get()));
                (guild_id, member)
            })
        })
    }
}

impl std::fmt::Debug for SerenityGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityGateway").finish_non_exhaustive()
    }
}

fn discord_error(action: &str, error: serenity::Error) -> ModstatError {
    ModstatError::discord_with_source(format!("Failed to {action}"), error)
}

/// Converts a fetched message into the platform-neutral form.
pub fn historical_message(message: &serenity::Message) -> Result<HistoricalMessage> {
    let timestamp = DateTime::from_timestamp(message.timestamp.unix_timestamp(), 0)
        .ok_or_else(|| {
            ModstatError::discord(format!("Message {} has an invalid timestamp", message.id))
        })?;
    Ok(HistoricalMessage {
        author: UserId(message.author.id.get()),
        content: message.content.clone(),
        timestamp,
    })
}

#[async_trait]
impl MessageSource for SerenityGateway {
    fn history(&self, channel: ChannelId) -> HistoryStream {
        serenity::ChannelId::new(channel.0)
            .messages_iter(self.http.clone())
            .map_err(move |e| discord_error(&format!("read history of channel {channel}"), e))
            .and_then(|message| futures::future::ready(historical_message(&message)))
            .boxed()
    }

    async fn channels(&self) -> Result<Vec<ChannelInfo>> {
        let mut channels = Vec::new();
        for guild_id in self.cache.guilds() {
            let Some(guild) = self.cache.guild(guild_id) else {
                continue;
            };
            channels.extend(
                guild
                    .channels
                    .values()
                    .filter(|channel| channel.kind == serenity::ChannelType::Text)
                    .map(|channel| ChannelInfo {
                        id: ChannelId(channel.id.get()),
                        name: channel.name.clone(),
                        guild_name: guild.name.clone(),
                    }),
            );
        }
        debug!("Cache holds {} text channels", channels.len());
        Ok(channels)
    }

    async fn find_member(&self, guild_name: &str, name: &str) -> Result<Option<UserId>> {
        let Some((guild_id, cached)) = self.cached_member(guild_name, name) else {
            return Ok(None);
        };
        if cached.is_some() {
            return Ok(cached);
        }

        let candidates = guild_id
            .search_members(&*self.http, name, Some(MEMBER_SEARCH_LIMIT))
            .await
            .map_err(|e| discord_error("search guild members", e))?;
        Ok(candidates
            .iter()
            .find(|member| member.display_name() == name || member.user.name == name)
            .map(|member| UserId(member.user.id.get())))
    }
}

#[async_trait]
impl ReplySink for SerenityGateway {
    async fn say(&self, channel: ChannelId, content: &str) -> Result<StatusHandle> {
        let sent = serenity::ChannelId::new(channel.0)
            .say(&*self.http, content)
            .await
            .map_err(|e| discord_error("send message", e))?;
        Ok(StatusHandle {
            channel,
            message: MessageId(sent.id.get()),
            content: content.to_string(),
        })
    }

    async fn edit(&self, handle: &StatusHandle, content: &str) -> Result<()> {
        serenity::ChannelId::new(handle.channel.0)
            .edit_message(
                &*self.http,
                serenity::MessageId::new(handle.message.0),
                serenity::EditMessage::new().content(content),
            )
            .await
            .map_err(|e| discord_error("edit status message", e))?;
        Ok(())
    }

    async fn send_file(&self, channel: ChannelId, path: &Path, filename: &str) -> Result<()> {
        let data = tokio::fs::read(path).await?;
        let attachment = serenity::CreateAttachment::bytes(data, filename);
        serenity::ChannelId::new(channel.0)
            .send_message(&*self.http, serenity::CreateMessage::new().add_file(attachment))
            .await
            .map_err(|e| discord_error("upload attachment", e))?;
        Ok(())
    }
}
