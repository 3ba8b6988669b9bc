//! In-memory platform used by the command tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use modstat_commands::{
    Author, ChannelInfo, CommandContext, Dispatcher, HistoricalMessage, HistoryStream,
    IncomingMessage, MessageSource, ReplySink, StatusHandle,
};
use modstat_common::{ChannelId, MessageId, ModstatError, Result, UserId};
use modstat_config::Config;
use modstat_graphs::{HistogramRenderer, HistogramSpec};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const COMMAND_CHANNEL: ChannelId = ChannelId(99);
pub const MOD_LOG: ChannelId = ChannelId(1);
pub const PUBLIC: ChannelId = ChannelId(10);
pub const COMMUNITY_GUILD: &str = "/r/PUBATTLEGROUNDS";

/// Something the bot sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Say(ChannelId, String),
    Edit(MessageId, String),
    File(ChannelId, String),
}

#[derive(Default)]
pub struct FakePlatform {
    histories: HashMap<ChannelId, Vec<HistoricalMessage>>,
    failing: HashSet<ChannelId>,
    catalog: Vec<ChannelInfo>,
    members: HashMap<String, UserId>,
    history_requests: Mutex<Vec<ChannelId>>,
    events: Mutex<Vec<SinkEvent>>,
    rendered: Mutex<Vec<(HistogramSpec, PathBuf)>>,
    next_message: Mutex<u64>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the history of `channel`, newest message first.
    pub fn with_history(mut self, channel: ChannelId, messages: Vec<HistoricalMessage>) -> Self {
        self.histories.insert(channel, messages);
        self
    }

    /// Makes every history request for `channel` fail.
    pub fn with_failing_history(mut self, channel: ChannelId) -> Self {
        self.failing.insert(channel);
        self
    }

    pub fn with_channel(mut self, id: ChannelId, name: &str, guild_name: &str) -> Self {
        self.catalog.push(ChannelInfo {
            id,
            name: name.to_string(),
            guild_name: guild_name.to_string(),
        });
        self
    }

    pub fn with_member(mut self, name: &str, id: UserId) -> Self {
        self.members.insert(name.to_string(), id);
        self
    }

    pub fn history_requests(&self) -> Vec<ChannelId> {
        self.history_requests.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn rendered(&self) -> Vec<(HistogramSpec, PathBuf)> {
        self.rendered.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSource for FakePlatform {
    fn history(&self, channel: ChannelId) -> HistoryStream {
        self.history_requests.lock().unwrap().push(channel);
        if self.failing.contains(&channel) {
            let error = ModstatError::discord(format!("history of {channel} unavailable"));
            return futures::stream::iter(vec![Err(error)]).boxed();
        }
        let messages = self.histories.get(&channel).cloned().unwrap_or_default();
        futures::stream::iter(messages.into_iter().map(Ok)).boxed()
    }

    async fn channels(&self) -> Result<Vec<ChannelInfo>> {
        Ok(self.catalog.clone())
    }

    async fn find_member(&self, guild_name: &str, name: &str) -> Result<Option<UserId>> {
        if guild_name != COMMUNITY_GUILD {
            return Ok(None);
        }
        Ok(self.members.get(name).copied())
    }
}

#[async_trait]
impl ReplySink for FakePlatform {
    async fn say(&self, channel: ChannelId, content: &str) -> Result<StatusHandle> {
        let mut next = self.next_message.lock().unwrap();
        *next += 1;
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Say(channel, content.to_string()));
        Ok(StatusHandle {
            channel,
            message: MessageId(*next),
            content: content.to_string(),
        })
    }

    async fn edit(&self, handle: &StatusHandle, content: &str) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Edit(handle.message, content.to_string()));
        Ok(())
    }

    async fn send_file(&self, channel: ChannelId, _path: &Path, filename: &str) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::File(channel, filename.to_string()));
        Ok(())
    }
}

#[async_trait]
impl HistogramRenderer for FakePlatform {
    async fn render_to_file(&self, spec: &HistogramSpec, path: &Path) -> Result<()> {
        self.rendered
            .lock()
            .unwrap()
            .push((spec.clone(), path.to_path_buf()));
        Ok(())
    }
}

/// Default configuration pointed at the fixture channels and `output_dir`.
pub fn test_config(output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.channels.mod_log = MOD_LOG;
    config.channels.public = vec![PUBLIC];
    config.graphs.output_dir = output_dir.to_path_buf();
    config
}

pub fn dispatcher(platform: &Arc<FakePlatform>, config: Config) -> Dispatcher {
    let ctx = CommandContext::new(
        Arc::new(config),
        platform.clone(),
        platform.clone(),
        platform.clone(),
    );
    Dispatcher::new(ctx)
}

pub fn message(author: UserId, content: &str, timestamp: DateTime<Utc>) -> HistoricalMessage {
    HistoricalMessage {
        author,
        content: content.to_string(),
        timestamp,
    }
}

pub fn from_moderator(content: &str) -> IncomingMessage {
    IncomingMessage {
        channel: COMMAND_CHANNEL,
        author: Author {
            id: UserId(500),
            role_names: vec!["Members".to_string(), "Moderators".to_string()],
        },
        content: content.to_string(),
    }
}

pub fn from_member(content: &str) -> IncomingMessage {
    IncomingMessage {
        channel: COMMAND_CHANNEL,
        author: Author {
            id: UserId(600),
            role_names: vec!["Members".to_string()],
        },
        content: content.to_string(),
    }
}
