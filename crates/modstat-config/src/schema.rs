//! Configuration schema definitions.
//!
//! Every section carries `#[serde(default)]`, so a configuration file only
//! needs to mention the values it overrides.

use modstat_common::{ChannelId, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the modstat bot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord connection and command settings.
    pub discord: DiscordConfig,
    /// Channels the bot reads history from.
    pub channels: ChannelsConfig,
    /// Limits and filters for history collection.
    pub collection: CollectionConfig,
    /// Histogram output settings.
    pub graphs: GraphsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// File whose first line holds the bot token.
    pub token_file: PathBuf,
    /// Sentinel that marks a message as a bot command.
    pub command_prefix: String,
    /// Name of the role allowed to run commands.
    pub moderator_role: String,
    /// Name of the community server used for channel discovery and member lookup.
    pub community_guild: String,
}

/// Channel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsConfig {
    /// Channel whose history records moderator actions.
    pub mod_log: ChannelId,
    /// Public channels always included in the baseline.
    pub public: Vec<ChannelId>,
    /// A community channel joins the baseline when its name contains one of these.
    pub discovery_substrings: Vec<String>,
}

/// History collection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Prefix marking a moderator-log entry as a logged action.
    pub action_sentinel: String,
    /// Prefixes accepted in front of an action name by `loghistory`.
    pub action_sentinels: Vec<String>,
    /// Messages replayed per public channel.
    pub public_history_limit: usize,
    /// Upper bound on messages replayed by `loghistory`.
    pub log_history_cap: usize,
    /// Longest window `loghistory` accepts, in days.
    pub max_days: u32,
}

/// Histogram output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Directory receiving rendered images.
    pub output_dir: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Color of the primary (moderator or user) series.
    pub primary_color: String,
    /// Color of the baseline (public) series.
    pub baseline_color: String,
}
