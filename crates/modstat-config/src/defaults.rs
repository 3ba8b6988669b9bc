//! Default values for every configuration section.

use crate::schema::*;
use modstat_common::ChannelId;
use std::path::PathBuf;

/// Default moderator log channel.
pub const DEFAULT_MOD_LOG_CHANNEL: ChannelId = ChannelId(302525012143898631);

/// Default public baseline channels.
pub const DEFAULT_PUBLIC_CHANNELS: [ChannelId; 5] = [
    ChannelId(289466476187090944),
    ChannelId(300462993995726848),
    ChannelId(289468705878966277),
    ChannelId(294240895937675273),
    ChannelId(289502676675198976),
];

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token_file: PathBuf::from("bot_token"),
            command_prefix: "$".to_string(),
            moderator_role: "Moderators".to_string(),
            community_guild: "/r/PUBATTLEGROUNDS".to_string(),
        }
    }
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            mod_log: DEFAULT_MOD_LOG_CHANNEL,
            public: DEFAULT_PUBLIC_CHANNELS.to_vec(),
            discovery_substrings: vec![
                "looking-for-group".to_string(),
                "na-".to_string(),
                "eu-".to_string(),
            ],
        }
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            action_sentinel: "!".to_string(),
            action_sentinels: vec!["!".to_string(), "?".to_string()],
            public_history_limit: 1000,
            log_history_cap: 10_000,
            max_days: 3650,
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("graphs"),
            width: 1500,
            height: 750,
            primary_color: "#000000".to_string(),
            baseline_color: "#FF0000".to_string(),
        }
    }
}
