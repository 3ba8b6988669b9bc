//! History replay and bucketing.
//!
//! Buckets keep the order the source delivers messages in and keep
//! duplicates; they feed frequency histograms, not sets.

use crate::source::{ChannelInfo, MessageSource};
use chrono::{DateTime, Timelike, Utc};
use futures::{StreamExt, TryStreamExt};
use modstat_common::{format_timestamp, ChannelId, Result, UserId};
use tracing::debug;

/// Hour-of-day bucket (0–23) in the timezone the platform reports.
pub fn hour_bucket(timestamp: &DateTime<Utc>) -> u8 {
    timestamp.hour() as u8
}

/// Which community channels join the public baseline.
///
/// A channel qualifies when it belongs to the server named `guild_name`
/// and its name contains any of `substrings`.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDiscovery<'a> {
    /// Server whose channels are considered
    pub guild_name: &'a str,
    /// Channel name fragments that qualify a channel
    pub substrings: &'a [String],
}

impl ChannelDiscovery<'_> {
    /// Whether `channel` qualifies.
    pub fn matches(&self, channel: &ChannelInfo) -> bool {
        channel.guild_name == self.guild_name
            && self
                .substrings
                .iter()
                .any(|fragment| channel.name.contains(fragment.as_str()))
    }
}

/// Static allow-list followed by discovered channels not already listed.
pub async fn public_channels(
    source: &dyn MessageSource,
    allow_list: &[ChannelId],
    discovery: ChannelDiscovery<'_>,
) -> Result<Vec<ChannelId>> {
    let mut channels = allow_list.to_vec();
    for channel in source.channels().await? {
        if discovery.matches(&channel) && !channels.contains(&channel.id) {
            channels.push(channel.id);
        }
    }
    debug!(
        "Public channel set has {} channels ({} listed)",
        channels.len(),
        allow_list.len()
    );
    Ok(channels)
}

/// Hours of the moderator log entries among the newest `limit` messages
/// that start with `sentinel`.
pub async fn log_hours(
    source: &dyn MessageSource,
    channel: ChannelId,
    limit: usize,
    sentinel: &str,
) -> Result<Vec<u8>> {
    let mut history = source.history(channel).take(limit);
    let mut hours = Vec::new();

    while let Some(message) = history.try_next().await? {
        if message.content.starts_with(sentinel) {
            hours.push(hour_bucket(&message.timestamp));
        }
    }

    debug!("Collected {} log entries from {}", hours.len(), channel);
    Ok(hours)
}

/// Hours of the newest `per_channel_limit` messages of every channel.
pub async fn public_hours(
    source: &dyn MessageSource,
    channels: &[ChannelId],
    per_channel_limit: usize,
) -> Result<Vec<u8>> {
    let mut hours = Vec::new();

    for &channel in channels {
        debug!("Counting messages in {}", channel);
        let mut history = source.history(channel).take(per_channel_limit);
        while let Some(message) = history.try_next().await? {
            hours.push(hour_bucket(&message.timestamp));
        }
    }

    Ok(hours)
}

/// Hours of `author`'s messages among the newest `author_limit` of every
/// channel, alongside the hours of the newest `public_limit` from anyone.
///
/// Each channel is replayed once, up to the larger of the two limits.
pub async fn author_and_public_hours(
    source: &dyn MessageSource,
    channels: &[ChannelId],
    author: UserId,
    author_limit: usize,
    public_limit: usize,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut authored = Vec::new();
    let mut public = Vec::new();

    for &channel in channels {
        debug!("Counting messages in {} for {}", channel, author);
        let mut history = source
            .history(channel)
            .take(author_limit.max(public_limit))
            .enumerate();
        while let Some((position, message)) = history.next().await {
            let message = message?;
            let hour = hour_bucket(&message.timestamp);
            if position < author_limit && message.author == author {
                authored.push(hour);
            }
            if position < public_limit {
                public.push(hour);
            }
        }
    }

    Ok((authored, public))
}

/// Forms of an action name accepted at the start of a log entry,
/// one per sentinel. No action means the bare sentinels.
pub fn action_prefixes(sentinels: &[String], action: Option<&str>) -> Vec<String> {
    let action = action.unwrap_or_default();
    sentinels
        .iter()
        .map(|sentinel| format!("{sentinel}{action}"))
        .collect()
}

/// Timestamps of log entries in `[cutoff, now]` starting with any of `prefixes`.
///
/// Replays at most `cap` messages and stops at the first one older than
/// `cutoff`, relying on newest-first delivery.
pub async fn action_timestamps(
    source: &dyn MessageSource,
    channel: ChannelId,
    cutoff: DateTime<Utc>,
    now: DateTime<Utc>,
    prefixes: &[String],
    cap: usize,
) -> Result<Vec<DateTime<Utc>>> {
    let mut history = source.history(channel).take(cap);
    let mut timestamps = Vec::new();

    while let Some(message) = history.try_next().await? {
        if message.timestamp < cutoff {
            break;
        }
        if message.timestamp > now {
            continue;
        }
        if prefixes.iter().any(|p| message.content.starts_with(p.as_str())) {
            timestamps.push(message.timestamp);
        }
    }

    debug!(
        "Found {} matching actions in {} since {}",
        timestamps.len(),
        channel,
        format_timestamp(cutoff)
    );
    Ok(timestamps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modstat_common::test_utils::mock_timestamp;
    use proptest::prelude::*;

    #[test]
    fn test_hour_bucket() {
        assert_eq!(hour_bucket(&mock_timestamp(2024, 1, 1, 0, 59, 59)), 0);
        assert_eq!(hour_bucket(&mock_timestamp(2024, 1, 1, 23, 0, 0)), 23);
    }

    #[test]
    fn test_discovery_policy() {
        let substrings = vec!["looking-for-group".to_string(), "na-".to_string()];
        let discovery = ChannelDiscovery {
            guild_name: "/r/PUBATTLEGROUNDS",
            substrings: &substrings,
        };
        let channel = |name: &str, guild: &str| ChannelInfo {
            id: ChannelId(1),
            name: name.to_string(),
            guild_name: guild.to_string(),
        };

        assert!(discovery.matches(&channel("looking-for-group-1", "/r/PUBATTLEGROUNDS")));
        assert!(discovery.matches(&channel("na-squads", "/r/PUBATTLEGROUNDS")));
        assert!(!discovery.matches(&channel("general", "/r/PUBATTLEGROUNDS")));
        assert!(!discovery.matches(&channel("na-squads", "Other server")));
    }

    #[test]
    fn test_action_prefixes() {
        let sentinels = vec!["!".to_string(), "?".to_string()];
        assert_eq!(action_prefixes(&sentinels, Some("ban")), vec!["!ban", "?ban"]);
        assert_eq!(action_prefixes(&sentinels, None), vec!["!", "?"]);
    }

    proptest! {
        #[test]
        fn hour_bucketing_is_stable(seconds in prop::collection::vec(0i64..4_000_000_000, 0..100)) {
            let stamps: Vec<DateTime<Utc>> = seconds
                .iter()
                .filter_map(|s| DateTime::from_timestamp(*s, 0))
                .collect();
            let first: Vec<u8> = stamps.iter().map(hour_bucket).collect();
            let second: Vec<u8> = stamps.iter().map(hour_bucket).collect();
            prop_assert_eq!(&first, &second);
            prop_assert!(first.iter().all(|&h| h < 24));
        }
    }
}
