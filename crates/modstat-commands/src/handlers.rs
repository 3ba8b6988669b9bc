//! One handler per command: collect, bucket, publish.

use crate::aggregator::{
    action_prefixes, action_timestamps, author_and_public_hours, log_hours, public_channels,
    public_hours, ChannelDiscovery,
};
use crate::context::CommandContext;
use crate::error::{CommandError, UserError};
use crate::registry::{ActivityTarget, Invocation};
use crate::reporter::ReportKind;
use chrono::Utc;
use modstat_common::{window_start, ChannelId, Result, UserId};
use modstat_graphs::HistogramSpec;
use tracing::{info, warn};

const MODERATORS_LABEL: &str = "Moderators";
const PUBLIC_LABEL: &str = "Public";
const ACTIONS_LABEL: &str = "Logged actions";

/// Runs a bound invocation, replying in `channel`.
pub async fn run(
    ctx: &CommandContext,
    channel: ChannelId,
    invocation: Invocation,
) -> std::result::Result<(), CommandError> {
    match invocation {
        Invocation::Modlog { limit } => {
            moderator_activity(ctx, channel, limit, ReportKind::ModLog).await?;
        }
        Invocation::HourlyActivity {
            target: ActivityTarget::Moderators,
            limit,
        } => {
            moderator_activity(ctx, channel, limit, ReportKind::HourlyActivity).await?;
        }
        Invocation::HourlyActivity {
            target: ActivityTarget::UserId(user),
            limit,
        } => {
            user_activity(ctx, channel, user, &user.to_string(), limit).await?;
        }
        Invocation::HourlyActivity {
            target: ActivityTarget::UserName(name),
            limit,
        } => {
            let user = resolve_member(ctx, &name).await?;
            user_activity(ctx, channel, user, &name, limit).await?;
        }
        Invocation::LogHistory { days, action } => {
            log_history(ctx, channel, days, action.as_deref()).await?;
        }
    }
    Ok(())
}

async fn resolve_member(
    ctx: &CommandContext,
    name: &str,
) -> std::result::Result<UserId, CommandError> {
    let guild = &ctx.config.discord.community_guild;
    match ctx.source.find_member(guild, name).await? {
        Some(user) => Ok(user),
        None => {
            warn!("No member named {} in {}", name, guild);
            Err(UserError::UnknownUser(name.to_string()).into())
        }
    }
}

async fn public_channel_set(ctx: &CommandContext) -> Result<Vec<ChannelId>> {
    let config = &ctx.config;
    let discovery = ChannelDiscovery {
        guild_name: &config.discord.community_guild,
        substrings: &config.channels.discovery_substrings,
    };
    public_channels(ctx.source.as_ref(), &config.channels.public, discovery).await
}

async fn moderator_activity(
    ctx: &CommandContext,
    channel: ChannelId,
    limit: usize,
    kind: ReportKind,
) -> Result<()> {
    let reporter = ctx.reporter();
    let status = reporter.begin(channel).await?;

    let config = &ctx.config;
    let moderators = log_hours(
        ctx.source.as_ref(),
        config.channels.mod_log,
        limit,
        &config.collection.action_sentinel,
    )
    .await?;
    let channels = public_channel_set(ctx).await?;
    let public = public_hours(
        ctx.source.as_ref(),
        &channels,
        config.collection.public_history_limit,
    )
    .await?;

    let spec = HistogramSpec::hourly(
        (MODERATORS_LABEL, &moderators),
        Some((PUBLIC_LABEL, &public)),
        ctx.chart_style(),
    );
    reporter.publish(&status, kind, &spec).await?;
    Ok(())
}

async fn user_activity(
    ctx: &CommandContext,
    channel: ChannelId,
    user: UserId,
    label: &str,
    limit: usize,
) -> Result<()> {
    let reporter = ctx.reporter();
    let status = reporter.begin(channel).await?;

    let channels = public_channel_set(ctx).await?;
    let (hours, public) = author_and_public_hours(
        ctx.source.as_ref(),
        &channels,
        user,
        limit,
        ctx.config.collection.public_history_limit,
    )
    .await?;

    info!("Collected {} messages from user {}", hours.len(), user);
    let spec = HistogramSpec::hourly(
        (label, &hours),
        Some((PUBLIC_LABEL, &public)),
        ctx.chart_style(),
    );
    reporter
        .publish(&status, ReportKind::HourlyActivity, &spec)
        .await?;
    Ok(())
}

async fn log_history(
    ctx: &CommandContext,
    channel: ChannelId,
    days: u32,
    action: Option<&str>,
) -> std::result::Result<(), CommandError> {
    let now = Utc::now();
    let Some(cutoff) = window_start(now, days) else {
        warn!("A {} day window reaches past the earliest date", days);
        return Err(UserError::NotANumber.into());
    };

    let reporter = ctx.reporter();
    let status = reporter.begin(channel).await?;

    let config = &ctx.config;
    let prefixes = action_prefixes(&config.collection.action_sentinels, action);
    let timestamps = action_timestamps(
        ctx.source.as_ref(),
        config.channels.mod_log,
        cutoff,
        now,
        &prefixes,
        config.collection.log_history_cap,
    )
    .await?;

    if timestamps.is_empty() {
        return Err(UserError::NoMatchingActions.into());
    }

    let label = action.unwrap_or(ACTIONS_LABEL);
    let spec = HistogramSpec::daily(label, &timestamps, cutoff, days, ctx.chart_style());
    reporter
        .publish(&status, ReportKind::LogHistory, &spec)
        .await?;
    Ok(())
}
