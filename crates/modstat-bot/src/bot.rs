//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use crate::gateway::SerenityGateway;
use modstat_commands::{Author, CommandContext, Dispatch, Dispatcher, IncomingMessage};
use modstat_common::{truncate_string, ChannelId, UserId};
use modstat_config::Config;
use modstat_graphs::BitmapHistogramRenderer;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shared state handed to poise callbacks.
pub struct Data {
    /// Routes prefixed messages to command handlers
    pub dispatcher: Dispatcher,
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("dispatcher", &"<Dispatcher>")
            .finish()
    }
}

/// Gateway intents the bot needs: guild text, message content for the
/// command prefix, and members for name lookups.
pub fn required_intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MEMBERS
}

/// Main bot structure.
pub struct ModstatBot {
    config: Arc<Config>,
    token: String,
}

impl ModstatBot {
    /// Creates a new bot instance.
    pub fn new(config: Config, token: String) -> Self {
        Self {
            config: Arc::new(config),
            token,
        }
    }

    /// Connects to Discord and runs until the gateway shuts down.
    pub async fn start(&self) -> BotResult<()> {
        let config = self.config.clone();

        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: vec![],
                on_error: |error| Box::pin(on_error(error)),
                event_handler: |ctx, event, framework, data| {
                    Box::pin(event_handler(ctx, event, framework, data))
                },
                ..Default::default()
            })
            .setup(move |ctx, ready, _framework| {
                Box::pin(async move {
                    info!("Bot connected as: {}", ready.user.name);
                    info!("Connected to {} guilds", ready.guilds.len());

                    let gateway =
                        Arc::new(SerenityGateway::new(ctx.http.clone(), ctx.cache.clone()));
                    let commands = CommandContext::new(
                        config,
                        gateway.clone(),
                        gateway,
                        Arc::new(BitmapHistogramRenderer::new()),
                    );
                    Ok(Data {
                        dispatcher: Dispatcher::new(commands),
                    })
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&self.token, required_intents())
            .framework(framework)
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {:?}", e);
                return;
            }
            info!("Received shutdown signal, disconnecting");
            shard_manager.shutdown_all().await;
        });

        info!("Modstat bot is starting up...");
        client.start().await?;
        info!("Modstat bot has shut down");
        Ok(())
    }
}

/// Global error handler for the framework
async fn on_error(error: poise::FrameworkError<'_, Data, BotError>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!(
                "Error in event handler for {:?}: {:?}",
                event.snake_case_name(),
                error
            );
        }
        error => {
            error!("Other error: {:?}", error);
        }
    }
}

/// Central event handler for Discord events
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, BotError>,
    data: &Data,
) -> Result<(), BotError> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("Bot ready event received for: {}", data_about_bot.user.name);
        }
        serenity::FullEvent::GuildCreate { guild, .. } => {
            info!("Joined guild: {} (ID: {})", guild.name, guild.id);
        }
        serenity::FullEvent::Message { new_message } => {
            handle_message(ctx, new_message, &data.dispatcher).await;
        }
        _ => {}
    }
    Ok(())
}

async fn handle_message(
    ctx: &serenity::Context,
    message: &serenity::Message,
    dispatcher: &Dispatcher,
) {
    let prefix = &dispatcher.context().config.discord.command_prefix;
    if message.author.bot || !message.content.starts_with(prefix.as_str()) {
        return;
    }

    let incoming = IncomingMessage {
        channel: ChannelId(message.channel_id.get()),
        author: Author {
            id: UserId(message.author.id.get()),
            role_names: role_names(ctx, message).await,
        },
        content: message.content.clone(),
    };

    match dispatcher.handle(&incoming).await {
        Ok(Dispatch::Completed) => debug!("Command from {} completed", incoming.author.id),
        Ok(outcome) => debug!("Command from {} ended as {:?}", incoming.author.id, outcome),
        Err(e) => error!(
            "Command '{}' failed: {}",
            truncate_string(&incoming.content, 80),
            e
        ),
    }
}

/// Names of the author's roles in the guild the message was sent in.
async fn role_names(ctx: &serenity::Context, message: &serenity::Message) -> Vec<String> {
    let Some(guild_id) = message.guild_id else {
        return Vec::new();
    };

    let role_ids = match &message.member {
        Some(member) => member.roles.clone(),
        None => match guild_id.member(ctx, message.author.id).await {
            Ok(member) => member.roles,
            Err(e) => {
                warn!("Could not fetch roles of {}: {}", message.author.id, e);
                return Vec::new();
            }
        },
    };

    let Some(guild) = ctx.cache.guild(guild_id) else {
        warn!("Guild {} is not cached", guild_id);
        return Vec::new();
    };
    role_ids
        .iter()
        .filter_map(|id| guild.roles.get(id).map(|role| role.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_intents() {
        let intents = required_intents();
        assert!(intents.contains(serenity::GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(serenity::GatewayIntents::GUILD_MEMBERS));
        assert!(!intents.contains(serenity::GatewayIntents::DIRECT_MESSAGES));
    }
}
