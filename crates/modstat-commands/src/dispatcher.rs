//! Prefix recognition, the moderator gate, and command dispatch.

use crate::context::CommandContext;
use crate::error::{CommandError, UserError};
use crate::handlers;
use modstat_common::{ChannelId, Result, UserId};
use tracing::{debug, warn};

/// Author of an incoming message, with the role names they hold in the
/// server the message was sent in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// User id
    pub id: UserId,
    /// Names of the author's roles; empty outside a server
    pub role_names: Vec<String>,
}

impl Author {
    /// Whether the author holds a role named exactly `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.role_names.iter().any(|name| name == role)
    }
}

/// A chat message as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Channel the message was posted in
    pub channel: ChannelId,
    /// Who posted it
    pub author: Author,
    /// Raw text
    pub content: String,
}

/// What the dispatcher did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Not a command
    Ignored,
    /// Command from an author without the moderator role
    Denied,
    /// The command failed with a reply to the user
    Rejected(UserError),
    /// The handler ran to completion
    Completed,
}

/// Splits the text after the prefix into a command name and its arguments.
///
/// Returns `None` when the prefix is absent. Extra whitespace between
/// arguments is ignored.
pub fn split_command<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, Vec<&'a str>)> {
    let rest = content.strip_prefix(prefix)?;
    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    Some((name, words.collect()))
}

/// Routes prefixed messages to command handlers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    ctx: CommandContext,
}

impl Dispatcher {
    /// Creates a dispatcher over `ctx`.
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }

    /// Shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }

    /// Handles one message.
    ///
    /// User errors are replied in the message's channel and reported as
    /// [`Dispatch::Rejected`]. Platform and rendering failures are returned
    /// for the caller to log; nothing is replied for them.
    pub async fn handle(&self, message: &IncomingMessage) -> Result<Dispatch> {
        let discord = &self.ctx.config.discord;
        let Some((name, args)) = split_command(&message.content, &discord.command_prefix) else {
            return Ok(Dispatch::Ignored);
        };

        if !message.author.has_role(&discord.moderator_role) {
            warn!(
                "User {} tried to run '{}' without the {} role",
                message.author.id, name, discord.moderator_role
            );
            self.reply(message.channel, &UserError::NotModerator).await?;
            return Ok(Dispatch::Denied);
        }

        debug!("Dispatching '{}' with {} arguments", name, args.len());
        match self.run(message.channel, name, &args).await {
            Ok(()) => Ok(Dispatch::Completed),
            Err(CommandError::User(error)) => {
                self.reply(message.channel, &error).await?;
                Ok(Dispatch::Rejected(error))
            }
            Err(CommandError::Fatal(error)) => Err(error),
        }
    }

    async fn run(
        &self,
        channel: ChannelId,
        name: &str,
        args: &[&str],
    ) -> std::result::Result<(), CommandError> {
        let spec = self
            .ctx
            .registry
            .get(name)
            .ok_or(UserError::UnknownCommand)?;
        let invocation = spec.bind(args, self.ctx.config.collection.max_days)?;
        handlers::run(&self.ctx, channel, invocation).await
    }

    async fn reply(&self, channel: ChannelId, error: &UserError) -> Result<()> {
        self.ctx.sink.say(channel, &error.to_string()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("$modlog 100", "$"), Some(("modlog", vec!["100"])));
        assert_eq!(
            split_command("$loghistory   7  ban", "$"),
            Some(("loghistory", vec!["7", "ban"]))
        );
        assert_eq!(split_command("$", "$"), Some(("", vec![])));
        assert_eq!(split_command("modlog 100", "$"), None);
        assert_eq!(split_command(" $modlog", "$"), None);
    }

    #[test]
    fn test_role_check_is_exact() {
        let author = Author {
            id: UserId(1),
            role_names: vec!["Moderators".into(), "Members".into()],
        };
        assert!(author.has_role("Moderators"));
        assert!(!author.has_role("moderators"));
        assert!(!author.has_role("Mod"));
    }
}
