//! Errors raised while running a command.

use modstat_common::ModstatError;
use thiserror::Error;

/// Problems caused by the command itself. The `Display` text is replied to
/// the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Author lacks the moderator role
    #[error("You must be a moderator to do that")]
    NotModerator,

    /// No command with that name is registered
    #[error("That command doesn't exist")]
    UnknownCommand,

    /// Too few or too many arguments
    #[error("Wrong number of arguments given.")]
    WrongArity,

    /// A count or day argument is not a non-negative integer
    #[error("Please use a number.")]
    NotANumber,

    /// The date-windowed search found nothing
    #[error("No logged actions matched the command.")]
    NoMatchingActions,

    /// A user name could not be resolved on the community server
    #[error("Could not find a user called {0}.")]
    UnknownUser(String),
}

/// Outcome of a failed command: either replied to the user or fatal.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Recoverable; reported back in the channel
    #[error(transparent)]
    User(#[from] UserError),

    /// Aborts the command; logged, never replied
    #[error(transparent)]
    Fatal(#[from] ModstatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            UserError::NotModerator.to_string(),
            "You must be a moderator to do that"
        );
        assert_eq!(UserError::UnknownCommand.to_string(), "That command doesn't exist");
        assert_eq!(UserError::WrongArity.to_string(), "Wrong number of arguments given.");
        assert_eq!(UserError::NotANumber.to_string(), "Please use a number.");
        assert_eq!(
            UserError::NoMatchingActions.to_string(),
            "No logged actions matched the command."
        );
        assert_eq!(
            UserError::UnknownUser("someone".into()).to_string(),
            "Could not find a user called someone."
        );
    }

    #[test]
    fn test_fatal_is_transparent() {
        let err: CommandError = ModstatError::discord("gateway closed").into();
        assert_eq!(err.to_string(), "Discord API error: gateway closed");
    }
}
