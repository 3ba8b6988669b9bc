//! Application-wide error types using thiserror.

use modstat_common::ModstatError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration or token error.
    #[error("Configuration error: {0}")]
    Config(#[from] ModstatError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// Poise framework error.
    #[error("Framework error: {0}")]
    Framework(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_convert() {
        let error: BotError = ModstatError::config("token file is empty").into();
        assert!(matches!(error, BotError::Config(_)));
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "bot_token");
        let error: BotError = io.into();
        assert_eq!(error.to_string(), "I/O error: bot_token");
    }
}
