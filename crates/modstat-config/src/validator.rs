//! Runtime validation of loaded configuration.

use crate::schema::Config;
use modstat_common::{is_hex_color, ModstatError};

impl Config {
    /// Validates the configuration, reporting the first offending field.
    pub fn validate(&self) -> Result<(), ModstatError> {
        require_non_empty(&self.discord.command_prefix, "discord.command_prefix")?;
        require_non_empty(&self.discord.moderator_role, "discord.moderator_role")?;
        require_non_empty(&self.collection.action_sentinel, "collection.action_sentinel")?;

        if self.collection.action_sentinels.is_empty() {
            return Err(ModstatError::validation_field(
                "at least one action sentinel is required",
                "collection.action_sentinels",
            ));
        }
        for sentinel in &self.collection.action_sentinels {
            require_non_empty(sentinel, "collection.action_sentinels")?;
        }

        if self.collection.log_history_cap == 0 {
            return Err(ModstatError::validation_field(
                "must be greater than zero",
                "collection.log_history_cap",
            ));
        }

        if self.collection.max_days == 0 {
            return Err(ModstatError::validation_field(
                "must be greater than zero",
                "collection.max_days",
            ));
        }

        if self.graphs.width == 0 || self.graphs.height == 0 {
            return Err(ModstatError::validation_field(
                "image dimensions must be greater than zero",
                "graphs.width",
            ));
        }

        for (value, field) in [
            (&self.graphs.primary_color, "graphs.primary_color"),
            (&self.graphs.baseline_color, "graphs.baseline_color"),
        ] {
            if !is_hex_color(value) {
                return Err(ModstatError::validation_field(
                    format!("'{value}' is not a #RRGGBB color"),
                    field,
                ));
            }
        }

        Ok(())
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ModstatError> {
    if value.trim().is_empty() {
        Err(ModstatError::validation_field("cannot be empty", field))
    } else {
        Ok(())
    }
}
