//! Command registry: names, parameter lists, and argument binding.

use crate::error::UserError;
use modstat_common::UserId;
use std::collections::BTreeMap;

/// Type of a positional parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Non-negative integer
    Integer,
    /// Any single word
    Text,
}

/// One positional parameter of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name
    pub name: &'static str,
    /// Expected type
    pub kind: ParamKind,
    /// Whether the argument must be given
    pub required: bool,
}

impl ParamSpec {
    const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self { name, kind, required: true }
    }

    const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self { name, kind, required: false }
    }
}

/// Commands the bot understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    /// `modlog <limit>`
    Modlog,
    /// `hourlyactivity <userOrGroup> <limit>`
    HourlyActivity,
    /// `loghistory <days> [action]`
    LogHistory,
}

impl CommandName {
    /// Name typed after the prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Modlog => "modlog",
            CommandName::HourlyActivity => "hourlyactivity",
            CommandName::LogHistory => "loghistory",
        }
    }
}

/// A registered command and its parameter list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Which command this is
    pub name: CommandName,
    /// Positional parameters; required ones come first
    pub params: &'static [ParamSpec],
}

const MODLOG: CommandSpec = CommandSpec {
    name: CommandName::Modlog,
    params: &[ParamSpec::required("limit", ParamKind::Integer)],
};

const HOURLY_ACTIVITY: CommandSpec = CommandSpec {
    name: CommandName::HourlyActivity,
    params: &[
        ParamSpec::required("userOrGroup", ParamKind::Text),
        ParamSpec::required("limit", ParamKind::Integer),
    ],
};

const LOG_HISTORY: CommandSpec = CommandSpec {
    name: CommandName::LogHistory,
    params: &[
        ParamSpec::required("days", ParamKind::Integer),
        ParamSpec::optional("action", ParamKind::Text),
    ],
};

/// Who `hourlyactivity` is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityTarget {
    /// The moderator group, read from the moderator log
    Moderators,
    /// A user given by numeric id
    UserId(UserId),
    /// A user given by display name
    UserName(String),
}

impl ActivityTarget {
    /// Keyword selecting the moderator group
    pub const MODERATORS_KEYWORD: &'static str = "mods";

    /// Interprets the `userOrGroup` argument.
    pub fn parse(value: &str) -> Self {
        if value == Self::MODERATORS_KEYWORD {
            ActivityTarget::Moderators
        } else if let Ok(id) = value.parse::<u64>() {
            ActivityTarget::UserId(UserId(id))
        } else {
            ActivityTarget::UserName(value.to_string())
        }
    }
}

/// A command with its arguments checked and converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `modlog`
    Modlog {
        /// Moderator log entries to replay
        limit: usize,
    },
    /// `hourlyactivity`
    HourlyActivity {
        /// Group or user to chart
        target: ActivityTarget,
        /// Messages to replay per channel
        limit: usize,
    },
    /// `loghistory`
    LogHistory {
        /// Length of the trailing window
        days: u32,
        /// Action name filter; `None` matches every logged action
        action: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Integer(u64),
    Text(String),
}

impl CommandSpec {
    /// Checks `args` against the parameter list and builds the invocation.
    ///
    /// Arity is checked before any argument is converted. A day count above
    /// `max_days` is rejected like any other unusable number.
    pub fn bind(&self, args: &[&str], max_days: u32) -> Result<Invocation, UserError> {
        let required = self.params.iter().filter(|p| p.required).count();
        if args.len() < required || args.len() > self.params.len() {
            return Err(UserError::WrongArity);
        }

        let values = self
            .params
            .iter()
            .zip(args)
            .map(|(param, arg)| match param.kind {
                ParamKind::Integer => arg
                    .parse::<u64>()
                    .map(Value::Integer)
                    .map_err(|_| UserError::NotANumber),
                ParamKind::Text => Ok(Value::Text((*arg).to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.invocation(values, max_days)
    }

    fn invocation(&self, values: Vec<Value>, max_days: u32) -> Result<Invocation, UserError> {
        let invocation = match (self.name, values.as_slice()) {
            (CommandName::Modlog, [Value::Integer(limit)]) => Invocation::Modlog {
                limit: to_limit(*limit)?,
            },
            (CommandName::HourlyActivity, [Value::Text(target), Value::Integer(limit)]) => {
                Invocation::HourlyActivity {
                    target: ActivityTarget::parse(target),
                    limit: to_limit(*limit)?,
                }
            }
            (CommandName::LogHistory, [Value::Integer(days)]) => Invocation::LogHistory {
                days: to_days(*days, max_days)?,
                action: None,
            },
            (CommandName::LogHistory, [Value::Integer(days), Value::Text(action)]) => {
                Invocation::LogHistory {
                    days: to_days(*days, max_days)?,
                    action: Some(action.clone()),
                }
            }
            _ => return Err(UserError::WrongArity),
        };
        Ok(invocation)
    }
}

fn to_limit(value: u64) -> Result<usize, UserError> {
    usize::try_from(value).map_err(|_| UserError::NotANumber)
}

fn to_days(value: u64, max_days: u32) -> Result<u32, UserError> {
    u32::try_from(value)
        .ok()
        .filter(|days| *days <= max_days)
        .ok_or(UserError::NotANumber)
}

/// Name → command lookup. Read-only once the bot is running.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `modlog`, `hourlyactivity` and `loghistory`
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();
        registry.register(MODLOG);
        registry.register(HOURLY_ACTIVITY);
        registry.register(LOG_HISTORY);
        registry
    }

    /// Adds or replaces a command
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.name.as_str(), spec);
    }

    /// Case-sensitive exact lookup
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Registered commands in name order
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
