//! Slash command definitions

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};

/// Name of the dice command
pub const ROLL_COMMAND: &str = "roll";
/// Name of the dice command's formula option
pub const FORMULA_OPTION: &str = "formula";

/// `/roll formula:<text>`
pub fn roll_command() -> CreateCommand {
    CreateCommand::new(ROLL_COMMAND)
        .description("Roll dice in XdY (+/- Z) format. E.g.: /roll 1d20+5")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                FORMULA_OPTION,
                "Dice formula, e.g. 1d20, 2d6+3, d8-1",
            )
            .required(true),
        )
}

/// Every slash command the dice bot registers
pub fn dice_commands() -> Vec<CreateCommand> {
    vec![roll_command()]
}

/// Read a string option from a command invocation
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

/// Prefix commands understood by the dice bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixCommand {
    /// `!sync` - re-register slash commands
    Sync,
    /// Any other `!word`
    Unknown(String),
}

impl PrefixCommand {
    /// Parse a `!command` message; `None` when the message is not a command
    pub fn parse(content: &str, prefix: char) -> Option<Self> {
        let rest = content.trim().strip_prefix(prefix)?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        let name = rest.split_whitespace().next()?;
        match name.to_lowercase().as_str() {
            "sync" => Some(Self::Sync),
            other => Some(Self::Unknown(other.to_string())),
        }
    }
}
