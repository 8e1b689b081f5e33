//! Interactive prompts for the wizard mode.

use anyhow::{Result, anyhow};
use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

use crate::cipher::symbol;
use crate::config::{FIRST_SYMBOL, LAST_SYMBOL};
use crate::types::Direction;

/// Prompt handler for interactive mode.
pub struct Prompt;

impl Prompt {
    /// Asks whether to encode or decode.
    pub fn select_direction() -> Result<Direction> {
        Select::new("Select operation", Direction::ALL.to_vec()).prompt().map_err(|e| anyhow!("direction selection failed: {e}"))
    }

    /// Asks for the message, refusing characters the cipher cannot carry.
    pub fn message(direction: Direction) -> Result<String> {
        let label = match direction {
            Direction::Encode => "Message to encode",
            Direction::Decode => "Message to decode",
        };

        Text::new(label)
            .with_validator(|input: &str| match symbol::first_outside(input) {
                Some((_, c)) => Ok(Validation::Invalid(format!("{c:?} cannot be encoded; use characters from {:?} to {:?}", FIRST_SYMBOL as char, LAST_SYMBOL as char).into())),
                None => Ok(Validation::Valid),
            })
            .prompt()
            .map_err(|e| anyhow!("message input failed: {e}"))
    }

    /// Asks for one side of the plug pair; an empty answer means no plug.
    pub fn plug(side: &str) -> Result<Option<String>> {
        let plug = Text::new(&format!("Plug {side}"))
            .with_help_message("characters swapped with the same position of the other plug; leave empty to skip")
            .prompt()
            .map_err(|e| anyhow!("plug input failed: {e}"))?;

        Ok(Some(plug).filter(|p| !p.is_empty()))
    }

    pub fn confirm_another() -> Result<bool> {
        Confirm::new("Convert another message?").with_default(true).prompt().map_err(|e| anyhow!("confirmation failed: {e}"))
    }
}
