//! Alphabet checks shared by the message text and the plug strings.

use crate::config::{FIRST_SYMBOL, LAST_SYMBOL};
use crate::error::{CipherError, PlugSide, Result};

/// Returns `true` when `byte` is a character code the rotor can carry.
#[inline]
fn in_alphabet(byte: u8) -> bool {
    (FIRST_SYMBOL..=LAST_SYMBOL).contains(&byte)
}

/// Finds the first character of `text` outside the alphabet.
///
/// The position is a char index, so a multi-byte character reports where a
/// reader would count it.
pub(crate) fn first_outside(text: &str) -> Option<(usize, char)> {
    text.chars().enumerate().find(|(_, c)| !u8::try_from(*c).is_ok_and(in_alphabet))
}

/// Validates a message and returns its bytes.
///
/// Every accepted character is single-byte ASCII, so the byte slice indexes
/// exactly like the characters do.
pub(crate) fn message(text: &str) -> Result<&[u8]> {
    match first_outside(text) {
        Some((position, found)) => Err(CipherError::OutOfRangeInput { position, found }),
        None => Ok(text.as_bytes()),
    }
}

/// Validates one side of a plug pair and returns its bytes.
pub(crate) fn plug(text: &str, side: PlugSide) -> Result<&[u8]> {
    match first_outside(text) {
        Some((position, found)) => Err(CipherError::OutOfRangePlug { side, position, found }),
        None => Ok(text.as_bytes()),
    }
}
