//! Common type definitions for rotorcrypt.
//!
//! # Overview
//!
//! - [`Direction`]: Distinguishes between encoding and decoding
//! - [`Task`]: A single line handed to the batch worker
//! - [`TaskResult`]: The converted line (or the reason it failed)

use std::fmt::{Display, Formatter, Result};

/// The direction a message travels through the machine.
///
/// Encoding applies the plugboard before the rotor; decoding applies it after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encode,

    /// Ciphertext in, plaintext out.
    Decode,
}

impl Direction {
    /// Both directions, in menu order.
    pub const ALL: &'static [Self] = &[Self::Encode, Self::Decode];

    /// Returns a human-readable label for the direction.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encode => "Encode",
            Self::Decode => "Decode",
        }
    }

    /// Returns a progress label for the direction.
    #[inline]
    pub fn action(self) -> &'static str {
        match self {
            Self::Encode => "Encoding...",
            Self::Decode => "Decoding...",
        }
    }

    /// Returns `true` when encoding.
    #[inline]
    pub fn is_encode(self) -> bool {
        matches!(self, Self::Encode)
    }
}

impl Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// A line of input waiting to be converted by the batch worker.
pub struct Task {
    /// The message text (without its line terminator).
    pub text: String,

    /// Sequential index used by the writer to restore input order.
    pub index: u64,
}

/// Result of converting a [`Task`].
pub struct TaskResult {
    /// The converted text (empty if an error occurred).
    pub text: String,

    /// Error message if conversion failed, `None` on success.
    pub error: Option<Box<str>>,

    /// The original task index for ordering.
    pub index: u64,
}

impl TaskResult {
    /// Creates a successful task result.
    #[inline]
    pub fn ok(index: u64, text: String) -> Self {
        Self { text, error: None, index }
    }

    /// Creates a failed task result.
    #[inline]
    pub fn err(index: u64, error: &dyn std::error::Error) -> Self {
        Self { text: String::new(), error: Some(error.to_string().into_boxed_str()), index }
    }
}
