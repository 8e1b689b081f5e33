//! Error types for the cipher core and the account directory.

use thiserror::Error;

use crate::config::{FIRST_SYMBOL, LAST_SYMBOL};

/// Which plug string a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PlugSide {
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "B")]
    B,
}

/// Errors produced by [`encode`](crate::encode) and [`decode`](crate::decode).
///
/// Every error rejects the whole call; no partial output is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("character {found:?} at position {position} is outside the cipher alphabet ({first:?}..={last:?})", first = FIRST_SYMBOL as char, last = LAST_SYMBOL as char)]
    OutOfRangeInput { position: usize, found: char },

    #[error("plug {side} character {found:?} at position {position} is outside the cipher alphabet")]
    OutOfRangePlug { side: PlugSide, position: usize, found: char },

    #[error("plugboard is not symmetric: {symbol:?} maps to {mapped:?} but {mapped:?} maps back to {returned:?}")]
    NonInvolutivePlugboard { symbol: char, mapped: char, returned: char },
}

/// Failures reported by the account directory.
///
/// Login deliberately has a single failure variant so a caller cannot tell an
/// unknown username from a wrong password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Your information is invalid.")]
    InvalidCredentials,

    #[error("username is already registered")]
    UsernameTaken,

    #[error("username must be at least {0} characters long")]
    UsernameTooShort(usize),

    #[error("password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range_input() {
        let err = CipherError::OutOfRangeInput { position: 4, found: '~' };
        assert_eq!(err.to_string(), "character '~' at position 4 is outside the cipher alphabet (' '..='}')");
    }

    #[test]
    fn test_display_out_of_range_plug() {
        let err = CipherError::OutOfRangePlug { side: PlugSide::B, position: 0, found: '\n' };
        assert_eq!(err.to_string(), "plug B character '\\n' at position 0 is outside the cipher alphabet");
    }

    #[test]
    fn test_display_non_involutive() {
        let err = CipherError::NonInvolutivePlugboard { symbol: 'c', mapped: 'b', returned: 'a' };
        assert_eq!(err.to_string(), "plugboard is not symmetric: 'c' maps to 'b' but 'b' maps back to 'a'");
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Your information is invalid.");
    }
}
