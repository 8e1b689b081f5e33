//! Global Configuration Constants
//!
//! This module contains every tunable used by rotorcrypt: the symbol alphabet
//! the rotor works over, the offsets the scheme initializer derives its shift
//! state from, batch worker sizing, and the password-hashing policy used by
//! the account directory.
//!
//! ## Alphabet
//!
//! The rotor arithmetic is modulo [`SYMBOL_COUNT`] over zero-based codes. The
//! alphabet is the 94 printable ASCII characters from `' '` (32) to `'}'`
//! (125). Code 126 (`'~'`) would wrap onto `' '` and is rejected.

/// Application name used in banners and the CLI.
pub const APP_NAME: &str = "RotorCrypt";

// === Symbol Alphabet ===

/// First character code accepted by the cipher (`' '`).
pub const FIRST_SYMBOL: u8 = 32;

/// Last character code accepted by the cipher (`'}'`).
pub const LAST_SYMBOL: u8 = 125;

/// Number of symbols in the alphabet; all rotor arithmetic wraps at this value.
pub const SYMBOL_COUNT: u8 = LAST_SYMBOL - FIRST_SYMBOL + 1;

// === Rotor Parameters ===
// The scheme initializer picks the starting shift state from the message
// length. Odd and even lengths swap which offset feeds `base_shift` and which
// feeds `shift`.

/// Modulus applied to the message length and to every re-seeded shift.
pub const SHIFT_MODULUS: usize = 7;

/// Larger initializer offset (`base_shift` for odd lengths, `shift` for even).
pub const WIDE_OFFSET: usize = 5;

/// Smaller initializer offset (`shift` for odd lengths, `base_shift` for even).
pub const NARROW_OFFSET: usize = 3;

/// Amount the shift grows on every step that is not a periodic reset.
pub const STEP_INCREMENT: usize = 3;

// === Batch Worker ===

/// Channel capacity per worker thread between reader, executor and writer.
///
/// Bounded channels give the reader natural backpressure when the executor
/// falls behind.
pub const BATCH_CHANNEL_FACTOR: usize = 4;

/// Fallback worker count when the platform cannot report its parallelism.
pub const DEFAULT_CONCURRENCY: usize = 4;

// === Account Directory (Argon2id) ===
// Interactive-login parameters. These are lighter than file-encryption
// parameters because a login has to answer in well under a second.

/// Argon2 time cost (iterations).
pub const ARGON_TIME: u32 = 2;

/// Argon2 memory cost in KiB (19 MiB).
pub const ARGON_MEMORY: u32 = 19 * 1024;

/// Argon2 parallelism (lanes).
pub const ARGON_THREADS: u32 = 1;

/// Length of the stored password hash in bytes.
pub const PASSWORD_HASH_LEN: usize = 32;

/// Length of the per-account random salt in bytes.
pub const PASSWORD_SALT_LEN: usize = 16;

/// Minimum username length accepted at registration.
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN_LENGTH: usize = 8;
