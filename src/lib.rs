//! RotorCrypt - a reversible rotor-and-plugboard text cipher.
//!
//! Encodes and decodes strings of printable ASCII (`' '` through `'}'`) using:
//! - A plugboard of symmetric character swaps
//! - A rotor whose shift is fed back from each ciphertext symbol
//! - A length-dependent processing order for the rotor steps
//!
//! This is an educational transform; it offers no real secrecy.
//!
//! ```
//! use rotorcrypt::{decode, encode};
//!
//! let secret = encode("Hello, World!", Some("lo"), Some("01")).unwrap();
//! assert_eq!(decode(&secret, Some("lo"), Some("01")).unwrap(), "Hello, World!");
//! ```

pub mod app;
pub mod auth;
pub mod cipher;
pub mod config;
pub mod error;
pub mod secret;
pub mod types;
pub mod ui;
pub mod worker;

pub use cipher::{convert, decode, encode};
pub use error::{AuthError, CipherError};
pub use types::Direction;
