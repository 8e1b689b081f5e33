//! In-memory account directory.
//!
//! Stores salted password hashes for registered accounts and answers login
//! attempts. It has no connection to the cipher.
//!
//! Login failures are indistinguishable: an unknown username and a wrong
//! password produce the same [`AuthError::InvalidCredentials`], and an unknown
//! username is still checked against a decoy hash so both paths do the same
//! work.

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::config::{PASSWORD_MIN_LENGTH, USERNAME_MIN_LENGTH};
use crate::error::AuthError;
use crate::secret::Secret;

mod hasher;

pub use hasher::PasswordHash;

/// Fields submitted to [`Directory::register`].
#[derive(Debug)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: Secret,
}

/// The public view of an account. Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

struct StoredAccount {
    account: Account,
    password: PasswordHash,
}

pub struct Directory {
    accounts: HashMap<String, StoredAccount>,
    decoy: PasswordHash,
}

impl Directory {
    /// Creates an empty directory.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Hashing`] if the decoy hash cannot be derived.
    pub fn new() -> Result<Self, AuthError> {
        Ok(Self { accounts: HashMap::new(), decoy: PasswordHash::new(b"decoy password")? })
    }

    /// Registers an account and returns its public record.
    ///
    /// The plaintext password is consumed; only its salted hash is kept.
    ///
    /// # Errors
    ///
    /// - [`AuthError::UsernameTooShort`] / [`AuthError::PasswordTooShort`] on policy failure.
    /// - [`AuthError::UsernameTaken`] if the username is already registered.
    pub fn register(&mut self, registration: Registration) -> Result<Account, AuthError> {
        let Registration { username, email, first_name, last_name, password } = registration;
        let username = username.trim().to_owned();

        if username.chars().count() < USERNAME_MIN_LENGTH {
            return Err(AuthError::UsernameTooShort(USERNAME_MIN_LENGTH));
        }
        if password.expose_secret().chars().count() < PASSWORD_MIN_LENGTH {
            return Err(AuthError::PasswordTooShort(PASSWORD_MIN_LENGTH));
        }
        if self.accounts.contains_key(&username) {
            debug!("registration rejected: duplicate username");
            return Err(AuthError::UsernameTaken);
        }

        let hash = PasswordHash::new(password.expose_secret().as_bytes())?;
        let account = Account { username, email, first_name, last_name };
        self.accounts.insert(account.username.clone(), StoredAccount { account: account.clone(), password: hash });
        info!(username = %account.username, "registered account");

        Ok(account)
    }

    /// Checks credentials and returns the public record on success.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for any mismatch, whatever its cause.
    pub fn login(&self, username: &str, password: &Secret) -> Result<Account, AuthError> {
        let stored = self.accounts.get(username.trim());
        let hash = stored.map_or(&self.decoy, |s| &s.password);
        let matches = hash.verify(password.expose_secret().as_bytes())?;

        match stored {
            Some(stored) if matches => Ok(stored.account.clone()),
            _ => {
                debug!("login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
