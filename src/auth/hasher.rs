//! Salted Argon2id password hashes.
//!
//! Each hash carries its own random salt. Verification re-derives the hash
//! with that salt and compares in constant time.

use argon2::Algorithm::Argon2id;
use argon2::Version::V0x13;
use argon2::{Argon2, Params};
use rand::Rng;
use subtle::ConstantTimeEq;

use crate::config::{ARGON_MEMORY, ARGON_THREADS, ARGON_TIME, PASSWORD_HASH_LEN, PASSWORD_SALT_LEN};
use crate::error::AuthError;

/// A stored password: salt plus derived hash. Never leaves the directory.
#[derive(Clone)]
pub struct PasswordHash {
    salt: [u8; PASSWORD_SALT_LEN],
    hash: [u8; PASSWORD_HASH_LEN],
}

impl PasswordHash {
    /// Hashes `password` under a fresh random salt.
    pub fn new(password: &[u8]) -> Result<Self, AuthError> {
        let salt = generate_salt();
        let hash = derive(password, &salt)?;
        Ok(Self { salt, hash })
    }

    /// Checks `password` against the stored hash.
    ///
    /// Always performs the full derivation and a constant-time comparison.
    pub fn verify(&self, password: &[u8]) -> Result<bool, AuthError> {
        let candidate = derive(password, &self.salt)?;
        Ok(bool::from(candidate[..].ct_eq(&self.hash[..])))
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

fn derive(password: &[u8], salt: &[u8]) -> Result<[u8; PASSWORD_HASH_LEN], AuthError> {
    let params = Params::new(ARGON_MEMORY, ARGON_TIME, ARGON_THREADS, Some(PASSWORD_HASH_LEN)).map_err(|e| AuthError::Hashing(format!("invalid argon2 parameter: {e}")))?;
    let argon2 = Argon2::new(Argon2id, V0x13, params);

    let mut hash = [0u8; PASSWORD_HASH_LEN];
    argon2.hash_password_into(password, salt, &mut hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
    Ok(hash)
}

fn generate_salt() -> [u8; PASSWORD_SALT_LEN] {
    let mut salt = [0u8; PASSWORD_SALT_LEN];
    rand::rng().fill(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_original_password() {
        let hash = PasswordHash::new(b"correct horse").unwrap();
        assert!(hash.verify(b"correct horse").unwrap());
    }

    #[test]
    fn test_verify_rejects_other_password() {
        let hash = PasswordHash::new(b"correct horse").unwrap();
        assert!(!hash.verify(b"correct horsf").unwrap());
        assert!(!hash.verify(b"").unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let first = PasswordHash::new(b"password123").unwrap();
        let second = PasswordHash::new(b"password123").unwrap();
        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn test_derive_is_deterministic_for_fixed_salt() {
        let salt = [7u8; PASSWORD_SALT_LEN];
        assert_eq!(derive(b"pw", &salt).unwrap(), derive(b"pw", &salt).unwrap());
    }

    #[test]
    fn test_debug_is_redacted() {
        let hash = PasswordHash::new(b"password123").unwrap();
        assert_eq!(format!("{hash:?}"), "PasswordHash([REDACTED])");
    }
}
