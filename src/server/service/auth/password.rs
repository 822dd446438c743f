//! PBKDF2-HMAC-SHA256 password hashing.
//!
//! Hashes are stored as `pbkdf2_sha256${iterations}${salt}${hash}` with base64 salt and hash, so
//! raising the iteration count only affects newly hashed passwords.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::server::error::Error;

const ALGORITHM: &str = "pbkdf2_sha256";
const SALT_SIZE: usize = 16;
const HASH_SIZE: usize = 32;

#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    iterations: u32,
}

impl PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    pub fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_SIZE];
        rand::rng().fill_bytes(&mut salt);

        let mut hash = [0u8; HASH_SIZE];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, self.iterations, &mut hash);

        format!(
            "{}${}${}${}",
            ALGORITHM,
            self.iterations,
            STANDARD.encode(salt),
            STANDARD.encode(hash)
        )
    }

    /// Checks `password` against a stored hash, malformed hashes never verify
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let mut parts = stored.split('$');

        let (Some(ALGORITHM), Some(iterations), Some(salt), Some(expected), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return false;
        };

        let (Ok(iterations), Ok(salt), Ok(expected)) = (
            iterations.parse::<u32>(),
            STANDARD.decode(salt),
            STANDARD.decode(expected),
        ) else {
            return false;
        };

        if iterations == 0 || expected.is_empty() {
            return false;
        }

        let mut hash = vec![0u8; expected.len()];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut hash);

        constant_time_eq(&hash, &expected)
    }

    /// Hashes on the blocking pool, key derivation is deliberately slow
    pub async fn hash_async(&self, password: &str) -> Result<String, Error> {
        let hasher = *self;
        let password = password.to_string();

        Ok(tokio::task::spawn_blocking(move || hasher.hash(&password)).await?)
    }

    /// Verifies on the blocking pool
    pub async fn verify_async(&self, password: &str, stored: &str) -> Result<bool, Error> {
        let hasher = *self;
        let password = password.to_string();
        let stored = stored.to_string();

        Ok(tokio::task::spawn_blocking(move || hasher.verify(&password, &stored)).await?)
    }
}

/// Compares two byte strings without short-circuiting on the first difference
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
