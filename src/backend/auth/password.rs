//! Password hashing and verification (bcrypt).
//!
//! bcrypt is deliberately slow, so both operations run on Tokio's blocking
//! thread pool instead of stalling the async workers.
//!
//! bcrypt only reads the first `MAX_PASSWORD_BYTES` bytes of its input. The
//! non-truncating variants are used so that longer passwords are refused
//! rather than silently cut short.

use crate::backend::error::BackendError;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Longest password bcrypt can hash without truncating it
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Salted one-way password hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The bcrypt cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password, producing a self-describing `$2b$...` string
    ///
    /// Fails with `BcryptError::Truncation` for passwords longer than
    /// `MAX_PASSWORD_BYTES`.
    pub async fn hash(&self, password: &str) -> Result<String, BackendError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hash =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
                .await??;
        Ok(hash)
    }

    /// Check a password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch, including passwords too long to have
    /// been stored, and `Err` only when the stored hash cannot be parsed.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, BackendError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let result =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash))
                .await?;

        match result {
            Ok(valid) => Ok(valid),
            Err(bcrypt::BcryptError::Truncation(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
