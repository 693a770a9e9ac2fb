// SPDX-License-Identifier: MIT

//! Password hashing via bcrypt.
//!
//! The bcrypt cost factor is the only intentional latency floor in this
//! crate; it comes from [`Config`] and is fixed at construction.

use crate::config::Config;
use crate::error::{AuthError, Result};

/// Salted one-way password hasher.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: &Config) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hash a plaintext password. A fresh salt is embedded in each digest,
    /// so two hashes of the same input differ.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AuthError::Internal(anyhow::anyhow!("bcrypt hash: {e}")))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Returns false on mismatch and on malformed digests alike; a broken
    /// stored hash is "no match", not an error the caller has to handle.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&Config::default())
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = hasher();
        let digest = hasher.hash("SecurePass123!").unwrap();

        assert_ne!(digest, "SecurePass123!");
        assert!(hasher.verify("SecurePass123!", &digest));
        assert!(!hasher.verify("WrongPass123!", &digest));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = hasher();
        let a = hasher.hash("SecurePass123!").unwrap();
        let b = hasher.hash("SecurePass123!").unwrap();

        // Same input, different salts, both valid
        assert_ne!(a, b);
        assert!(hasher.verify("SecurePass123!", &a));
        assert!(hasher.verify("SecurePass123!", &b));
    }

    #[test]
    fn test_malformed_digest_is_no_match() {
        let hasher = hasher();

        assert!(!hasher.verify("SecurePass123!", "not-a-bcrypt-digest"));
        assert!(!hasher.verify("SecurePass123!", ""));
    }
}
