// SPDX-License-Identifier: MIT

//! Authority configuration loaded from environment variables.
//!
//! All signing material and policy knobs are read once at startup and
//! passed explicitly into each component constructor. No component does
//! ambient environment lookups after construction.

use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

/// Process-wide authority configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symmetric JWT signing secret (raw bytes)
    pub jwt_secret: Vec<u8>,
    /// JWT signing algorithm (HS256 unless overridden)
    pub jwt_algorithm: Algorithm,
    /// Access token lifetime, minutes
    pub access_ttl_minutes: i64,
    /// Refresh token lifetime, days
    pub refresh_ttl_days: i64,
    /// Minimum accepted password length
    pub password_min_length: usize,
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            jwt_secret: b"test_jwt_secret_32_bytes_minimum".to_vec(),
            jwt_algorithm: Algorithm::HS256,
            access_ttl_minutes: 30,
            refresh_ttl_days: 7,
            password_min_length: 6,
            bcrypt_cost: 4, // minimum cost, keeps test suites fast
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only `JWT_SECRET_KEY` is required; everything else has a
    /// production-appropriate default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let jwt_algorithm = match env::var("JWT_ALGORITHM") {
            Ok(name) => Algorithm::from_str(&name)
                .map_err(|_| ConfigError::Invalid("JWT_ALGORITHM"))?,
            Err(_) => Algorithm::HS256,
        };

        Ok(Self {
            jwt_secret: env::var("JWT_SECRET_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SECRET_KEY"))?
                .into_bytes(),
            jwt_algorithm,
            access_ttl_minutes: env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            refresh_ttl_days: env::var("REFRESH_TOKEN_EXPIRE_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .unwrap_or(7),
            password_min_length: env::var("PASSWORD_MIN_LENGTH")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .unwrap_or(6),
            bcrypt_cost: env::var("BCRYPT_ROUNDS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .unwrap_or(12),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
