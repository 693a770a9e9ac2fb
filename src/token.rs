// SPDX-License-Identifier: MIT

//! Signed bearer token codec.
//!
//! Tokens are compact JWTs carrying `{sub, exp, token_type}` signed with a
//! symmetric secret. They are self-verifying: validity is purely a function
//! of signature and expiry, so verification needs no store round-trip.
//! Revocation before natural expiry is out of scope here; an external
//! blacklist is the place to add it.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AuthError, Result};
use crate::models::TokenKind;

/// JWT claims structure.
///
/// `sub`, `exp` and `token_type` form the wire contract. The optional
/// identity fields are accepted on decode for forward compatibility with
/// richer upstream tokens; this codec never emits them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id as a UUID string)
    pub sub: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: usize,
    /// Token kind ("access" | "refresh")
    pub token_type: TokenKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// Issues and verifies signed, expiring, typed tokens.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            algorithm: config.jwt_algorithm,
            access_ttl: Duration::minutes(config.access_ttl_minutes),
            refresh_ttl: Duration::days(config.refresh_ttl_days),
        }
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// Issue a signed token for a subject, expiring `now + TTL(kind)`.
    pub fn issue(&self, subject: Uuid, kind: TokenKind) -> Result<String> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + self.ttl(kind)).timestamp() as usize,
            token_type: kind,
            username: None,
            email: None,
            first_name: None,
            last_name: None,
            is_active: None,
            is_verified: None,
        };

        jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(anyhow::anyhow!("jwt encode: {e}")))
    }

    /// Decode and validate a token, returning its claims.
    ///
    /// Bad signature, algorithm mismatch, missing claims and past expiry
    /// all collapse to `None`; malformed input never escapes as an error.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        let validation = Validation::new(self.algorithm);
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .ok()
            .map(|data| data.claims)
    }

    /// Verify a token and return its subject id.
    ///
    /// A `sub` claim that is present but not a well-formed UUID is invalid,
    /// not a different kind of principal.
    pub fn verify(&self, token: &str) -> Option<Uuid> {
        self.decode(token)
            .and_then(|claims| Uuid::parse_str(&claims.sub).ok())
    }

    /// Absolute expiry an access token issued now would carry.
    pub fn access_expiry(&self) -> DateTime<Utc> {
        Utc::now() + self.access_ttl
    }
}
