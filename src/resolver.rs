// SPDX-License-Identifier: MIT

//! Bearer token to principal resolution.
//!
//! Resolution works entirely off the token payload; there is no store
//! round-trip. Tokens carrying only a subject id (everything this crate
//! issues) resolve to a minimal principal with sentinel profile fields.
//! Tokens carrying a full identity payload resolve to a full principal.
//! A payload with a partial identity set is rejected outright.

use uuid::Uuid;

use crate::error::{AuthError, Result};
use crate::models::Principal;
use crate::token::{Claims, TokenCodec};

/// Reconstructs a principal from a bearer token.
#[derive(Clone)]
pub struct PrincipalResolver {
    codec: TokenCodec,
}

impl PrincipalResolver {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Resolve a bearer token into a principal.
    ///
    /// Invalid, expired or tampered tokens, and tokens whose subject is
    /// not a well-formed UUID, all map to `Unauthenticated`. A payload
    /// that carries some identity fields but not the full set is invalid
    /// too; the minimal path is reserved for bare-subject tokens.
    pub fn resolve(&self, token: &str) -> Result<Principal> {
        let claims = self
            .codec
            .decode(token)
            .ok_or(AuthError::Unauthenticated)?;

        let id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::Unauthenticated)?;

        if Self::carries_identity(&claims) {
            return Self::full_principal(id, &claims).ok_or(AuthError::Unauthenticated);
        }
        // Bare subject id: degraded-but-valid identity with sentinel profile.
        Ok(Principal::minimal(id))
    }

    /// Active-account gate, composable after [`resolve`](Self::resolve).
    ///
    /// Minimal principals always carry `active = true` and pass.
    pub fn require_active(&self, principal: Principal) -> Result<Principal> {
        if !principal.is_active {
            tracing::debug!(user = %principal.id, "rejected inactive principal");
            return Err(AuthError::Inactive);
        }
        Ok(principal)
    }

    /// Whether the payload carries any identity field beyond the subject.
    fn carries_identity(claims: &Claims) -> bool {
        claims.username.is_some()
            || claims.email.is_some()
            || claims.first_name.is_some()
            || claims.last_name.is_some()
            || claims.is_active.is_some()
            || claims.is_verified.is_some()
    }

    /// Build a full principal when the payload carries the whole identity
    /// field set. `None` when the set is incomplete.
    fn full_principal(id: Uuid, claims: &Claims) -> Option<Principal> {
        let now = chrono::Utc::now();
        Some(Principal {
            id,
            username: claims.username.clone()?,
            email: claims.email.clone()?,
            first_name: claims.first_name.clone()?,
            last_name: claims.last_name.clone()?,
            is_active: claims.is_active?,
            is_verified: claims.is_verified?,
            created_at: now,
            updated_at: now,
        })
    }
}
