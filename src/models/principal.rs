// SPDX-License-Identifier: MIT

//! Resolved identity handed to downstream authorization logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRecord;

/// Identity resolved from a bearer token.
///
/// A principal is structurally complete regardless of how much the token
/// carried. Tokens holding only a subject id produce a *minimal* principal
/// whose profile fields are fixed sentinels; callers never branch on which
/// shape they got.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// Build a full principal from a user record.
    pub fn full(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: user.is_active,
            is_verified: user.is_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }

    /// Build a degraded-but-valid principal from a bare subject id.
    ///
    /// The sentinel profile is fixed: minimal principals are always
    /// active and never verified, so they pass the active gate. Downstream
    /// code relies on that; do not tighten it here.
    pub fn minimal(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: "unknown".to_string(),
            email: "unknown@example.com".to_string(),
            first_name: "Unknown".to_string(),
            last_name: "User".to_string(),
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}
