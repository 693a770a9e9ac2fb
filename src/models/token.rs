// SPDX-License-Identifier: MIT

//! Token kinds and the bundle returned by authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::principal::Principal;

/// Bearer token kind. Access tokens live minutes, refresh tokens days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Tokens and identity returned by a successful authentication.
#[derive(Debug, Clone, Serialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    /// Always `"bearer"`
    pub token_type: String,
    /// Absolute expiry of the access token
    pub expires_at: DateTime<Utc>,
    pub principal: Principal,
}
