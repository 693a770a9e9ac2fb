// SPDX-License-Identifier: MIT

//! User records and registration/login input shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A user record as held by the caller-owned store.
///
/// The authority stages new records and returns mutated copies; it never
/// commits them. `password_hash` is always a salted bcrypt digest, never
/// the plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque 128-bit identifier, generated at registration
    pub id: Uuid,
    /// Globally unique username
    pub username: String,
    /// Globally unique email address
    pub email: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Accounts are disabled rather than deleted
    pub is_active: bool,
    /// Email verification status (verification flow lives outside this crate)
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set on each successful authentication
    pub last_login: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Refresh `updated_at` after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Registration candidate.
///
/// Field-shape validation mirrors the public registration contract:
/// username 3-50 chars, names 1-50 chars, well-formed email, password at
/// most 128 chars and matching its confirmation. Password strength and the
/// configured minimum length are enforced by the authority on top of this.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,
    #[validate(email(message = "email address is not valid"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "first name must be 1-50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "last name must be 1-50 characters"))]
    pub last_name: String,
    #[validate(length(max = 128, message = "password must be at most 128 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
}

/// Ephemeral login input pair. Never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Username or email address
    pub identifier: String,
    pub password: String,
}

/// Partial profile update applied to an existing record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "email address is not valid"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 50, message = "first name must be 1-50 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "last name must be 1-50 characters"))]
    pub last_name: Option<String>,
}
