// SPDX-License-Identifier: MIT

//! Registration and authentication against a caller-owned user store.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::error::{AuthError, Result};
use crate::models::{Credentials, NewUser, Principal, ProfileUpdate, TokenBundle, TokenKind, UserRecord};
use crate::password::PasswordHasher;
use crate::token::TokenCodec;

/// User record store owned by the embedding layer.
///
/// The authority composes these calls but never commits: the uniqueness
/// probe, the insert and the last-login update must run inside the
/// caller's transaction, otherwise the probe races the insert.
pub trait UserStore {
    /// Look up a record whose username or email matches either argument.
    /// Case handling is the store's collation concern.
    fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<UserRecord>>;

    /// Stage a new record.
    fn insert(&mut self, record: &UserRecord) -> Result<()>;

    /// Record a successful login.
    fn update_last_login(&mut self, id: Uuid, at: chrono::DateTime<Utc>) -> Result<()>;
}

/// Orchestrates registration, authentication and credential changes.
#[derive(Clone)]
pub struct CredentialAuthority {
    hasher: PasswordHasher,
    codec: TokenCodec,
    password_min_length: usize,
}

impl CredentialAuthority {
    pub fn new(config: &Config) -> Self {
        Self {
            hasher: PasswordHasher::new(config),
            codec: TokenCodec::new(config),
            password_min_length: config.password_min_length,
        }
    }

    /// The token codec this authority signs with, for composing a resolver.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Register a new user.
    ///
    /// Validates the candidate, probes username and email uniqueness in a
    /// single store query, hashes the password and stages the record.
    /// Committing is the caller's transaction boundary. The conflict error
    /// never says which field collided.
    pub fn register<S: UserStore>(&self, store: &mut S, candidate: &NewUser) -> Result<UserRecord> {
        candidate
            .validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        self.check_password_policy(&candidate.password)?;

        if store
            .find_by_username_or_email(&candidate.username, &candidate.email)?
            .is_some()
        {
            return Err(AuthError::Conflict);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            username: candidate.username.clone(),
            email: candidate.email.clone(),
            password_hash: self.hasher.hash(&candidate.password)?,
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
            last_login: None,
        };
        store.insert(&record)?;

        tracing::info!(user = %record.id, "registered new user");
        Ok(record)
    }

    /// Authenticate by username or email and issue a token bundle.
    ///
    /// Unknown identifier and wrong password produce the same outcome so
    /// callers cannot enumerate accounts.
    pub fn authenticate<S: UserStore>(
        &self,
        store: &mut S,
        credentials: &Credentials,
    ) -> Result<TokenBundle> {
        let user = store
            .find_by_username_or_email(&credentials.identifier, &credentials.identifier)?;

        let Some(mut user) = user else {
            tracing::debug!("authentication failed: unknown identifier");
            return Err(AuthError::AuthFailure);
        };
        if !self.hasher.verify(&credentials.password, &user.password_hash) {
            tracing::debug!(user = %user.id, "authentication failed: bad password");
            return Err(AuthError::AuthFailure);
        }

        let now = Utc::now();
        store.update_last_login(user.id, now)?;
        user.last_login = Some(now);

        let access_token = self.codec.issue(user.id, TokenKind::Access)?;
        let refresh_token = self.codec.issue(user.id, TokenKind::Refresh)?;

        tracing::info!(user = %user.id, "authenticated user");
        Ok(TokenBundle {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
            expires_at: self.codec.access_expiry(),
            principal: Principal::full(&user),
        })
    }

    /// Replace a user's password, verifying the current one first.
    ///
    /// Returns the updated record; persisting it is the caller's concern.
    pub fn change_password(
        &self,
        user: &UserRecord,
        current: &str,
        new_password: &str,
        confirm: &str,
    ) -> Result<UserRecord> {
        if !self.hasher.verify(current, &user.password_hash) {
            return Err(AuthError::Validation(
                "Current password is incorrect".to_string(),
            ));
        }
        if new_password != confirm {
            return Err(AuthError::Validation(
                "New password and confirmation do not match".to_string(),
            ));
        }
        if new_password == current {
            return Err(AuthError::Validation(
                "New password must be different from current password".to_string(),
            ));
        }
        self.check_password_policy(new_password)?;

        let mut updated = user.clone();
        updated.password_hash = self.hasher.hash(new_password)?;
        updated.touch();

        tracing::info!(user = %updated.id, "changed user password");
        Ok(updated)
    }

    /// Apply a partial profile update, refreshing `updated_at`.
    ///
    /// Username/email uniqueness of the changed values is re-checked by
    /// the caller's transaction, like registration.
    pub fn update_profile(&self, user: &UserRecord, changes: &ProfileUpdate) -> Result<UserRecord> {
        changes
            .validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let mut updated = user.clone();
        if let Some(username) = &changes.username {
            updated.username = username.clone();
        }
        if let Some(email) = &changes.email {
            updated.email = email.clone();
        }
        if let Some(first_name) = &changes.first_name {
            updated.first_name = first_name.clone();
        }
        if let Some(last_name) = &changes.last_name {
            updated.last_name = last_name.clone();
        }
        updated.touch();
        Ok(updated)
    }

    /// Password strength policy: configured minimum length plus the
    /// character-class requirements of the registration contract.
    fn check_password_policy(&self, password: &str) -> Result<()> {
        // Character count, not byte count: multibyte characters each count once.
        if password.chars().count() < self.password_min_length {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(AuthError::Validation(
                "Password must contain at least one uppercase letter".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(AuthError::Validation(
                "Password must contain at least one lowercase letter".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AuthError::Validation(
                "Password must contain at least one digit".to_string(),
            ));
        }
        if !password.chars().any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)) {
            return Err(AuthError::Validation(
                "Password must contain at least one special character".to_string(),
            ));
        }
        Ok(())
    }
}
