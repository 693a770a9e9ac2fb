// SPDX-License-Identifier: MIT

//! Error taxonomy for the credential and token authority.
//!
//! Every failure in this crate is a typed, caller-recoverable outcome.
//! Nothing here is fatal to the process; the embedding layer maps these
//! to its own response shapes (4xx-class for the first five variants).

/// Authority error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Malformed or policy-violating input. Retry with corrected input.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Username or email uniqueness violation. The message never reveals
    /// which field collided.
    #[error("Username or email already exists")]
    Conflict,

    /// Bad identifier or bad password, deliberately undifferentiated so
    /// callers cannot enumerate accounts.
    #[error("Invalid username or password")]
    AuthFailure,

    /// Missing, malformed, or expired bearer token.
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// Valid identity, disabled account.
    #[error("Inactive user")]
    Inactive,

    /// Failure inside the caller-owned user record store.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for authority operations.
pub type Result<T> = std::result::Result<T, AuthError>;
