// SPDX-License-Identifier: MIT

//! Tokensmith: a stateless credential and bearer-token authority.
//!
//! This crate owns the identity lifecycle of an application while leaving
//! persistence and transport to the embedder: it registers users against a
//! caller-owned record store, verifies credentials with bcrypt, issues
//! signed access/refresh JWTs, and resolves bearer tokens back into
//! principals, including a degraded minimal-principal path for tokens
//! that carry only a subject id.
//!
//! Typical wiring:
//!
//! ```no_run
//! use tokensmith::{Config, CredentialAuthority, PrincipalResolver};
//!
//! let config = Config::from_env().expect("authority configuration");
//! let authority = CredentialAuthority::new(&config);
//! let resolver = PrincipalResolver::new(authority.codec().clone());
//! ```

pub mod authority;
pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod resolver;
pub mod store;
pub mod token;

pub use authority::{CredentialAuthority, UserStore};
pub use config::{Config, ConfigError};
pub use error::{AuthError, Result};
pub use models::{Credentials, NewUser, Principal, ProfileUpdate, TokenBundle, TokenKind, UserRecord};
pub use password::PasswordHasher;
pub use resolver::PrincipalResolver;
pub use store::MemoryStore;
pub use token::{Claims, TokenCodec};
