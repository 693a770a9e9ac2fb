// SPDX-License-Identifier: MIT

//! Data models for the credential and token authority.

pub mod principal;
pub mod token;
pub mod user;

pub use principal::Principal;
pub use token::{TokenBundle, TokenKind};
pub use user::{Credentials, NewUser, ProfileUpdate, UserRecord};
