// SPDX-License-Identifier: MIT

//! User store implementations.
//!
//! The persistent store is owned by the embedder; this module only ships
//! the in-memory implementation used by tests and database-less setups.

pub mod memory;

pub use memory::MemoryStore;
