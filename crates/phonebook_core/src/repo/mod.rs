//! Persistence boundary for the contact collection.
//!
//! # Responsibility
//! - Define the repository contract the controller's effects run against.
//! - Provide the HTTP-backed and in-memory implementations.

pub mod contact_repo;
pub mod memory_repo;

pub use contact_repo::{ContactRepository, HttpContactRepository, RepoError, RepoResult};
pub use memory_repo::MemoryContactRepository;
