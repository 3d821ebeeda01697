//! Domain layer - Core business entities and logic
//!
//! Contains the credential hashing policy and the user entity.
//! No HTTP or runtime concerns live here.

pub mod credential;
pub mod user;

pub use credential::{CredentialFormat, CredentialHasher, HashMode};
pub use user::{User, UserResponse};
