//! User Registry - switchable password storage demo
//!
//! An in-memory user registry that stores each password either as a
//! salted bcrypt hash (secure mode) or as an unsalted SHA-1 hex digest
//! (insecure mode). The mode can be flipped at runtime and only affects
//! users registered afterwards.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Credential hashing policy and the user entity
//! - **services**: The in-memory user registry
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Hash a password with the weak scheme
//! cargo run -- hash hunter2 --insecure
//!
//! # Check a password against a stored credential
//! cargo run -- verify hunter2 'f3bbbd66a63d4bf1747940578ec3d0103530e21d'
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CredentialFormat, CredentialHasher, HashMode, User};
pub use errors::{AppError, AppResult};
pub use services::{UserRegistry, UserService};
