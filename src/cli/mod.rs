//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `hash` - Hash a password under either scheme
//! - `verify` - Check a password against a stored credential

pub mod args;

pub use args::{Cli, Commands};
