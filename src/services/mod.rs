//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic to fulfill application use cases.
//! Handlers depend on the trait, not the implementation.

mod user_service;

pub use user_service::{UserRegistry, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
