//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::UserResponse;

/// OpenAPI documentation for the user registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry",
        version = "0.1.0",
        description = "In-memory user registry with switchable secure (bcrypt) and insecure (SHA-1) password storage",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        health_handler::health_check,
        user_handler::signup,
        user_handler::list_users,
        user_handler::set_mode,
    ),
    components(
        schemas(
            UserResponse,
            user_handler::SignupRequest,
            user_handler::ModeRequest,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Registration, listing and hashing mode"),
        (name = "Health", description = "Service status")
    )
)]
pub struct ApiDoc;
