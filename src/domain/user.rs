//! User domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

/// Registered user.
///
/// Immutable once created; the credential is whatever the hasher produced
/// under the mode in effect at registration time.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    email: String,
    stored_credential: String,
}

// Don't expose the credential in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("stored_credential", &"[REDACTED]")
            .finish()
    }
}

impl User {
    pub fn new(name: String, email: String, stored_credential: String) -> Self {
        Self {
            name,
            email,
            stored_credential,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn stored_credential(&self) -> &str {
        &self.stored_credential
    }
}

/// User response returned by the registration and listing endpoints.
///
/// Note: this includes the stored credential, never the plaintext.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User display name
    #[schema(example = "Alice")]
    pub name: String,
    /// User email address
    #[schema(example = "alice@x.com")]
    pub email: String,
    /// bcrypt string in secure mode, 40-char SHA-1 hex in insecure mode
    #[schema(example = "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW")]
    pub stored_credential: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            stored_credential: user.stored_credential,
        }
    }
}
