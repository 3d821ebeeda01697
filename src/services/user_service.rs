//! User service - In-memory user registry.
//!
//! Owns the registered users and the hashing mode. The mode is passed
//! explicitly into every hash call; it is never ambient state.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::domain::{CredentialHasher, HashMode, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Hash the password under the current mode and append a new user
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Snapshot of all users in registration order
    async fn list_all(&self) -> Vec<User>;

    /// Change the mode for subsequent registrations
    async fn set_mode(&self, mode: HashMode);

    /// Current mode
    async fn mode(&self) -> HashMode;
}

struct RegistryState {
    users: Vec<User>,
    mode: HashMode,
}

/// Concrete implementation of UserService backed by process memory.
///
/// One lock guards both the user list and the mode. `register` holds it
/// across the hash, so registrations and mode changes are serialized.
pub struct UserRegistry {
    hasher: CredentialHasher,
    state: Mutex<RegistryState>,
}

impl UserRegistry {
    /// Create an empty registry
    pub fn new(hasher: CredentialHasher, mode: HashMode) -> Self {
        Self {
            hasher,
            state: Mutex::new(RegistryState {
                users: Vec::new(),
                mode,
            }),
        }
    }

    /// Create an empty registry from configuration
    ///
    /// # Errors
    /// Returns a configuration error if the bcrypt cost is out of range.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let hasher = CredentialHasher::new(config.bcrypt_cost)?;
        Ok(Self::new(hasher, HashMode::from(config.secure_mode)))
    }

    /// Hasher used for new registrations
    pub fn hasher(&self) -> &CredentialHasher {
        &self.hasher
    }
}

#[async_trait]
impl UserService for UserRegistry {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Held from the mode read through the append so each call is atomic
        let mut state = self.state.lock().await;
        let mode = state.mode;

        let hasher = self.hasher;
        let stored_credential = tokio::task::spawn_blocking(move || hasher.hash(&password, mode))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))??;

        let user = User::new(name, email, stored_credential);
        state.users.push(user.clone());
        drop(state);

        tracing::info!(name = %user.name(), %mode, "User registered");
        Ok(user)
    }

    async fn list_all(&self) -> Vec<User> {
        self.state.lock().await.users.clone()
    }

    async fn set_mode(&self, mode: HashMode) {
        let mut state = self.state.lock().await;
        if state.mode != mode {
            match mode {
                HashMode::Secure => tracing::info!("Hashing mode set to secure"),
                HashMode::Insecure => {
                    tracing::warn!("Hashing mode set to insecure: unsalted SHA-1 for new users")
                }
            }
        }
        state.mode = mode;
    }

    async fn mode(&self) -> HashMode {
        self.state.lock().await.mode
    }
}
