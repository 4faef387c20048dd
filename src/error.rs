//! Error types for the state registry.

use thiserror::Error;

/// Main error type for registry operations.
///
/// The chaining API (`add`, `set`, `undo`, ...) never returns these; it logs
/// them and leaves the registry unchanged. The `try_*` methods hand them back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("State already exists: {0}")]
    StateExists(String),

    #[error("State not registered: {0}")]
    StateNotRegistered(String),

    #[error("Listener already registered for state: {0}")]
    ListenerExists(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl RegistryError {
    /// Log this error as a registry diagnostic.
    ///
    /// Duplicate registration is informational, everything else is an error.
    pub(crate) fn report(&self) {
        match self {
            RegistryError::StateExists(id) => {
                tracing::info!(state_id = %id, "{}", self);
            }
            RegistryError::StateNotRegistered(id) | RegistryError::ListenerExists(id) => {
                tracing::error!(state_id = %id, "{}", self);
            }
            RegistryError::Serialization(_) | RegistryError::Deserialization(_) => {
                tracing::error!("{}", self);
            }
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
