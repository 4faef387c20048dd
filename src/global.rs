//! Process-wide default registry and shared handles.
//!
//! The default registry is created on first use and lives for the rest of
//! the process. Listeners must not lock the registry they are registered
//! on: dispatch happens while the lock is held.

use crate::registry::Registry;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// A registry shared between owners.
pub type SharedRegistry<T> = Arc<Mutex<Registry<T>>>;

static DEFAULT_REGISTRY: OnceLock<Mutex<Registry<Value>>> = OnceLock::new();

/// The process-wide JSON registry.
pub fn default_registry() -> &'static Mutex<Registry<Value>> {
    DEFAULT_REGISTRY.get_or_init(|| {
        tracing::debug!("default registry initialized");
        Mutex::new(Registry::new())
    })
}

impl<T> Registry<T> {
    /// Wrap this registry for sharing between owners.
    pub fn into_shared(self) -> SharedRegistry<T> {
        Arc::new(Mutex::new(self))
    }
}
