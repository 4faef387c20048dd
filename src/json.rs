//! Typed access to JSON-valued registries.
//!
//! The default registry stores [`serde_json::Value`] so any state can hold
//! any shape. These helpers convert at the call site.

use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

impl Registry<Value> {
    /// Add a state whose initial value is `value` serialized to JSON.
    pub fn add_json(&mut self, id: impl Into<String>, value: &impl Serialize) -> Result<&mut Self> {
        let value = serde_json::to_value(value).map_err(reported)?;
        Ok(self.add(id, value))
    }

    /// Set a state to `value` serialized to JSON.
    pub fn set_json(&mut self, id: &str, value: &impl Serialize) -> Result<&mut Self> {
        let value = serde_json::to_value(value).map_err(reported)?;
        Ok(self.set(id, value))
    }

    /// Current value of a state, deserialized into `U`.
    ///
    /// Returns `Ok(None)` for an unknown ID.
    pub fn get_as<U: DeserializeOwned>(&self, id: &str) -> Result<Option<U>> {
        match self.get(id) {
            Some(value) => U::deserialize(value)
                .map(Some)
                .map_err(|e| {
                    let e = RegistryError::Deserialization(e.to_string());
                    e.report();
                    e
                }),
            None => Ok(None),
        }
    }
}

/// Log a serialization failure before handing it back.
fn reported(e: serde_json::Error) -> RegistryError {
    let e = RegistryError::from(e);
    e.report();
    e
}
