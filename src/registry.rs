//! The state registry: named values with undo history and change listeners.

use crate::error::{RegistryError, Result};
use crate::listeners::{Listener, ListenerList, Listeners};
use crate::state::ValueHistory;
use std::collections::HashMap;

/// Registry configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Max values retained per state, current value included.
    /// Default: None (unbounded)
    pub history_limit: Option<usize>,
}

/// History and listeners of one state. Kept together so a state can never
/// have one without the other.
#[derive(Debug)]
struct StateSlot<T> {
    history: ValueHistory<T>,
    listeners: ListenerList<T>,
}

impl<T> StateSlot<T> {
    fn set(&mut self, value: T) {
        self.history.push(value);
        self.listeners.notify(self.history.current());
    }

    /// Pop the current value and notify. Returns false at the initial value.
    fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        self.listeners.notify(self.history.current());
        true
    }
}

/// Observable state container.
///
/// Each state is addressed by a string ID and holds a linear history of
/// values. Setting a value pushes onto the history; undoing pops it. Both
/// call the state's listeners synchronously, in registration order, with
/// the new current value.
///
/// Mutating methods return `&mut Self` so calls can be chained. Misuse
/// (duplicate add, unknown ID, duplicate listener) is logged and ignored;
/// use the `try_*` variants to observe it as a [`RegistryError`].
///
/// A panicking listener unwinds out of `set`/`undo`. The value change has
/// already been applied by then and is not rolled back.
#[derive(Debug)]
pub struct Registry<T> {
    /// Registry configuration.
    config: RegistryConfig,

    /// Registered states by ID.
    states: HashMap<String, StateSlot<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            states: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // --- Registration ---

    /// Add a state with no listeners.
    pub fn add(&mut self, id: impl Into<String>, initial_value: T) -> &mut Self {
        self.add_with_listeners(id, initial_value, ())
    }

    /// Add a state together with its initial listeners.
    ///
    /// `listeners` may be `()`, a single [`Listener`], or a `Vec` of them.
    /// If the ID is already registered nothing changes.
    pub fn add_with_listeners(
        &mut self,
        id: impl Into<String>,
        initial_value: T,
        listeners: impl Into<Listeners<T>>,
    ) -> &mut Self {
        if let Err(e) = self.try_add_with_listeners(id, initial_value, listeners) {
            e.report();
        }
        self
    }

    /// Add a state with no listeners, failing if the ID exists.
    pub fn try_add(&mut self, id: impl Into<String>, initial_value: T) -> Result<()> {
        self.try_add_with_listeners(id, initial_value, ())
    }

    /// Add a state with listeners, failing if the ID exists.
    pub fn try_add_with_listeners(
        &mut self,
        id: impl Into<String>,
        initial_value: T,
        listeners: impl Into<Listeners<T>>,
    ) -> Result<()> {
        let id = id.into();
        if self.states.contains_key(&id) {
            return Err(RegistryError::StateExists(id));
        }

        let slot = StateSlot {
            history: ValueHistory::with_limit(initial_value, self.config.history_limit),
            listeners: ListenerList::from(listeners.into()),
        };
        tracing::debug!(state_id = %id, listeners = slot.listeners.len(), "state added");
        self.states.insert(id, slot);

        Ok(())
    }

    /// Remove a state, its history and its listeners. Unknown IDs are ignored.
    pub fn remove(&mut self, id: &str) -> &mut Self {
        if self.states.remove(id).is_some() {
            tracing::debug!(state_id = %id, "state removed");
        }
        self
    }

    /// Remove every state.
    pub fn clear(&mut self) -> &mut Self {
        self.states.clear();
        self
    }

    // --- Values ---

    /// Current value of a state.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.states.get(id).map(|slot| slot.history.current())
    }

    /// Push a new value and notify listeners.
    pub fn set(&mut self, id: &str, value: T) -> &mut Self {
        if let Err(e) = self.try_set(id, value) {
            e.report();
        }
        self
    }

    /// Push a new value and notify listeners, failing on an unknown ID.
    pub fn try_set(&mut self, id: &str, value: T) -> Result<()> {
        self.slot_mut(id)?.set(value);
        Ok(())
    }

    /// Revert to the previous value and notify listeners.
    ///
    /// Does nothing when the state holds only its initial value.
    pub fn undo(&mut self, id: &str) -> &mut Self {
        if let Err(e) = self.try_undo(id) {
            e.report();
        }
        self
    }

    /// Revert to the previous value, returning whether anything changed.
    pub fn try_undo(&mut self, id: &str) -> Result<bool> {
        let reverted = self.slot_mut(id)?.undo();
        if !reverted {
            tracing::debug!(state_id = %id, "nothing to undo");
        }
        Ok(reverted)
    }

    // --- Listeners ---

    /// Register a listener to be called after previously registered ones.
    pub fn add_listener(&mut self, id: &str, listener: Listener<T>) -> &mut Self {
        if let Err(e) = self.try_add_listener(id, listener) {
            e.report();
        }
        self
    }

    /// Register a listener, failing on an unknown ID or a duplicate handle.
    pub fn try_add_listener(&mut self, id: &str, listener: Listener<T>) -> Result<()> {
        if self.slot_mut(id)?.listeners.insert(listener) {
            Ok(())
        } else {
            Err(RegistryError::ListenerExists(id.to_string()))
        }
    }

    /// Remove one occurrence of a listener. Missing listeners are ignored.
    pub fn remove_listener(&mut self, id: &str, listener: &Listener<T>) -> &mut Self {
        self.try_remove_listener(id, listener);
        self
    }

    /// Remove one occurrence of a listener, returning whether one was found.
    pub fn try_remove_listener(&mut self, id: &str, listener: &Listener<T>) -> bool {
        match self.states.get_mut(id) {
            Some(slot) => slot.listeners.remove(listener),
            None => {
                tracing::debug!(state_id = %id, "remove_listener on unknown state");
                false
            }
        }
    }

    // --- Introspection ---

    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Retained values of a state, oldest first.
    pub fn history(&self, id: &str) -> Option<&[T]> {
        self.states.get(id).map(|slot| slot.history.as_slice())
    }

    pub fn history_len(&self, id: &str) -> Option<usize> {
        self.states.get(id).map(|slot| slot.history.len())
    }

    pub fn listener_count(&self, id: &str) -> Option<usize> {
        self.states.get(id).map(|slot| slot.listeners.len())
    }

    /// IDs of all registered states, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Accessor bound to one registered state.
    pub fn state(&mut self, id: &str) -> Option<StateMut<'_, T>> {
        self.states.get_mut(id).map(|slot| StateMut {
            id: id.to_string(),
            slot,
        })
    }

    fn slot_mut(&mut self, id: &str) -> Result<&mut StateSlot<T>> {
        self.states
            .get_mut(id)
            .ok_or_else(|| RegistryError::StateNotRegistered(id.to_string()))
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable handle to a single state, obtained from [`Registry::state`].
///
/// Reads and writes through the handle behave exactly like the
/// corresponding registry calls with the handle's ID.
pub struct StateMut<'a, T> {
    id: String,
    slot: &'a mut StateSlot<T>,
}

impl<'a, T> StateMut<'a, T> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current value.
    pub fn get(&self) -> &T {
        self.slot.history.current()
    }

    /// Push a new value and notify listeners.
    pub fn set(&mut self, value: T) -> &mut Self {
        self.slot.set(value);
        self
    }

    /// Revert to the previous value. Returns false at the initial value.
    pub fn undo(&mut self) -> bool {
        self.slot.undo()
    }

    pub fn history(&self) -> &[T] {
        self.slot.history.as_slice()
    }

    /// Register a listener; duplicates are logged and ignored.
    pub fn add_listener(&mut self, listener: Listener<T>) -> &mut Self {
        if !self.slot.listeners.insert(listener) {
            RegistryError::ListenerExists(self.id.clone()).report();
        }
        self
    }

    /// Remove one occurrence of a listener.
    pub fn remove_listener(&mut self, listener: &Listener<T>) -> &mut Self {
        self.slot.listeners.remove(listener);
        self
    }
}
