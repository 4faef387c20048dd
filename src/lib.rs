//! # Vigil
//!
//! An in-process observable state registry.
//!
//! ## Core Concepts
//!
//! - **States**: Named values, each with a linear undo history
//! - **Listeners**: Callbacks invoked synchronously with the new value on every change
//! - **Undo**: Pops the latest value and notifies listeners with the one beneath
//! - **Default registry**: A process-wide JSON registry for application-wide state
//!
//! ## Example
//!
//! ```ignore
//! use vigil::{Listener, Registry};
//!
//! let mut registry = Registry::new();
//! let log = Listener::new(|count: &i32| println!("count is now {}", count));
//!
//! registry
//!     .add_with_listeners("count", 0, log.clone())
//!     .set("count", 5) // prints "count is now 5"
//!     .undo("count"); // prints "count is now 0"
//!
//! assert_eq!(registry.get("count"), Some(&0));
//! registry.remove_listener("count", &log);
//! ```

pub mod error;
pub mod global;
pub mod json;
pub mod listeners;
pub mod registry;
pub mod state;

// Re-exports
pub use error::{RegistryError, Result};
pub use global::{default_registry, SharedRegistry};
pub use listeners::{Listener, ListenerList, Listeners};
pub use registry::{Registry, RegistryConfig, StateMut};
pub use state::ValueHistory;
