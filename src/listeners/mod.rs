//! Listener handles and per-state listener lists.
//!
//! A [`Listener`] wraps a callback in a shared handle. Equality is identity
//! of that handle, so keep a clone of the listener you registered if you
//! want to remove it later:
//!
//! ```ignore
//! let on_change = Listener::new(|v: &i32| println!("now {}", v));
//! registry.add("count", 0).add_listener("count", on_change.clone());
//! registry.remove_listener("count", &on_change);
//! ```

mod list;
mod types;

pub use list::ListenerList;
pub use types::{Listener, Listeners};
