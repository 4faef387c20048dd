//! Per-state value storage.
//!
//! Each registered state owns a [`ValueHistory`]: an append/pop-only record
//! of every value it has held, oldest first. The newest entry is the
//! current value, and popping it is what `undo` does.

mod history;

pub use history::ValueHistory;
