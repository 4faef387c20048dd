//! Ordered listener list for one state.

use super::types::{Listener, Listeners};

/// Listeners of a single state, in invocation order.
#[derive(Clone, Debug)]
pub struct ListenerList<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> ListenerList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Append a listener unless the same handle is already present.
    ///
    /// Returns false (and leaves the list untouched) on a duplicate.
    pub fn insert(&mut self, listener: Listener<T>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove the first entry matching `listener`. Returns whether one was removed.
    pub fn remove(&mut self, listener: &Listener<T>) -> bool {
        match self.listeners.iter().position(|l| l.same_as(listener)) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, listener: &Listener<T>) -> bool {
        self.listeners.iter().any(|l| l.same_as(listener))
    }

    /// Call every listener with `value`, in insertion order.
    ///
    /// A panicking listener stops dispatch; later listeners are not called.
    pub fn notify(&self, value: &T) {
        for listener in &self.listeners {
            listener.call(value);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for ListenerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Listeners<T>> for ListenerList<T> {
    fn from(listeners: Listeners<T>) -> Self {
        Self {
            listeners: listeners.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recording(log: &Arc<Mutex<Vec<String>>>, name: &'static str) -> Listener<i32> {
        let log = Arc::clone(log);
        Listener::new(move |v: &i32| log.lock().push(format!("{}:{}", name, v)))
    }

    #[test]
    fn test_notify_in_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = ListenerList::new();
        list.insert(recording(&log, "a"));
        list.insert(recording(&log, "b"));
        list.insert(recording(&log, "c"));

        list.notify(&5);

        assert_eq!(*log.lock(), vec!["a:5", "b:5", "c:5"]);
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listener = recording(&log, "a");
        let mut list = ListenerList::new();

        assert!(list.insert(listener.clone()));
        assert!(!list.insert(listener));
        assert_eq!(list.len(), 1);

        list.notify(&1);
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn test_remove_single_occurrence() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listener = recording(&log, "a");

        // Lists given at registration keep duplicates
        let mut list = ListenerList::from(Listeners::from(vec![
            listener.clone(),
            listener.clone(),
        ]));
        assert_eq!(list.len(), 2);

        assert!(list.remove(&listener));
        assert_eq!(list.len(), 1);
        assert!(list.contains(&listener));

        assert!(list.remove(&listener));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = ListenerList::new();
        assert!(list.is_empty());
        assert!(!list.remove(&recording(&log, "a")));

        list.insert(recording(&log, "b"));
        assert!(!list.remove(&recording(&log, "c")));
        assert_eq!(list.len(), 1);
    }
}
