//! Property-based tests for registry history and listener semantics.

use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;
use vigil::{Listener, Registry};

fn recorder() -> (Listener<i64>, Arc<Mutex<Vec<i64>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let listener = Listener::new(move |v: &i64| seen_clone.lock().push(*v));
    (listener, seen)
}

proptest! {
    #[test]
    fn add_then_get_returns_initial(id in "[a-z]{1,12}", v0 in any::<i64>()) {
        let mut registry = Registry::new();
        registry.add(id.clone(), v0);
        prop_assert_eq!(registry.get(&id), Some(&v0));
    }

    #[test]
    fn undo_reverts_sets_in_reverse(v0 in any::<i64>(), values in prop::collection::vec(any::<i64>(), 0..32)) {
        let mut registry = Registry::new();
        registry.add("s", v0);

        for v in &values {
            registry.set("s", *v);
            prop_assert_eq!(registry.get("s"), Some(v));
        }

        for expected in values.iter().rev().skip(1).chain(std::iter::once(&v0)) {
            registry.undo("s");
            prop_assert_eq!(registry.get("s"), Some(expected));
        }

        // Past the initial value nothing changes
        registry.undo("s");
        prop_assert_eq!(registry.get("s"), Some(&v0));
        prop_assert_eq!(registry.history_len("s"), Some(1));
    }

    #[test]
    fn listener_called_once_per_effective_change(
        ops in prop::collection::vec(prop::option::of(any::<i64>()), 0..48)
    ) {
        let (listener, seen) = recorder();
        let mut registry = Registry::new();
        registry.add_with_listeners("s", 0i64, listener);

        let mut expected = Vec::new();
        let mut depth = 1usize;
        for op in ops {
            match op {
                Some(v) => {
                    registry.set("s", v);
                    depth += 1;
                    expected.push(v);
                }
                None => {
                    let was_effective = depth > 1;
                    registry.undo("s");
                    if was_effective {
                        depth -= 1;
                        expected.push(*registry.get("s").unwrap());
                    }
                }
            }
        }

        let seen = seen.lock().clone();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn history_limit_bounds_length(limit in 1usize..8, count in 0usize..32) {
        let mut registry = Registry::with_config(vigil::RegistryConfig {
            history_limit: Some(limit),
        });
        registry.add("s", 0usize);
        for i in 1..=count {
            registry.set("s", i);
        }

        let len = registry.history_len("s").unwrap();
        prop_assert_eq!(len, (count + 1).min(limit));
        prop_assert_eq!(registry.get("s"), Some(&count));
    }
}
