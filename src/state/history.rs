//! Linear value history backing undo.

/// Ordered values of one state, oldest first.
///
/// Never empty: it is seeded with the initial value and `pop` refuses to
/// remove the last remaining entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueHistory<T> {
    values: Vec<T>,
    /// Max retained values (None = unbounded).
    limit: Option<usize>,
}

impl<T> ValueHistory<T> {
    /// Create a history holding only `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            values: vec![initial],
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` values.
    ///
    /// A limit of 0 is treated as 1: the current value is always retained.
    pub fn with_limit(initial: T, limit: Option<usize>) -> Self {
        Self {
            values: vec![initial],
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// The current (most recent) value.
    pub fn current(&self) -> &T {
        // Non-empty by construction.
        &self.values[self.values.len() - 1]
    }

    /// Push a new current value, dropping the oldest entries past the limit.
    pub fn push(&mut self, value: T) {
        self.values.push(value);

        if let Some(limit) = self.limit {
            if self.values.len() > limit {
                let excess = self.values.len() - limit;
                self.values.drain(..excess);
            }
        }
    }

    /// Remove the current value, exposing the previous one.
    ///
    /// Returns the removed value, or None when only one value is left.
    pub fn pop(&mut self) -> Option<T> {
        if self.can_undo() {
            self.values.pop()
        } else {
            None
        }
    }

    /// Whether `pop` would revert anything.
    pub fn can_undo(&self) -> bool {
        self.values.len() > 1
    }

    /// Number of retained values (always >= 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a history holds at least its initial value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All retained values, oldest first.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}
