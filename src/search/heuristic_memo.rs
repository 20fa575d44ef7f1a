//! Per-problem cache of heuristic values.

use crate::search::HeuristicValue;
use std::{collections::HashMap, hash::Hash};

/// A [`HeuristicMemo`] maps states to heuristic values that were already
/// computed for them. It is owned by a single problem instance and lives as
/// long as that instance, so values never leak between unrelated problems.
/// There is no eviction.
#[derive(Debug, Clone)]
pub struct HeuristicMemo<S: Eq + Hash> {
    values: HashMap<S, HeuristicValue>,
    hits: usize,
}

impl<S: Eq + Hash> Default for HeuristicMemo<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> HeuristicMemo<S> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            hits: 0,
        }
    }

    /// Look up the value stored for `state`. Successful lookups are counted,
    /// see [`HeuristicMemo::hits`].
    pub fn get(&mut self, state: &S) -> Option<HeuristicValue> {
        let value = self.values.get(state).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    pub fn contains(&self, state: &S) -> bool {
        self.values.contains_key(state)
    }

    pub fn insert(&mut self, state: S, value: HeuristicValue) {
        self.values.insert(state, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.hits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::Float;

    #[test]
    fn stores_and_counts_hits() {
        let mut memo = HeuristicMemo::new();
        assert!(memo.get(&"a").is_none());
        memo.insert("a", 2.0.into());
        memo.insert("dead", HeuristicValue::infinity());

        assert!(memo.contains(&"a"));
        assert_eq!(memo.get(&"a"), Some(2.0.into()));
        assert_eq!(memo.get(&"dead"), Some(HeuristicValue::infinity()));
        assert_eq!(memo.hits(), 2);
        assert_eq!(memo.len(), 2);

        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.hits(), 0);
    }
}
