//! Per-state transition maps for the search DFA.
//!
//! Each automaton state owns one `StateNode`: a sparse map from element
//! value to next-state index. The alphabet is whatever the element type
//! can express, so the map is keyed only on elements actually wired in
//! during construction; everything else falls back to the initial state
//! at lookup time.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// The automaton's starting state. Also the fallback target for any
/// element a state has no transition for.
pub const INITIAL_STATE: usize = 0;

/// A single state's transition table.
///
/// Keys are unique, order is insignificant. Node `i` always carries the
/// "match continues" edge for the pattern's `i+1`-th element; it may
/// carry additional edges that re-enter a shorter matching prefix.
/// Absent keys are not stored as edges to state 0 - the fallback is
/// resolved by [`StateNode::step`].
#[derive(Clone)]
pub struct StateNode<E> {
    transitions: FxHashMap<E, usize>,
}

impl<E: Eq + Hash> StateNode<E> {
    pub fn new() -> Self {
        Self {
            transitions: FxHashMap::default(),
        }
    }

    /// Look up the next state for an element.
    ///
    /// Explicit lookup-with-default: an element this state has never
    /// seen resolves to [`INITIAL_STATE`]. This one rule covers
    /// "continue match", "fall back to a shorter prefix", and "restart".
    #[inline]
    pub fn step(&self, element: &E) -> usize {
        match self.transitions.get(element) {
            Some(&next) => next,
            None => INITIAL_STATE,
        }
    }

    /// Wire an edge from this state to `next` on `element`, replacing
    /// any existing edge for that element.
    pub fn set(&mut self, element: E, next: usize) {
        self.transitions.insert(element, next);
    }

    /// Find the element whose edge targets `target`, if any.
    ///
    /// Used by pattern reconstruction: the edge targeting `i + 1` from
    /// node `i` is the pattern's `i+1`-th element.
    pub fn edge_to(&self, target: usize) -> Option<&E> {
        self.transitions
            .iter()
            .find(|&(_, &next)| next == target)
            .map(|(element, _)| element)
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }
}

impl<E: Eq + Hash> Default for StateNode<E> {
    fn default() -> Self {
        Self::new()
    }
}
