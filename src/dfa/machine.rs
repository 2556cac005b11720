//! The search DFA itself: table ownership, stepping, queries.

use std::hash::Hash;

use super::builder::build_table;
use super::node::{StateNode, INITIAL_STATE};

/// A substring-search DFA over elements of type `E`.
///
/// Built once from a pattern, then fed one element of a streamed text at
/// a time. Reaching the final state (state == node count) signals a
/// completed match; call [`Dfa::reset`] before starting an independent
/// search pass.
///
/// ```
/// use patdfa::Dfa;
///
/// let mut dfa = Dfa::new("aba".chars());
/// for c in "xaba".chars() {
///     dfa.step(&c);
/// }
/// assert!(dfa.is_at_final_state());
///
/// dfa.reset();
/// assert_eq!(dfa.matches_in("xx aba - aba".chars()).count(), 2);
/// ```
///
/// The DFA is a plain single-owner value. For concurrent search passes,
/// clone it - construction and cloning are deterministic and cheap
/// relative to any sharing protocol.
#[derive(Clone)]
pub struct Dfa<E> {
    nodes: Vec<StateNode<E>>,
    current: usize,
}

impl<E: Eq + Hash + Clone> Dfa<E> {
    /// Compile `pattern` into a DFA positioned at the initial state.
    ///
    /// Accepts any finite sequence, including the empty one; never
    /// fails. An empty-pattern DFA never leaves the initial state and
    /// never accepts.
    pub fn new<I: IntoIterator<Item = E>>(pattern: I) -> Self {
        Self {
            nodes: build_table(pattern),
            current: INITIAL_STATE,
        }
    }

    /// Consume one text element and return the new current state.
    ///
    /// A single lookup-with-default realizes "continue match", "fall
    /// back to a shorter matching prefix", and "restart" in one rule.
    /// The table is indexed at `current % node count`, so stepping again
    /// after an accept reuses node 0's edges as a fresh restart basis;
    /// for occurrence counting, call [`Dfa::reset`] after each match
    /// instead of relying on that wraparound.
    #[inline]
    pub fn step(&mut self, element: &E) -> usize {
        let node = &self.nodes[self.current % self.nodes.len()];
        self.current = node.step(element);
        self.current
    }

    /// Force the automaton back to the initial state. Idempotent.
    ///
    /// Skipping this between independent search passes is not detected:
    /// the next pass silently starts from whatever prefix the previous
    /// one left matched, which can report a match the new text alone
    /// does not contain.
    pub fn reset(&mut self) {
        self.current = INITIAL_STATE;
    }

    pub fn current_state(&self) -> usize {
        self.current
    }

    pub fn is_at_initial_state(&self) -> bool {
        self.current == INITIAL_STATE
    }

    pub fn is_at_final_state(&self) -> bool {
        self.current == self.final_state()
    }

    /// True when the pattern had zero elements.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].is_empty()
    }

    pub fn initial_state(&self) -> usize {
        INITIAL_STATE
    }

    /// The accepting state: the node count. Derived, never stored.
    /// Unreachable for an empty-pattern DFA (node count 1, but node 0
    /// has no outgoing edges).
    pub fn final_state(&self) -> usize {
        self.nodes.len()
    }

    /// Reconstruct the pattern from the table.
    ///
    /// Lazy and restartable: each call returns a fresh traversal owning
    /// its own scan position, so independent traversals never interfere.
    /// Yields node `i`'s edge targeting `i + 1` for each `i`; a missing
    /// edge (impossible for a validly built table) ends the sequence.
    pub fn pattern(&self) -> PatternIter<'_, E> {
        PatternIter {
            nodes: &self.nodes,
            pos: 0,
        }
    }

    /// Scan a streamed text, yielding the end position (one past the
    /// last matched element) of every occurrence of the pattern.
    ///
    /// Resets the cursor before scanning and after each hit. Because a
    /// hit restarts matching from scratch, the occurrences reported are
    /// the leftmost non-overlapping ones; a pattern that overlaps itself
    /// (like `"aba"` in `"ababa"`) reports one hit per restart, not one
    /// per overlapping position.
    pub fn matches_in<I>(&mut self, text: I) -> Matches<'_, E, I::IntoIter>
    where
        I: IntoIterator<Item = E>,
    {
        self.reset();
        Matches {
            dfa: self,
            text: text.into_iter(),
            pos: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[StateNode<E>] {
        &self.nodes
    }
}

/// Lazy pattern-reconstruction iterator returned by [`Dfa::pattern`].
pub struct PatternIter<'a, E> {
    nodes: &'a [StateNode<E>],
    pos: usize,
}

impl<'a, E: Eq + Hash> Iterator for PatternIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let node = self.nodes.get(self.pos)?;
        let target = self.pos + 1;
        match node.edge_to(target) {
            Some(element) => {
                self.pos = target;
                Some(element)
            }
            None => {
                // No match-continues edge: end the traversal for good.
                self.pos = self.nodes.len();
                None
            }
        }
    }
}

/// Iterator over match end positions, returned by [`Dfa::matches_in`].
pub struct Matches<'a, E, I> {
    dfa: &'a mut Dfa<E>,
    text: I,
    pos: usize,
}

impl<E, I> Iterator for Matches<'_, E, I>
where
    E: Eq + Hash + Clone,
    I: Iterator<Item = E>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for element in self.text.by_ref() {
            self.pos += 1;
            if self.dfa.step(&element) == self.dfa.final_state() {
                self.dfa.reset();
                return Some(self.pos);
            }
        }
        None
    }
}
