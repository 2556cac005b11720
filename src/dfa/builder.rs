//! DFA construction: compile a pattern sequence into a node table.
//!
//! This is the classical linear-time automaton construction (the
//! transition-table rendering of Knuth-Morris-Pratt): one pass over the
//! pattern, one appended node per element, each new node seeded from the
//! node of the longest shorter prefix that is also a suffix of what has
//! been consumed so far.

use std::hash::Hash;

use super::node::StateNode;

/// Build the node table for `pattern`.
///
/// The table has one node per pattern element; an empty pattern yields a
/// single empty node so the table is never zero-length. Node `i` maps
/// the pattern's `i+1`-th element to state `i + 1`; inherited edges
/// re-enter shorter matching prefixes. Construction is total - every
/// finite sequence produces a valid table.
///
/// Runs in O(pattern length) node appends, each copy bounded by the
/// alphabet observed so far rather than any fixed alphabet size.
pub(crate) fn build_table<E, I>(pattern: I) -> Vec<StateNode<E>>
where
    E: Eq + Hash + Clone,
    I: IntoIterator<Item = E>,
{
    let mut pattern = pattern.into_iter();
    let mut nodes = vec![StateNode::new()];

    let Some(first) = pattern.next() else {
        // Empty pattern: one empty node, nothing can ever advance it.
        return nodes;
    };
    nodes[0].set(first, 1);

    // x tracks the state reached by the longest proper prefix of the
    // consumed pattern that is also its suffix (the KMP failure state,
    // expressed as a state index).
    let mut x = 0;
    for element in pattern {
        // Seed the new node from node x: those edges answer "on a
        // mismatch here, which shorter prefix are we still inside?".
        let mut node = nodes[x].clone();
        node.set(element.clone(), nodes.len() + 1);

        // Advance x before appending - the lookup must see node x as it
        // was for the shorter pattern.
        x = nodes[x].step(&element);
        nodes.push(node);
    }

    nodes
}
