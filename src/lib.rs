//! patdfa: substring-search DFA over arbitrary element sequences
//!
//! Compiles a fixed pattern - any finite sequence of `Eq + Hash`
//! elements - into a deterministic finite automaton, then recognizes
//! occurrences of that pattern in a separately streamed text, one
//! element per step, in a single left-to-right pass with O(1) amortized
//! work per element and no backtracking. This is the explicit
//! transition-table rendering of Knuth-Morris-Pratt.
//!
//! The automaton never reads a text itself; the caller feeds it
//! elements from wherever the text lives:
//!
//! ```
//! use patdfa::Dfa;
//!
//! let mut dfa = Dfa::new("needle".chars());
//! let mut found = false;
//! for c in "haystack with a needle in it".chars() {
//!     dfa.step(&c);
//!     if dfa.is_at_final_state() {
//!         found = true;
//!         dfa.reset();
//!     }
//! }
//! assert!(found);
//! ```
//!
//! Elements need not be characters - any `Eq + Hash + Clone` type works:
//!
//! ```
//! use patdfa::Dfa;
//!
//! let mut dfa = Dfa::new(vec![3u64, 1, 4]);
//! assert_eq!(dfa.matches_in(vec![2u64, 3, 1, 4, 1]).next(), Some(4));
//! ```

mod dfa;

pub use dfa::{Dfa, Matches, PatternIter, StateNode, INITIAL_STATE};
