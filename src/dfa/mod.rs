//! Substring-search DFA engine.
//!
//! This module implements the automaton variant of single-pattern
//! substring search: the pattern is compiled once into a table of
//! per-state transition maps, then driven one streamed element at a
//! time with no backtracking. The key components are:
//!
//! - `StateNode`: a sparse per-state transition map
//! - `build_table`: the linear-time pattern -> table compiler
//! - `Dfa`: the state machine (step, reset, queries)
//!
//! # Module Organization
//!
//! - `node`: the per-state transition map type
//! - `builder`: table construction from a pattern sequence
//! - `machine`: the `Dfa` state machine, pattern reconstruction, and
//!   the text-scan adapter

mod builder;
mod machine;
mod node;

pub use machine::{Dfa, Matches, PatternIter};
pub use node::{StateNode, INITIAL_STATE};
