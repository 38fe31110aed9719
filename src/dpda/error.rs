//! Error types for input normalization and table construction.
//!
//! A stall is not an error: a run that finds no applicable rule returns a
//! rejecting verdict with a trace ending in a stall row.

use std::fmt;

use super::tables::symbols::{END, State};

/// Raised by normalization before any step is simulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// The end-marker is missing from the final position or appears more than once.
    MisplacedEndMarker { input: String, count: usize },

    /// A character outside the input alphabet. `position` is a char index into
    /// the trimmed input.
    IllegalSymbol {
        input: String,
        symbol: char,
        position: usize,
    },
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::MisplacedEndMarker { input, count } => write!(
                f,
                "input {input:?} must contain exactly one end marker '{END}' at the end (found {count})"
            ),
            MalformedInput::IllegalSymbol {
                input,
                symbol,
                position,
            } => write!(
                f,
                "illegal symbol {symbol:?} at position {position} in {input:?}; allowed symbols: a, b, {END}"
            ),
        }
    }
}

impl std::error::Error for MalformedInput {}

/// The table cannot be used as a deterministic automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    Empty,

    /// Rules `first` and `second` (by id, in scan order) can both fire on the
    /// same (state, lookahead, top) triple.
    Ambiguous {
        state: State,
        first: String,
        second: String,
    },

    /// A rule leaves the accepting state, which the engine never scans.
    RuleFromAccepting { rule: String },

    /// An ε-move that leaves state, input and stack top unchanged, so it
    /// matches again forever.
    EpsilonLoop { rule: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "transition table has no rules"),
            TableError::Ambiguous {
                state,
                first,
                second,
            } => write!(
                f,
                "rules {first} and {second} both apply in state {state} (non determinism not permitted)"
            ),
            TableError::RuleFromAccepting { rule } => {
                write!(f, "rule {rule} leaves the accepting state")
            }
            TableError::EpsilonLoop { rule } => {
                write!(f, "rule {rule} is an ε-move that reapplies itself forever")
            }
        }
    }
}

impl std::error::Error for TableError {}
