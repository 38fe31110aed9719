//! Deterministic pushdown automaton deciding L = { aⁿbⁿ | n ≥ 0 } with one-symbol
//! lookahead, plus the table, trace and tooling around it.

pub mod dev;
pub mod dpda;
