pub mod io;
pub mod rules;
pub mod symbols;
pub mod validate;

use std::sync::LazyLock;

// Re-exports to keep the external API flat.
pub use io::{load_table_json_bytes, save_table_json, table_to_json};
pub use rules::{Rule, anbn_rules};
pub use symbols::{END, EPS, Input, Production, StackSymbol, State};
pub use validate::validate;

use crate::dpda::error::TableError;

/// Ordered, immutable rule set. Only constructible through [`TransitionTable::new`],
/// so every value has passed the determinism check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    initial: State,
    accepting: State,
    rules: Vec<Rule>,
}

static ANBN: LazyLock<Result<TransitionTable, TableError>> =
    LazyLock::new(|| TransitionTable::new(State::Pre, State::Accept, anbn_rules()));

impl TransitionTable {
    pub fn new(initial: State, accepting: State, rules: Vec<Rule>) -> Result<Self, TableError> {
        validate(&rules, accepting)?;
        Ok(Self {
            initial,
            accepting,
            rules,
        })
    }

    /// The built-in table for aⁿbⁿ, built and validated once per process.
    pub fn anbn() -> Result<&'static TransitionTable, TableError> {
        ANBN.as_ref().map_err(Clone::clone)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn initial(&self) -> State {
        self.initial
    }

    pub fn accepting(&self) -> State {
        self.accepting
    }

    pub fn sigma(&self) -> &'static [Input] {
        Input::ALL
    }

    pub fn gamma(&self) -> &'static [StackSymbol] {
        StackSymbol::ALL
    }

    pub fn states(&self) -> &'static [State] {
        State::ALL
    }

    /// First rule in scan order that applies.
    pub fn lookup(
        &self,
        state: State,
        next: Option<Input>,
        top: Option<StackSymbol>,
    ) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(state, next, top))
    }
}
