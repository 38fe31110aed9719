// src/dpda/engine.rs
// Table-driven DPDA interpreter with a step-by-step trace.

use super::{
    error::{MalformedInput, TableError},
    tables::{
        TransitionTable,
        rules::Rule,
        symbols::{END, Input, StackSymbol, State},
    },
    trace::{Action, Step},
};

/// Trims, appends the end-marker if it is missing, and checks the result.
///
/// The canonical form holds exactly one `$`, in last position, and only
/// symbols of Σ. Idempotent on canonical input.
pub fn normalize(raw: &str) -> Result<String, MalformedInput> {
    let mut s = raw.trim().to_string();
    if !s.ends_with(END) {
        s.push(END);
    }

    let count = s.chars().filter(|&c| c == END).count();
    if count != 1 {
        return Err(MalformedInput::MisplacedEndMarker { input: s, count });
    }

    let illegal = s
        .chars()
        .enumerate()
        .find(|&(_, c)| Input::from_char(c).is_none());
    if let Some((position, symbol)) = illegal {
        return Err(MalformedInput::IllegalSymbol {
            input: s,
            symbol,
            position,
        });
    }
    Ok(s)
}

/// Concatenates single-character tokens, then normalizes.
pub fn normalize_tokens<I, T>(tokens: I) -> Result<String, MalformedInput>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let joined: String = tokens.into_iter().map(|t| t.as_ref().to_owned()).collect();
    normalize(&joined)
}

/// Mutable run state, owned by one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub state: State,
    pub input: Vec<Input>,
    pub cursor: usize,
    /// Last element is the top.
    pub stack: Vec<StackSymbol>,
    pub trace: Vec<Step>,
}

impl Configuration {
    fn fresh(initial: State, input: Vec<Input>) -> Self {
        Self {
            state: initial,
            input,
            cursor: 0,
            stack: Vec::new(),
            trace: Vec::new(),
        }
    }

    #[inline]
    pub fn top(&self) -> Option<StackSymbol> {
        self.stack.last().copied()
    }

    /// Next unread symbol; `None` once the input is exhausted.
    #[inline]
    pub fn next_input(&self) -> Option<Input> {
        self.input.get(self.cursor).copied()
    }

    pub fn unread(&self) -> String {
        self.input
            .get(self.cursor..)
            .unwrap_or_default()
            .iter()
            .map(|i| i.as_char())
            .collect()
    }

    fn snapshot(&self, action: Action) -> Step {
        Step {
            index: self.trace.len(),
            state: self.state,
            unread: self.unread(),
            top: self.top(),
            action,
        }
    }

    fn apply(&mut self, rule: &Rule) {
        if rule.top.is_some() {
            self.stack.pop();
        }
        self.stack.extend_from_slice(&rule.push);
        if rule.consumes {
            self.cursor += 1;
        }
        self.state = rule.to;
    }
}

/// Executes one deterministic table. Reusable across sequential runs; each run
/// starts from a fresh [`Configuration`].
#[derive(Debug, Clone)]
pub struct Engine<'t> {
    table: &'t TransitionTable,
    config: Configuration,
}

impl<'t> Engine<'t> {
    pub fn new(table: &'t TransitionTable) -> Self {
        Self {
            table,
            config: Configuration::fresh(table.initial(), Vec::new()),
        }
    }

    /// Engine over the built-in aⁿbⁿ table.
    pub fn anbn() -> Result<Engine<'static>, TableError> {
        Ok(Engine::new(TransitionTable::anbn()?))
    }

    pub fn table(&self) -> &'t TransitionTable {
        self.table
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn trace(&self) -> &[Step] {
        &self.config.trace
    }

    /// Starts over on already-canonical input.
    pub fn reset(&mut self, canonical: &str) {
        // canonical input only holds Σ, so nothing is dropped here
        let input = canonical.chars().filter_map(Input::from_char).collect();
        self.config = Configuration::fresh(self.table.initial(), input);
    }

    /// Decides membership and records the trace.
    ///
    /// Malformed input fails before any step and leaves the previous run intact.
    pub fn run(&mut self, raw: &str) -> Result<(bool, &[Step]), MalformedInput> {
        let canonical = normalize(raw)?;
        self.reset(&canonical);
        let accepted = self.simulate();
        log::debug!(
            "{canonical:?}: {} after {} steps",
            if accepted { "accept" } else { "reject" },
            self.config.trace.len()
        );
        Ok((accepted, &self.config.trace))
    }

    pub fn run_tokens<I, T>(&mut self, tokens: I) -> Result<(bool, &[Step]), MalformedInput>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let canonical = normalize_tokens(tokens)?;
        self.run(&canonical)
    }

    fn simulate(&mut self) -> bool {
        let table = self.table;
        let cfg = &mut self.config;
        loop {
            // q_accept is only reachable by consuming the single trailing `$`,
            // so acceptance already implies the input is exhausted
            if cfg.state == table.accepting() {
                return true;
            }

            let Some(rule) = table.lookup(cfg.state, cfg.next_input(), cfg.top()) else {
                let step = cfg.snapshot(Action::Stall);
                log::debug!(
                    "step {}: stalled in {} at {:?} with top {:?}",
                    step.index,
                    step.state,
                    step.unread,
                    step.top
                );
                cfg.trace.push(step);
                return false;
            };

            let step = cfg.snapshot(Action::Apply {
                label: rule.label(),
                production: rule.production,
            });
            log::debug!("step {}: {} on {:?}", step.index, rule, step.unread);
            cfg.trace.push(step);
            cfg.apply(rule);
        }
    }
}
