// src/dpda/trace.rs
// Step records and their tabular / JSON renderings.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use super::tables::symbols::{OrEps, Production, StackSymbol, State};

pub const STALL_LABEL: &str = "no transition";
const NO_PRODUCTION: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ActionRecord")]
pub enum Action {
    Apply {
        label: String,
        production: Option<Production>,
    },
    /// No rule applied; always the last row of a rejecting trace.
    Stall,
}

// JSON form: every row carries a label, the stall row included
#[serde_as]
#[derive(Serialize)]
struct ActionRecord {
    kind: &'static str,
    label: String,
    #[serde_as(as = "Option<DisplayFromStr>")]
    production: Option<Production>,
}

impl From<Action> for ActionRecord {
    fn from(a: Action) -> Self {
        match a {
            Action::Apply { label, production } => Self {
                kind: "apply",
                label,
                production,
            },
            Action::Stall => Self {
                kind: "stall",
                label: STALL_LABEL.to_string(),
                production: None,
            },
        }
    }
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::Apply { label, .. } => label,
            Action::Stall => STALL_LABEL,
        }
    }

    pub fn production(&self) -> Option<Production> {
        match self {
            Action::Apply { production, .. } => *production,
            Action::Stall => None,
        }
    }
}

/// Snapshot taken before a rule is applied.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    #[serde_as(as = "DisplayFromStr")]
    pub state: State,
    pub unread: String,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub top: Option<StackSymbol>,
    pub action: Action,
}

impl Step {
    pub fn is_stall(&self) -> bool {
        matches!(self.action, Action::Stall)
    }
}

/// Aligned text table: step | state | unread | top | Δ | G.
pub struct TraceTable<'a>(pub &'a [Step]);

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // unread column grows with the input; the rest are fixed
        let unread_w = self
            .0
            .iter()
            .map(|s| s.unread.chars().count())
            .max()
            .unwrap_or(0)
            .max(12);
        let label_w = self
            .0
            .iter()
            .map(|s| s.action.label().chars().count())
            .max()
            .unwrap_or(0)
            .max(24);

        writeln!(
            f,
            "{:>4} | {:<8} | {:<unread_w$} | {:^3} | {:<label_w$} | G",
            "step", "state", "unread", "top", "Δ"
        )?;
        writeln!(f, "{}", "-".repeat(4 + 3 + 8 + 3 + unread_w + 3 + 3 + 3 + label_w + 4))?;
        for s in self.0 {
            let g = s
                .action
                .production()
                .map(|p| p.name())
                .unwrap_or(NO_PRODUCTION);
            writeln!(
                f,
                "{:>4} | {:<8} | {:<unread_w$} | {:^3} | {:<label_w$} | {g}",
                s.index,
                s.state,
                s.unread,
                OrEps(s.top),
                s.action.label(),
            )?;
        }
        Ok(())
    }
}

pub fn trace_to_json(trace: &[Step]) -> Result<String> {
    serde_json::to_string_pretty(trace).context("serialize trace")
}
