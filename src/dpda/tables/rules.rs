// src/dpda/tables/rules.rs
// Hand-built gate-state DPDA for L = { aⁿbⁿ | n ≥ 0 }.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::symbols::{Input, OrEps, Production, StackSymbol, State};

/// One transition. `None` in `lookahead` or `top` stands for ε.
///
/// `push` is applied left to right, so its last element ends up on top.
/// A rule with `top == None` matches only an empty stack and never pops.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub from: State,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub lookahead: Option<Input>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub top: Option<StackSymbol>,
    #[serde_as(as = "DisplayFromStr")]
    pub to: State,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub push: Vec<StackSymbol>,
    pub consumes: bool,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub production: Option<Production>,
}

impl Rule {
    /// Whether this rule applies to the live configuration.
    #[inline]
    pub fn matches(&self, state: State, next: Option<Input>, top: Option<StackSymbol>) -> bool {
        if self.from != state || self.top != top {
            return false;
        }
        match self.lookahead {
            None => true,
            Some(la) => Some(la) == next,
        }
    }

    /// Trace label, e.g. `D5 (qa,ε,S) → (qa,aSb)`; the pushed string is printed top first.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({},{},{}) → ({},",
            self.id,
            self.from,
            OrEps(self.lookahead),
            OrEps(self.top),
            self.to
        )?;
        if self.push.is_empty() {
            write!(f, "{})", OrEps::<StackSymbol>(None))?;
        } else {
            for s in self.push.iter().rev() {
                write!(f, "{s}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn rule(
    id: &str,
    from: State,
    lookahead: Option<Input>,
    top: Option<StackSymbol>,
    to: State,
    push: &[StackSymbol],
    consumes: bool,
    production: Option<Production>,
) -> Rule {
    Rule {
        id: id.to_string(),
        from,
        lookahead,
        top,
        to,
        push: push.to_vec(),
        consumes,
        production,
    }
}

/// The rule list in scan order.
///
/// Lookahead `a` always expands S, `b` or `$` always erases it. The decision is
/// recorded by moving into a gate state without consuming input, so no two
/// ε-rules ever share a (state, top) pair.
pub fn anbn_rules() -> Vec<Rule> {
    use Input as I;
    use Production::*;
    use StackSymbol::*;
    use State::*;

    vec![
        // seed ⊥ then S
        rule("D1", Pre, None, None, Drive, &[Bottom, S], false, None),
        // lookahead gates: keep S, remember what was seen
        rule("D2", Drive, Some(I::A), Some(S), GateA, &[S], false, None),
        rule("D3", Drive, Some(I::B), Some(S), GateB, &[S], false, None),
        rule("D4", Drive, Some(I::End), Some(S), GateEnd, &[S], false, None),
        // S → aSb, pushed bottom first so `a` is on top
        rule("D5", GateA, None, Some(S), GateA, &[B, S, A], false, Some(Expand)),
        rule("D6", GateA, Some(I::A), Some(A), Drive, &[], true, None),
        // S → ε under lookahead b
        rule("D7", GateB, None, Some(S), GateB, &[], false, Some(Erase)),
        rule("D8", GateB, Some(I::B), Some(B), Drive, &[], true, None),
        rule("D9", Drive, Some(I::B), Some(B), Drive, &[], true, None),
        // S → ε under lookahead $
        rule("D10", GateEnd, None, Some(S), GateEnd, &[], false, Some(Erase)),
        rule("D11", Drive, Some(I::End), Some(Bottom), GateEnd, &[Bottom], false, None),
        // the only way into q_accept: consume $ over ⊥
        rule("D12", GateEnd, Some(I::End), Some(Bottom), Accept, &[], true, None),
    ]
}
