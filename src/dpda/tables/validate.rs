// src/dpda/tables/validate.rs
// Construction-time determinism check.

use hashbrown::HashMap;

use super::{
    rules::Rule,
    symbols::{StackSymbol, State},
};
use crate::dpda::error::TableError;

#[inline]
fn lookaheads_overlap(a: &Rule, b: &Rule) -> bool {
    match (a.lookahead, b.lookahead) {
        (Some(x), Some(y)) => x == y,
        // ε never inspects the input, so it collides with every lookahead
        _ => true,
    }
}

/// ε-lookahead, no consumption, same state, and the pushed top equals the
/// required top: the rule fires again on its own result.
#[inline]
fn reapplies_itself(r: &Rule) -> bool {
    r.lookahead.is_none() && !r.consumes && r.from == r.to && r.push.last().copied() == r.top
}

/// Rejects tables where two rules can fire on the same live configuration.
///
/// Rules are bucketed by (state, required top); inside a bucket any pair whose
/// lookaheads overlap is ambiguous, whatever the scan order would pick.
pub fn validate(rules: &[Rule], accepting: State) -> Result<(), TableError> {
    if rules.is_empty() {
        log::error!("transition table has no rules");
        return Err(TableError::Empty);
    }

    let mut buckets: HashMap<(State, Option<StackSymbol>), Vec<usize>> = HashMap::new();
    for (i, r) in rules.iter().enumerate() {
        if r.from == accepting {
            log::error!("rule {} leaves accepting state {accepting}", r.id);
            return Err(TableError::RuleFromAccepting { rule: r.id.clone() });
        }
        if reapplies_itself(r) {
            log::error!("rule {r} loops on itself");
            return Err(TableError::EpsilonLoop { rule: r.id.clone() });
        }
        buckets.entry((r.from, r.top)).or_default().push(i);
    }

    // earliest offending pair in scan order
    let mut worst: Option<(usize, usize)> = None;
    for idxs in buckets.values() {
        for (k, &i) in idxs.iter().enumerate() {
            for &j in &idxs[k + 1..] {
                if lookaheads_overlap(&rules[i], &rules[j]) && worst.is_none_or(|w| (i, j) < w) {
                    worst = Some((i, j));
                }
            }
        }
    }

    match worst {
        None => Ok(()),
        Some((i, j)) => {
            let (a, b) = (&rules[i], &rules[j]);
            log::error!("ambiguous rules {a} / {b}");
            Err(TableError::Ambiguous {
                state: a.from,
                first: a.id.clone(),
                second: b.id.clone(),
            })
        }
    }
}
