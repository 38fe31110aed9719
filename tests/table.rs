//! Table construction, determinism checks, and swapping tables through JSON.

use anbn::dpda::{
    Engine, TableError, TransitionTable,
    tables::{
        Input, Production, Rule, StackSymbol, State, anbn_rules, load_table_json_bytes,
        save_table_json, table_to_json,
    },
};

fn r(
    id: &str,
    from: State,
    lookahead: Option<Input>,
    top: Option<StackSymbol>,
    to: State,
    push: &[StackSymbol],
    consumes: bool,
) -> Rule {
    Rule {
        id: id.into(),
        from,
        lookahead,
        top,
        to,
        push: push.to_vec(),
        consumes,
        production: None,
    }
}

#[test]
fn builtin_table_is_deterministic() {
    let t = TransitionTable::anbn().expect("built-in table validates");
    assert_eq!(t.rules().len(), 12);
    assert_eq!(t.initial(), State::Pre);
    assert_eq!(t.accepting(), State::Accept);
    assert_eq!(t.sigma(), &[Input::A, Input::B, Input::End]);
    assert_eq!(t.gamma().len(), 4);
    assert_eq!(t.states().len(), 6);
}

#[test]
fn only_d1_leaves_pre_initial() {
    let t = TransitionTable::anbn().unwrap();
    let from_pre: Vec<&Rule> = t.rules().iter().filter(|r| r.from == State::Pre).collect();
    assert_eq!(from_pre.len(), 1);
    assert_eq!(from_pre[0].push, [StackSymbol::Bottom, StackSymbol::S]);

    // the only way into q_accept pops ⊥ from q$ on `$`
    let into_accept: Vec<&Rule> = t.rules().iter().filter(|r| r.to == State::Accept).collect();
    assert_eq!(into_accept.len(), 1);
    assert_eq!(into_accept[0].from, State::GateEnd);
    assert_eq!(into_accept[0].top, Some(StackSymbol::Bottom));
    assert_eq!(into_accept[0].lookahead, Some(Input::End));
    assert!(into_accept[0].consumes);
}

#[test]
fn labels_print_push_top_first() {
    let t = TransitionTable::anbn().unwrap();
    let expand = t
        .rules()
        .iter()
        .find(|r| r.production == Some(Production::Expand))
        .unwrap();
    assert_eq!(expand.label(), "D5 (qa,ε,S) → (qa,aSb)");
    assert_eq!(t.rules()[0].label(), "D1 (p,ε,ε) → (q,S⊥)");
}

#[test]
fn direct_epsilon_encoding_is_ambiguous() {
    // S expanded by two ε-rules on (q, S), separated only by a lookahead neither inspects
    use Input as I;
    use StackSymbol::*;
    use State::*;
    let rules = vec![
        r("D1", Pre, None, None, Drive, &[Bottom, S], false),
        r("D2", Drive, None, Some(S), Drive, &[B, S, A], false),
        r("D3", Drive, None, Some(S), Drive, &[], false),
        r("D4", Drive, Some(I::A), Some(A), Drive, &[], true),
        r("D5", Drive, Some(I::B), Some(B), Drive, &[], true),
        r("D6", Drive, Some(I::End), Some(Bottom), Accept, &[], true),
    ];
    assert_eq!(
        TransitionTable::new(Pre, Accept, rules),
        Err(TableError::Ambiguous {
            state: Drive,
            first: "D2".into(),
            second: "D3".into(),
        })
    );
}

#[test]
fn epsilon_lookahead_collides_with_concrete_lookahead() {
    use StackSymbol::*;
    use State::*;
    let mut rules = anbn_rules();
    // ε-rule on (q, S) shadows the three lookahead gates
    rules.push(r("X", Drive, None, Some(S), Drive, &[], false));
    let err = TransitionTable::new(Pre, Accept, rules).unwrap_err();
    assert!(
        matches!(err, TableError::Ambiguous { ref second, .. } if second == "X"),
        "{err}"
    );
}

#[test]
fn distinct_tops_do_not_collide() {
    use Input as I;
    use StackSymbol::*;
    use State::*;
    let rules = vec![
        r("D1", Pre, None, None, Drive, &[Bottom], false),
        r("D2", Drive, Some(I::End), Some(Bottom), Accept, &[], true),
        r("D3", Drive, Some(I::End), Some(S), Accept, &[], true),
    ];
    assert!(TransitionTable::new(Pre, Accept, rules).is_ok());
}

#[test]
fn rejects_empty_and_dead_rules() {
    assert_eq!(
        TransitionTable::new(State::Pre, State::Accept, Vec::new()),
        Err(TableError::Empty)
    );

    let mut rules = anbn_rules();
    rules.push(r("Z", State::Accept, None, None, State::Drive, &[], false));
    assert_eq!(
        TransitionTable::new(State::Pre, State::Accept, rules),
        Err(TableError::RuleFromAccepting { rule: "Z".into() })
    );
}

#[test]
fn rejects_self_repeating_epsilon_move() {
    use StackSymbol::*;
    use State::*;
    let rules = vec![
        r("D1", Pre, None, None, Drive, &[Bottom, S], false),
        r("D2", Drive, None, Some(S), Drive, &[S], false),
    ];
    assert_eq!(
        TransitionTable::new(Pre, Accept, rules),
        Err(TableError::EpsilonLoop { rule: "D2".into() })
    );

    // same shape on an empty stack
    let rules = vec![r("D1", Pre, None, None, Pre, &[], false)];
    assert_eq!(
        TransitionTable::new(Pre, Accept, rules),
        Err(TableError::EpsilonLoop { rule: "D1".into() })
    );

    // changing the top (D5 pushes `a` over S) is a legal ε-move
    assert!(TransitionTable::anbn().is_ok());
}

#[test]
fn looping_json_table_fails_to_load() {
    let json = r#"{
        "initial": "p",
        "accepting": "q_accept",
        "rules": [
            {"id": "D1", "from": "p", "lookahead": null, "top": null, "to": "q",
             "push": ["⊥", "S"], "consumes": false, "production": null},
            {"id": "D2", "from": "q", "lookahead": null, "top": "S", "to": "q",
             "push": ["S"], "consumes": false, "production": null}
        ]
    }"#;
    let err = load_table_json_bytes(json.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("D2"), "{err:#}");
}

#[test]
fn swapped_table_drives_the_engine() {
    // accepts only the empty word
    use Input as I;
    use StackSymbol::*;
    use State::*;
    let t = TransitionTable::new(
        Pre,
        Accept,
        vec![
            r("E1", Pre, None, None, GateEnd, &[Bottom], false),
            r("E2", GateEnd, Some(I::End), Some(Bottom), Accept, &[], true),
        ],
    )
    .unwrap();
    let mut m = Engine::new(&t);
    assert_eq!(m.run("$").map(|(ok, t)| (ok, t.len())), Ok((true, 2)));
    assert_eq!(m.run("ab$").map(|(ok, t)| (ok, t.len())), Ok((false, 2)));
}

#[test]
fn json_table_reloads_and_runs() {
    let t = TransitionTable::anbn().unwrap();
    let path = std::env::temp_dir().join(format!("anbn_table_{}.json", std::process::id()));
    save_table_json(&path, t).unwrap();
    let data = std::fs::read(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let loaded = load_table_json_bytes(&data).unwrap();
    assert_eq!(&loaded, t);

    let mut a = Engine::new(&loaded);
    let mut b = Engine::anbn().unwrap();
    for s in ["$", "aabb$", "aab$"] {
        let x = a.run(s).map(|(ok, t)| (ok, t.to_vec())).unwrap();
        let y = b.run(s).map(|(ok, t)| (ok, t.to_vec())).unwrap();
        assert_eq!(x, y, "{s:?}");
    }
}

#[test]
fn json_uses_symbol_names() {
    let json = table_to_json(TransitionTable::anbn().unwrap()).unwrap();
    assert!(json.contains("\"q_accept\""), "{json}");
    assert!(json.contains("\"⊥\""), "{json}");
    assert!(json.contains("\"S→aSb\""), "{json}");
}

#[test]
fn ambiguous_json_fails_to_load() {
    let json = r#"{
        "initial": "p",
        "accepting": "q_accept",
        "rules": [
            {"id": "D1", "from": "p", "lookahead": null, "top": null, "to": "q",
             "push": ["⊥", "S"], "consumes": false, "production": null},
            {"id": "D2", "from": "q", "lookahead": null, "top": "S", "to": "q",
             "push": ["b", "S", "a"], "consumes": false, "production": "S→aSb"},
            {"id": "D3", "from": "q", "lookahead": "b", "top": "S", "to": "q",
             "push": [], "consumes": false, "production": "S→ε"}
        ]
    }"#;
    let err = load_table_json_bytes(json.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("D2 and D3"), "{err:#}");

    assert!(load_table_json_bytes(br#"{"initial": "p"}"#).is_err());
    let bad_state = json.replace("\"q_accept\"", "\"q9\"");
    assert!(load_table_json_bytes(bad_state.as_bytes()).is_err());
}
