use aima_core::{rule_match, Condition, Rule};
use proptest::prelude::*;

fn rules() -> Vec<Rule<(u8, &'static str), &'static str>> {
    vec![
        Rule::new((0, "Clean"), "Right"),
        Rule::new((0, "Dirty"), "Suck"),
        Rule::new((1, "Clean"), "Left"),
        Rule::new((1, "Dirty"), "Suck"),
    ]
}

#[test]
fn returns_rule_with_equal_key() {
    let rules = rules();
    let rule = rule_match(&(1, "Clean"), &rules);
    assert_eq!(rule.condition(), &Condition::Exact((1, "Clean")));
    assert_eq!(*rule.action(), "Left");
}

#[test]
fn unknown_state_falls_back_to_noop() {
    let rules = rules();
    let rule = rule_match(&(7, "Clean"), &rules);
    assert!(rule.is_fallback());
    assert_eq!(rule.condition(), &Condition::Default);
    assert_eq!(*rule.action(), "NoOp");
}

#[test]
fn empty_rule_set_falls_back_to_noop() {
    let rule = rule_match::<u8, String>(&3, &[]);
    assert!(rule.is_fallback());
    assert_eq!(rule.action(), "NoOp");
}

#[test]
fn first_match_wins_on_duplicate_keys() {
    let rules = vec![Rule::new(1u8, "first"), Rule::new(1u8, "second")];
    assert_eq!(*rule_match(&1, &rules).action(), "first");
}

proptest! {
    #[test]
    fn matches_first_equal_key_or_default(
        keys in proptest::collection::vec(0u8..8, 0..16),
        state in 0u8..10,
    ) {
        let rules: Vec<Rule<u8, String>> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| Rule::new(*k, format!("action-{i}")))
            .collect();

        let matched = rule_match(&state, &rules);
        match keys.iter().position(|k| *k == state) {
            Some(i) => {
                prop_assert_eq!(matched.condition(), &Condition::Exact(state));
                prop_assert_eq!(matched.action().clone(), format!("action-{i}"));
            }
            None => {
                prop_assert!(matched.is_fallback());
                prop_assert_eq!(matched.action().as_str(), "NoOp");
            }
        }
    }
}
