#![cfg(feature = "serde")]

use aima_core::Rule;

#[test]
fn rules_json_roundtrip() {
    let rules = vec![
        Rule::new((0u8, "Clean".to_string()), "Right".to_string()),
        Rule::new((1u8, "Dirty".to_string()), "Suck".to_string()),
        Rule::<(u8, String), String>::fallback(),
    ];

    let json = serde_json::to_string(&rules).expect("serialize");
    let roundtrip: Vec<Rule<(u8, String), String>> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, rules);
}
