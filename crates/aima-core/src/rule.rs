use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Action used by the fallback rule when nothing else matches.
pub trait NoOp {
    fn no_op() -> Self;
}

impl NoOp for String {
    fn no_op() -> Self {
        "NoOp".to_string()
    }
}

impl NoOp for &'static str {
    fn no_op() -> Self {
        "NoOp"
    }
}

/// Left-hand side of a rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Condition<K> {
    /// Key of the fallback rule. Never equal to any state.
    Default,
    /// Matches a state by exact equality.
    Exact(K),
}

impl<K> Condition<K> {
    pub fn matches(&self, state: &K) -> bool
    where
        K: PartialEq,
    {
        match self {
            Condition::Default => false,
            Condition::Exact(key) => key == state,
        }
    }
}

impl<K: fmt::Debug> fmt::Display for Condition<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Default => f.write_str("default"),
            Condition::Exact(key) => write!(f, "{key:?}"),
        }
    }
}

/// A condition/action pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule<K, A> {
    condition: Condition<K>,
    action: A,
}

impl<K, A> Rule<K, A> {
    pub fn new(key: K, action: A) -> Self {
        Self {
            condition: Condition::Exact(key),
            action,
        }
    }

    /// The rule returned by [`rule_match`] when no rule applies.
    pub fn fallback() -> Self
    where
        A: NoOp,
    {
        Self {
            condition: Condition::Default,
            action: A::no_op(),
        }
    }

    pub fn condition(&self) -> &Condition<K> {
        &self.condition
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn into_action(self) -> A {
        self.action
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.condition, Condition::Default)
    }
}

/// Find the first rule whose key equals `state`.
///
/// Rules are scanned in order, so the first match wins when several keys are equal. Returns
/// [`Rule::fallback`] when no rule matches, including for an empty rule set.
pub fn rule_match<K, A>(state: &K, rules: &[Rule<K, A>]) -> Rule<K, A>
where
    K: PartialEq + Clone + fmt::Debug,
    A: Clone + NoOp,
{
    match rules.iter().find(|rule| rule.condition.matches(state)) {
        Some(rule) => rule.clone(),
        None => {
            tracing::debug!(state = ?state, rules = rules.len(), "no rule matched, using default");
            Rule::fallback()
        }
    }
}
