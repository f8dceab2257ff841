use std::fmt::Debug;
use std::marker::PhantomData;

use crate::{rule_match, AgentProgram, NoOp, Rule};

/// Acts on the current percept only.
///
/// The percept is turned into a state by `interpret_input`, and the action comes from the first
/// rule whose key equals that state. Nothing is remembered between calls.
pub struct SimpleReflexProgram<P, S, A, I> {
    rules: Vec<Rule<S, A>>,
    interpret_input: I,
    _percept: PhantomData<fn(P)>,
}

impl<P, S, A, I> SimpleReflexProgram<P, S, A, I>
where
    I: FnMut(P) -> S,
{
    pub fn new(rules: Vec<Rule<S, A>>, interpret_input: I) -> Self {
        Self {
            rules,
            interpret_input,
            _percept: PhantomData,
        }
    }

    pub fn rules(&self) -> &[Rule<S, A>] {
        &self.rules
    }
}

impl<P, S, A, I> AgentProgram<P, A> for SimpleReflexProgram<P, S, A, I>
where
    P: 'static,
    S: PartialEq + Clone + Debug + 'static,
    A: Clone + NoOp + 'static,
    I: FnMut(P) -> S + 'static,
{
    fn run(&mut self, percept: P) -> A {
        let state = (self.interpret_input)(percept);
        rule_match(&state, &self.rules).into_action()
    }
}
