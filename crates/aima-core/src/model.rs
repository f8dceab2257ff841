use std::cell::RefCell;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::{rule_match, AgentProgram, NoOp, Rule};

/// Acts on the percept and an internal state carried across calls.
///
/// On every call the state is recomputed by `update_state(previous_state, previous_action,
/// percept, model)`, then matched against the rules. Both `state` and `last_action` are `None`
/// until the first call.
///
/// The model is shared with the caller through `Rc<RefCell<_>>` and `update_state` may mutate it
/// in place; the caller sees those writes through its own handle. Running the program while the
/// model is borrowed elsewhere panics with a `model is already borrowed` message.
pub struct ModelBasedReflexProgram<P, S, A, M, U> {
    rules: Vec<Rule<S, A>>,
    update_state: U,
    model: Rc<RefCell<M>>,
    state: Option<S>,
    action: Option<A>,
    _percept: PhantomData<fn(P)>,
}

impl<P, S, A, M, U> ModelBasedReflexProgram<P, S, A, M, U>
where
    U: FnMut(Option<&S>, Option<&A>, P, &mut M) -> S,
{
    pub fn new(rules: Vec<Rule<S, A>>, update_state: U, model: Rc<RefCell<M>>) -> Self {
        Self {
            rules,
            update_state,
            model,
            state: None,
            action: None,
            _percept: PhantomData,
        }
    }

    pub fn rules(&self) -> &[Rule<S, A>] {
        &self.rules
    }

    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    pub fn last_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Shared handle to the model threaded through `update_state`.
    pub fn model(&self) -> &Rc<RefCell<M>> {
        &self.model
    }
}

impl<P, S, A, M, U> AgentProgram<P, A> for ModelBasedReflexProgram<P, S, A, M, U>
where
    P: 'static,
    S: PartialEq + Clone + Debug + 'static,
    A: Clone + NoOp + 'static,
    M: 'static,
    U: FnMut(Option<&S>, Option<&A>, P, &mut M) -> S + 'static,
{
    fn run(&mut self, percept: P) -> A {
        let state = {
            let mut model = self.model.try_borrow_mut().unwrap_or_else(|_| {
                panic!(
                    "model is already borrowed while the program runs \
                     (release caller borrows and do not re-borrow it inside update_state)"
                )
            });
            (self.update_state)(self.state.as_ref(), self.action.as_ref(), percept, &mut *model)
        };
        let action = rule_match(&state, &self.rules).into_action();
        self.state = Some(state);
        self.action = Some(action.clone());
        action
    }
}
