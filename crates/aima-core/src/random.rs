use crate::{AgentError, AgentProgram, DeterministicRng, Result, SplitMix64};

/// Chooses an action uniformly at random, ignoring the percept.
#[derive(Debug, Clone)]
pub struct RandomProgram<A, R = SplitMix64> {
    actions: Vec<A>,
    rng: R,
}

impl<A, R> RandomProgram<A, R>
where
    R: DeterministicRng,
{
    /// Fails with [`AgentError::EmptyActions`] if `actions` is empty.
    pub fn new(actions: Vec<A>, rng: R) -> Result<Self> {
        if actions.is_empty() {
            return Err(AgentError::EmptyActions);
        }
        Ok(Self { actions, rng })
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }
}

impl<A> RandomProgram<A, SplitMix64> {
    pub fn with_seed(actions: Vec<A>, seed: u64) -> Result<Self> {
        Self::new(actions, SplitMix64::new(seed))
    }

    pub fn from_entropy(actions: Vec<A>) -> Result<Self> {
        Self::new(actions, SplitMix64::from_entropy())
    }
}

impl<P, A, R> AgentProgram<P, A> for RandomProgram<A, R>
where
    A: Clone + 'static,
    R: DeterministicRng + 'static,
{
    fn run(&mut self, _percept: P) -> A {
        let index = self.rng.next_index(self.actions.len());
        self.actions[index].clone()
    }
}
