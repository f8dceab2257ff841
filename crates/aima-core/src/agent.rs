use core::fmt;

use crate::thing::short_type_name;
use crate::{AgentError, AgentProgram, BoxedProgram, Result, Thing};

type GrabFn = Box<dyn Fn(&dyn Thing) -> bool>;

/// A thing that acts through a program.
///
/// The program only ever sees percepts, never the agent, so the bookkeeping fields below are
/// maintained by whatever environment drives the agent.
pub struct Agent<P, A> {
    pub alive: bool,
    pub bump: bool,
    pub holding: Vec<Box<dyn Thing>>,
    pub performance: i64,
    label: Option<String>,
    program: BoxedProgram<P, A>,
    grab: Option<GrabFn>,
}

impl<P: 'static, A: 'static> Agent<P, A> {
    pub fn new(program: impl AgentProgram<P, A>) -> Self {
        Self::from_boxed(Box::new(program))
    }

    pub fn builder() -> AgentBuilder<P, A> {
        AgentBuilder::default()
    }

    /// Fails with [`AgentError::MissingProgram`] when no program is given.
    pub fn try_from_program(program: Option<BoxedProgram<P, A>>) -> Result<Self> {
        program.map(Self::from_boxed).ok_or(AgentError::MissingProgram)
    }

    fn from_boxed(program: BoxedProgram<P, A>) -> Self {
        Self {
            alive: true,
            bump: false,
            holding: Vec::new(),
            performance: 0,
            label: None,
            program,
            grab: None,
        }
    }

    /// Feed one percept to the program and return its action.
    pub fn run(&mut self, percept: P) -> A {
        self.program.run(percept)
    }

    /// Replace the program with `f(program)`, keeping every other field.
    pub fn map_program<F>(self, f: F) -> Self
    where
        F: FnOnce(BoxedProgram<P, A>) -> BoxedProgram<P, A>,
    {
        let Self {
            alive,
            bump,
            holding,
            performance,
            label,
            program,
            grab,
        } = self;
        Self {
            alive,
            bump,
            holding,
            performance,
            label,
            program: f(program),
            grab,
        }
    }

    /// Whether this agent can pick up `thing`. False unless a predicate was installed.
    pub fn can_grab(&self, thing: &dyn Thing) -> bool {
        self.grab.as_ref().is_some_and(|grab| grab(thing))
    }
}

impl<P, A> Thing for Agent<P, A> {
    fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| short_type_name::<Self>().to_string())
    }

    fn alive(&self) -> Option<bool> {
        Some(self.alive)
    }

    fn show_state(&self) -> String {
        let holding: Vec<String> = self.holding.iter().map(|t| t.repr()).collect();
        format!(
            "{} alive={} bump={} holding=[{}] performance={}",
            self.repr(),
            self.alive,
            self.bump,
            holding.join(", "),
            self.performance
        )
    }
}

impl<P, A> fmt::Debug for Agent<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("label", &self.label())
            .field("alive", &self.alive)
            .field("bump", &self.bump)
            .field("holding", &self.holding.len())
            .field("performance", &self.performance)
            .finish_non_exhaustive()
    }
}

pub struct AgentBuilder<P, A> {
    label: Option<String>,
    program: Option<BoxedProgram<P, A>>,
    grab: Option<GrabFn>,
}

impl<P, A> Default for AgentBuilder<P, A> {
    fn default() -> Self {
        Self {
            label: None,
            program: None,
            grab: None,
        }
    }
}

impl<P: 'static, A: 'static> AgentBuilder<P, A> {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn program(mut self, program: impl AgentProgram<P, A>) -> Self {
        self.program = Some(Box::new(program));
        self
    }

    pub fn boxed_program(mut self, program: BoxedProgram<P, A>) -> Self {
        self.program = Some(program);
        self
    }

    pub fn can_grab(mut self, grab: impl Fn(&dyn Thing) -> bool + 'static) -> Self {
        self.grab = Some(Box::new(grab));
        self
    }

    pub fn build(self) -> Result<Agent<P, A>> {
        let mut agent = Agent::try_from_program(self.program)?;
        agent.label = self.label;
        agent.grab = self.grab;
        Ok(agent)
    }
}
