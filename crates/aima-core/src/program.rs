/// Maps a percept to an action.
///
/// Programs only see the percept, never the agent that owns them. Any `FnMut(P) -> A` closure is
/// a program, so callers can plug in custom strategies alongside the ones in this crate.
pub trait AgentProgram<P, A>: 'static {
    fn run(&mut self, percept: P) -> A;
}

impl<P, A, F> AgentProgram<P, A> for F
where
    F: FnMut(P) -> A + 'static,
{
    fn run(&mut self, percept: P) -> A {
        self(percept)
    }
}

pub type BoxedProgram<P, A> = Box<dyn AgentProgram<P, A>>;

