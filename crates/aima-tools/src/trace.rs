use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use aima_core::{Agent, AgentProgram, BoxedProgram, Thing};

/// How a percept or action is written in a trace line.
///
/// Plain values use their `Display` form. An `Option` prints its value, or `None` when a program
/// had no action to offer.
pub trait TraceValue {
    fn fmt_trace(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Implement [`TraceValue`] for types through their `Display` impl.
#[macro_export]
macro_rules! trace_value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::TraceValue for $ty {
                fn fmt_trace(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

trace_value_from_display!(
    bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, String, &str,
);

impl<T: TraceValue> TraceValue for Option<T> {
    fn fmt_trace(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_trace(f),
            None => f.write_str("None"),
        }
    }
}

struct Shown<'a, T: ?Sized>(&'a T);

impl<T: TraceValue + ?Sized> fmt::Display for Shown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_trace(f)
    }
}

/// Render a value the way trace lines show it.
pub fn trace_string<T: TraceValue + ?Sized>(value: &T) -> String {
    Shown(value).to_string()
}

/// One traced program call.
///
/// Percept and action are kept as rendered text so events outlive the values they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub agent: String,
    pub percept: String,
    pub action: String,
}

impl TraceEvent {
    pub fn new(
        agent: impl Into<String>,
        percept: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            agent: agent.into(),
            percept: percept.into(),
            action: action.into(),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} perceives <{}> and does <{}>",
            self.agent, self.percept, self.action
        )
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Collects events in memory.
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Prints each event on its own line to stdout.
#[derive(Debug, Default)]
pub struct StdoutTraceSink;

impl TraceSink for StdoutTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        println!("{event}");
    }
}

/// A program that forwards to an inner program and records every call.
///
/// Wrapping an already traced program is allowed; each layer records its own event.
pub struct Traced<P, A> {
    label: String,
    inner: BoxedProgram<P, A>,
    sink: Box<dyn TraceSink>,
}

impl<P, A> Traced<P, A> {
    pub fn new(
        label: impl Into<String>,
        inner: BoxedProgram<P, A>,
        sink: Box<dyn TraceSink>,
    ) -> Self {
        Self {
            label: label.into(),
            inner,
            sink,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<P, A> AgentProgram<P, A> for Traced<P, A>
where
    P: TraceValue + 'static,
    A: TraceValue + 'static,
{
    fn run(&mut self, percept: P) -> A {
        let shown = trace_string(&percept);
        let action = self.inner.run(percept);
        let event = TraceEvent::new(self.label.clone(), shown, trace_string(&action));
        tracing::info!(
            target: "aima::trace",
            agent = %event.agent,
            percept = %event.percept,
            action = %event.action,
            "program call"
        );
        self.sink.emit(event);
        action
    }
}

/// Trace `agent`'s program to stdout using the `<label> perceives <percept> and does <action>`
/// line format. Returns the same agent for chaining.
pub fn trace_agent<P, A>(agent: Agent<P, A>) -> Agent<P, A>
where
    P: TraceValue + 'static,
    A: TraceValue + 'static,
{
    trace_agent_with(agent, Box::new(StdoutTraceSink))
}

pub fn trace_agent_with<P, A>(agent: Agent<P, A>, sink: Box<dyn TraceSink>) -> Agent<P, A>
where
    P: TraceValue + 'static,
    A: TraceValue + 'static,
{
    let label = agent.repr();
    agent.map_program(move |inner| -> BoxedProgram<P, A> {
        Box::new(Traced::new(label, inner, sink))
    })
}
