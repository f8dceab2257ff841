use std::cell::RefCell;
use std::rc::Rc;

use aima_core::{Agent, AgentProgram, RandomProgram};
use aima_tools::{
    trace_agent, trace_agent_with, trace_string, TraceEvent, TraceSink, Traced, VecTraceSink,
};

#[derive(Clone, Default)]
struct RcSink(Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for RcSink {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

#[test]
fn event_renders_classic_line() {
    let event = TraceEvent::new("<Agent>", "(A, Dirty)", "Suck");
    assert_eq!(event.to_string(), "<Agent> perceives <(A, Dirty)> and does <Suck>");
}

#[test]
fn traced_agent_returns_same_actions_and_logs_each_call() {
    let handle = RcSink::default();
    let shared = handle.0.clone();

    let mut plain = Agent::new(|p: u32| p % 3);
    let mut traced = trace_agent_with(Agent::new(|p: u32| p % 3), Box::new(handle));

    for p in 0..10 {
        assert_eq!(traced.run(p), plain.run(p));
    }

    let events = shared.borrow();
    assert_eq!(events.len(), 10);
    assert_eq!(events[4], TraceEvent::new("<Agent>", "4", "1"));
}

#[test]
fn traced_random_program_matches_untraced_with_same_seed() {
    let actions = vec!["Climb", "Descend"];
    let mut plain = Agent::new(RandomProgram::with_seed(actions.clone(), 3).unwrap());
    let mut traced = trace_agent_with(
        Agent::new(RandomProgram::with_seed(actions, 3).unwrap()),
        Box::new(VecTraceSink::default()),
    );
    for i in 0..50u32 {
        let a: &str = plain.run(i);
        let b: &str = traced.run(i);
        assert_eq!(a, b);
    }
}

#[test]
fn trace_uses_agent_label() {
    let handle = RcSink::default();
    let shared = handle.0.clone();
    let agent = Agent::builder()
        .label("Pilot")
        .program(|_: u32| "Climb")
        .build()
        .unwrap();

    let mut agent = trace_agent_with(agent, Box::new(handle));
    agent.run(0);

    let events = shared.borrow();
    assert_eq!(events[0].to_string(), "<Pilot> perceives <0> and does <Climb>");
}

#[test]
fn tracing_twice_logs_twice() {
    let handle = RcSink::default();
    let shared = handle.0.clone();

    let agent = trace_agent_with(Agent::new(|p: u8| p), Box::new(handle.clone()));
    let mut agent = trace_agent_with(agent, Box::new(handle));
    assert_eq!(agent.run(5), 5);

    assert_eq!(shared.borrow().len(), 2);
}

#[test]
fn traced_program_can_be_used_without_an_agent() {
    let handle = RcSink::default();
    let shared = handle.0.clone();
    let mut program: Traced<i32, i32> =
        Traced::new("<Custom>", Box::new(|p: i32| -p), Box::new(handle));

    assert_eq!(program.run(4), -4);
    assert_eq!(shared.borrow()[0], TraceEvent::new("<Custom>", "4", "-4"));
}

#[test]
fn optional_actions_print_value_or_none() {
    let handle = RcSink::default();
    let shared = handle.0.clone();
    let program = |p: u8| if p == 0 { Some("Suck") } else { None };
    let mut agent = trace_agent_with(Agent::new(program), Box::new(handle));

    assert_eq!(agent.run(0), Some("Suck"));
    assert_eq!(agent.run(1), None);

    let events = shared.borrow();
    assert_eq!(events[0].to_string(), "<Agent> perceives <0> and does <Suck>");
    assert_eq!(events[1].to_string(), "<Agent> perceives <1> and does <None>");
}

#[test]
fn trace_string_uses_display_form() {
    assert_eq!(trace_string(&"Climb"), "Climb");
    assert_eq!(trace_string(&Some(7u32)), "7");
    assert_eq!(trace_string(&None::<u32>), "None");
}

#[test]
fn stdout_trace_keeps_behavior() {
    let mut agent = trace_agent(Agent::new(|p: u32| p + 1));
    assert_eq!(agent.run(1), 2);
}
