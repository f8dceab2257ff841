use std::cell::RefCell;
use std::rc::Rc;

use aima_core::Agent;
use aima_demos::pilot::random_pilot_program;
use aima_demos::vacuum::{
    model_vacuum_program, new_model, table_vacuum_program,
    Location::{A, B},
    Status::{Clean, Dirty},
    VacuumPercept,
};
use aima_tools::{trace_agent_with, TraceEvent, TraceSink};

#[derive(Clone, Default)]
struct RcSink(Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for RcSink {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn lines(sink: &RcSink) -> Vec<String> {
    sink.0.borrow().iter().map(|e| e.to_string()).collect()
}

#[test]
fn table_agent_prints_action_or_none() {
    let sink = RcSink::default();
    let mut agent = trace_agent_with(Agent::new(table_vacuum_program()), Box::new(sink.clone()));

    agent.run(VacuumPercept(A, Dirty));
    agent.run(VacuumPercept(A, Clean));
    agent.run(VacuumPercept(B, Dirty));
    agent.run(VacuumPercept(B, Clean));

    assert_eq!(
        lines(&sink),
        vec![
            "<Agent> perceives <(A, Dirty)> and does <Suck>",
            "<Agent> perceives <(A, Clean)> and does <Right>",
            "<Agent> perceives <(B, Dirty)> and does <Suck>",
            "<Agent> perceives <(B, Clean)> and does <None>",
        ]
    );
}

#[test]
fn model_agent_prints_noop_once_clean() {
    let sink = RcSink::default();
    let program = model_vacuum_program(new_model());
    let mut agent = trace_agent_with(Agent::new(program), Box::new(sink.clone()));

    agent.run(VacuumPercept(A, Clean));
    agent.run(VacuumPercept(B, Clean));

    assert_eq!(
        lines(&sink)[1],
        "<Agent> perceives <(B, Clean)> and does <NoOp>"
    );
}

#[test]
fn pilot_actions_print_bare_names() {
    let sink = RcSink::default();
    let program = random_pilot_program(Some(1)).unwrap();
    let mut agent = trace_agent_with(Agent::new(program), Box::new(sink.clone()));

    for step in 0..20usize {
        agent.run(step);
    }

    let names = ["Descend", "Climb", "Turn_Left", "Turn_Right"];
    for (step, line) in lines(&sink).iter().enumerate() {
        let prefix = format!("<Agent> perceives <{step}> and does <");
        let action = line
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap();
        assert!(names.contains(&action), "unexpected action in {line}");
    }
}
