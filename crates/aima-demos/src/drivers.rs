//! Driver loops: build an agent, feed it percepts, collect what it does.

use aima_core::{Agent, AgentProgram, DeterministicRng, SplitMix64};
use aima_tools::{trace_agent, TraceValue};
use anyhow::Result;

use crate::pilot::{random_pilot_program, PilotAction};
use crate::vacuum::{
    model_vacuum_program, new_model, reflex_vacuum_program, table_vacuum_program, Location,
    Status, VacuumAction, VacuumModel, VacuumPercept,
};
use crate::DemoConfig;

/// Percepts replayed by the table-driven driver, in order.
pub const TABLE_PERCEPTS: [VacuumPercept; 4] = [
    VacuumPercept(Location::A, Status::Dirty),
    VacuumPercept(Location::A, Status::Clean),
    VacuumPercept(Location::B, Status::Dirty),
    VacuumPercept(Location::B, Status::Clean),
];

fn agent_for<P, A>(program: impl AgentProgram<P, A>, config: &DemoConfig) -> Agent<P, A>
where
    P: TraceValue + 'static,
    A: TraceValue + 'static,
{
    let agent = Agent::new(program);
    if config.trace {
        trace_agent(agent)
    } else {
        agent
    }
}

fn pause(config: &DemoConfig) {
    if config.delay_ms > 0 {
        std::thread::sleep(config.delay());
    }
}

fn percept_rng(config: &DemoConfig) -> SplitMix64 {
    config
        .seed
        .map(SplitMix64::new)
        .unwrap_or_else(SplitMix64::from_entropy)
}

/// Feed the fixed [`TABLE_PERCEPTS`] sequence to a table-driven vacuum.
pub fn run_table(config: &DemoConfig) -> Vec<Option<VacuumAction>> {
    tracing::info!(driver = "table", steps = TABLE_PERCEPTS.len(), "Starting driver");
    let mut agent = agent_for(table_vacuum_program(), config);

    let mut actions = Vec::with_capacity(TABLE_PERCEPTS.len());
    for (i, percept) in TABLE_PERCEPTS.into_iter().enumerate() {
        if i > 0 {
            pause(config);
        }
        actions.push(agent.run(percept));
    }
    actions
}

/// Feed step indices to the random pilot.
pub fn run_random(config: &DemoConfig) -> Result<Vec<PilotAction>> {
    tracing::info!(driver = "random", steps = config.steps, "Starting driver");
    let mut agent = agent_for(random_pilot_program(config.seed)?, config);

    let mut actions = Vec::with_capacity(config.steps);
    for step in 0..config.steps {
        if step > 0 {
            pause(config);
        }
        actions.push(agent.run(step));
    }
    Ok(actions)
}

/// Feed randomly chosen percepts to the simple reflex vacuum.
pub fn run_reflex(config: &DemoConfig) -> Vec<(VacuumPercept, VacuumAction)> {
    tracing::info!(driver = "reflex", steps = config.steps, "Starting driver");
    let mut agent = agent_for(reflex_vacuum_program(), config);
    run_vacuum(&mut agent, config)
}

/// Feed randomly chosen percepts to the model-based vacuum, returning the final model as well.
pub fn run_model(config: &DemoConfig) -> (Vec<(VacuumPercept, VacuumAction)>, VacuumModel) {
    tracing::info!(driver = "model", steps = config.steps, "Starting driver");
    let model = new_model();
    let mut agent = agent_for(model_vacuum_program(model.clone()), config);
    let steps = run_vacuum(&mut agent, config);

    let snapshot = model.borrow().clone();
    (steps, snapshot)
}

fn run_vacuum(
    agent: &mut Agent<VacuumPercept, VacuumAction>,
    config: &DemoConfig,
) -> Vec<(VacuumPercept, VacuumAction)> {
    let mut rng = percept_rng(config);
    let mut steps = Vec::with_capacity(config.steps);
    for step in 0..config.steps {
        if step > 0 {
            pause(config);
        }
        let percept = VacuumPercept::ALL[rng.next_index(VacuumPercept::ALL.len())];
        steps.push((percept, agent.run(percept)));
    }
    steps
}
