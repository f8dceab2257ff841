//! The two-room vacuum world.
//!
//! Room `A` sits at grid (0, 0) and room `B` at (0, 1). Each room is either clean or dirty and
//! the agent perceives its own location and that room's status.

use core::fmt;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use aima_core::{
    Condition, ModelBasedReflexProgram, NoOp, Rule, SimpleReflexProgram, TableDrivenProgram,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    A,
    B,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::A, Location::B];

    pub fn coords(self) -> (u32, u32) {
        match self {
            Location::A => (0, 0),
            Location::B => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Clean,
    Dirty,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VacuumPercept(pub Location, pub Status);

impl VacuumPercept {
    pub const ALL: [VacuumPercept; 4] = [
        VacuumPercept(Location::A, Status::Clean),
        VacuumPercept(Location::A, Status::Dirty),
        VacuumPercept(Location::B, Status::Clean),
        VacuumPercept(Location::B, Status::Dirty),
    ];

    pub fn location(self) -> Location {
        self.0
    }

    pub fn status(self) -> Status {
        self.1
    }
}

impl fmt::Debug for VacuumPercept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.0, self.1)
    }
}

impl fmt::Display for VacuumPercept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VacuumAction {
    Left,
    Right,
    Suck,
    NoOp,
}

impl fmt::Display for VacuumAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VacuumAction::Left => "Left",
            VacuumAction::Right => "Right",
            VacuumAction::Suck => "Suck",
            VacuumAction::NoOp => "NoOp",
        };
        f.write_str(name)
    }
}

aima_tools::trace_value_from_display!(VacuumPercept, VacuumAction);

impl NoOp for VacuumAction {
    fn no_op() -> Self {
        VacuumAction::NoOp
    }
}

/// What the model-based agent believes after a percept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacuumState {
    Room(VacuumPercept),
    /// Both rooms are known to be clean.
    AllClean,
}

/// Last known status per room; `None` until the room has been perceived.
pub type VacuumModel = BTreeMap<Location, Option<Status>>;

pub type InterpretInputFn = fn(VacuumPercept) -> VacuumPercept;

pub type ReflexVacuumProgram =
    SimpleReflexProgram<VacuumPercept, VacuumPercept, VacuumAction, InterpretInputFn>;

pub type UpdateStateFn = fn(
    Option<&VacuumState>,
    Option<&VacuumAction>,
    VacuumPercept,
    &mut VacuumModel,
) -> VacuumState;

pub type ModelVacuumProgram =
    ModelBasedReflexProgram<VacuumPercept, VacuumState, VacuumAction, VacuumModel, UpdateStateFn>;

fn percept(location: Location, status: Status) -> VacuumPercept {
    VacuumPercept(location, status)
}

pub fn reflex_rules() -> Vec<Rule<VacuumPercept, VacuumAction>> {
    use Location::*;
    use Status::*;

    vec![
        Rule::new(percept(A, Clean), VacuumAction::Right),
        Rule::new(percept(A, Dirty), VacuumAction::Suck),
        Rule::new(percept(B, Clean), VacuumAction::Left),
        Rule::new(percept(B, Dirty), VacuumAction::Suck),
    ]
}

pub fn model_rules() -> Vec<Rule<VacuumState, VacuumAction>> {
    let mut rules: Vec<_> = reflex_rules()
        .into_iter()
        .filter_map(|rule| match rule.condition() {
            Condition::Exact(p) => Some(Rule::new(VacuumState::Room(*p), *rule.action())),
            Condition::Default => None,
        })
        .collect();
    rules.push(Rule::new(VacuumState::AllClean, VacuumAction::NoOp));
    rules
}

/// Percept-sequence table covering the runs of length one to three that matter for the demo.
pub fn table() -> BTreeMap<Vec<VacuumPercept>, VacuumAction> {
    use Location::*;
    use Status::*;
    use VacuumAction::*;

    BTreeMap::from([
        (vec![percept(A, Clean)], Right),
        (vec![percept(A, Dirty)], Suck),
        (vec![percept(B, Clean)], Left),
        (vec![percept(B, Dirty)], Suck),
        (vec![percept(A, Dirty), percept(A, Clean)], Right),
        (vec![percept(A, Clean), percept(B, Dirty)], Suck),
        (vec![percept(B, Clean), percept(A, Dirty)], Suck),
        (vec![percept(B, Dirty), percept(B, Clean)], Left),
        (vec![percept(A, Dirty), percept(A, Clean), percept(B, Dirty)], Suck),
        (vec![percept(B, Dirty), percept(B, Clean), percept(A, Dirty)], Suck),
    ])
}

pub fn interpret_input(percept: VacuumPercept) -> VacuumPercept {
    percept
}

/// Record the percept in the model and report `AllClean` once both rooms are known clean.
pub fn update_state(
    _state: Option<&VacuumState>,
    _action: Option<&VacuumAction>,
    percept: VacuumPercept,
    model: &mut VacuumModel,
) -> VacuumState {
    model.insert(percept.location(), Some(percept.status()));
    tracing::debug!(model = ?model, "updated model");

    let all_clean = Location::ALL
        .iter()
        .all(|loc| model.get(loc).copied().flatten() == Some(Status::Clean));
    if all_clean {
        VacuumState::AllClean
    } else {
        VacuumState::Room(percept)
    }
}

/// A model with every room unknown.
pub fn new_model() -> Rc<RefCell<VacuumModel>> {
    let model: VacuumModel = Location::ALL.iter().map(|loc| (*loc, None)).collect();
    Rc::new(RefCell::new(model))
}

pub fn table_vacuum_program() -> TableDrivenProgram<VacuumPercept, VacuumAction> {
    TableDrivenProgram::new(table())
}

pub fn reflex_vacuum_program() -> ReflexVacuumProgram {
    SimpleReflexProgram::new(reflex_rules(), interpret_input as InterpretInputFn)
}

pub fn model_vacuum_program(model: Rc<RefCell<VacuumModel>>) -> ModelVacuumProgram {
    ModelBasedReflexProgram::new(model_rules(), update_state as UpdateStateFn, model)
}
