use core::fmt;

use aima_core::{RandomProgram, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PilotAction {
    Descend,
    Climb,
    TurnLeft,
    TurnRight,
}

impl PilotAction {
    pub const ALL: [PilotAction; 4] = [
        PilotAction::Descend,
        PilotAction::Climb,
        PilotAction::TurnLeft,
        PilotAction::TurnRight,
    ];
}

impl fmt::Display for PilotAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PilotAction::Descend => "Descend",
            PilotAction::Climb => "Climb",
            PilotAction::TurnLeft => "Turn_Left",
            PilotAction::TurnRight => "Turn_Right",
        };
        f.write_str(name)
    }
}

aima_tools::trace_value_from_display!(PilotAction);

/// A pilot that ignores what it sees and picks a manoeuvre at random.
///
/// Seeded runs are reproducible; without a seed the generator is seeded from entropy.
pub fn random_pilot_program(seed: Option<u64>) -> Result<RandomProgram<PilotAction>> {
    let actions = PilotAction::ALL.to_vec();
    match seed {
        Some(seed) => RandomProgram::with_seed(actions, seed),
        None => RandomProgram::from_entropy(actions),
    }
}
