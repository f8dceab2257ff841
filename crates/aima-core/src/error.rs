use thiserror::Error;

/// Errors raised while constructing agents and programs.
///
/// Running a program never fails: lookups that find nothing produce a sentinel and rule matching
/// always falls back to the default rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("agent program must be supplied")]
    MissingProgram,

    #[error("random program needs at least one action to choose from")]
    EmptyActions,
}

pub type Result<T> = std::result::Result<T, AgentError>;
