//! Agent program primitives.
//!
//! An agent program maps a percept (or the history of percepts) to an action. This crate provides
//! the classic strategies: table lookup, uniform random choice, simple reflex and model-based
//! reflex, along with the rule matcher the reflex programs share and a small `Thing`/`Agent`
//! capability root.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod error;
pub mod model;
pub mod program;
pub mod random;
pub mod reflex;
pub mod rng;
pub mod rule;
pub mod table;
pub mod thing;

pub use agent::{Agent, AgentBuilder};
pub use error::{AgentError, Result};
pub use model::ModelBasedReflexProgram;
pub use program::{AgentProgram, BoxedProgram};
pub use random::RandomProgram;
pub use reflex::SimpleReflexProgram;
pub use rng::{DeterministicRng, SplitMix64};
pub use rule::{rule_match, Condition, NoOp, Rule};
pub use table::TableDrivenProgram;
pub use thing::Thing;
