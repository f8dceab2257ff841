//! Small worlds for exercising agent programs.
//!
//! - `vacuum`: the two-room vacuum world, with table, reflex and model-based programs.
//! - `pilot`: a pilot that picks manoeuvres at random.
//! - `drivers`: loops that feed percepts to traced agents, used by the `aima` binary.

#![forbid(unsafe_code)]

pub mod config;
pub mod drivers;
pub mod pilot;
pub mod vacuum;

pub use config::DemoConfig;
