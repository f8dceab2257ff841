//! Tooling around agent programs.
//!
//! The tracer wraps a program so every call is recorded with its percept and action, without
//! changing what the program returns.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{
    trace_agent, trace_agent_with, trace_string, StdoutTraceSink, TraceEvent, TraceSink,
    TraceValue, Traced, VecTraceSink,
};
