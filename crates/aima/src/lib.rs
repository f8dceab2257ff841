//! Umbrella crate that re-exports the `aima-*` building blocks.
//!
//! ```
//! use aima::core::{Agent, Rule, SimpleReflexProgram};
//!
//! let rules = vec![Rule::new("dirty", "Suck"), Rule::new("clean", "Right")];
//! let mut agent = Agent::new(SimpleReflexProgram::new(rules, |p: &'static str| p));
//! assert_eq!(agent.run("dirty"), "Suck");
//! assert_eq!(agent.run("unknown"), "NoOp");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use aima_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use aima_tools as tools;

#[cfg(feature = "demos")]
#[cfg_attr(docsrs, doc(cfg(feature = "demos")))]
pub use aima_demos as demos;
