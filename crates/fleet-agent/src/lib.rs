//! `fleet-agent` — agents and their candidate paths.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`agent`]   | `AgentSpec` (caller input), `Agent` (spec + candidates)    |
//! | [`builder`] | `build_agents`, `build_agents_with`                        |
//! | [`loader`]  | `load_agents_csv`, `load_agents_reader`, `parse_agent_pairs` |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                             |
//!
//! # Construction model
//!
//! An [`Agent`] is only ever created with at least one candidate path.  An
//! unreachable destination fails the whole batch with
//! [`AgentError::NoPathFound`]: a schedule is only meaningful for a complete
//! agent set, so nothing downstream ever sees a path-less agent.

pub mod agent;
pub mod builder;
pub mod error;
pub mod loader;


pub use agent::{Agent, AgentSpec};
pub use builder::{build_agents, build_agents_with};
pub use error::{AgentError, AgentResult};
pub use loader::{load_agents_csv, load_agents_reader, parse_agent_pairs};
