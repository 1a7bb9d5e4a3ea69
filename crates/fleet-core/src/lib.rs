//! `fleet-core` — foundational types for the fleet path planner.
//!
//! Every other `fleet-*` crate depends on this one.  It has no `fleet-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                   |
//! | [`config`]      | `PlanConfig` (paths per agent, edge duration, cap)    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the id types.            |

pub mod config;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlanConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, NodeId};
