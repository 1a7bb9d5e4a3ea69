//! `fleet-schedule` — collision-free start times and routes for many agents.
//!
//! # Resolution loop
//!
//! ```text
//! every agent ← (candidate_paths[0], start = 0)
//! repeat up to max_iterations:
//!   ① Detect  — timelines for every agent, compare every pair node by node.
//!               No collisions → converged.
//!   ② Decide  — per collision the lower-priority agent yields
//!               (equal priority: the larger id yields).
//!   ③ Yield   — ascending (priority, id): next candidate path if one is
//!               left, otherwise start one edge_duration later.
//!   ④ Nudge   — past the halfway iteration only: re-detect and delay the
//!               lower-priority agent of each remaining collision by half
//!               an edge_duration.
//! ```
//!
//! Running out of iterations is not an error: the last schedule is returned
//! with its remaining collisions in the [`ScheduleReport`].
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`timeline`]    | `Timeline`, `build_timeline`                             |
//! | [`collision`]   | `Collision`, `find_collisions`, `has_collisions`         |
//! | [`schedule`]    | `Schedule`, `Assignment`                                 |
//! | [`scheduler`]   | `CollisionAvoidanceScheduler`, `ScheduleReport`, `compute_schedule` |
//! | [`observer`]    | `ScheduleObserver`, `NoopObserver`, `YieldAction`        |
//! | [`planner`]     | `Planner` — build agents and schedule in one call        |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Builds timelines on Rayon's thread pool.                |
//! | `serde`    | Derives `Serialize` on the output types.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_core::PlanConfig;
//! use fleet_schedule::Planner;
//!
//! let graph = fleet_graph::parse_adjacency(ADJACENCY)?;
//! let specs = fleet_agent::parse_agent_pairs(PAIRS)?;
//! let schedule = Planner::new(&graph, PlanConfig::default())?.plan(&specs)?;
//! for (id, assignment) in &schedule {
//!     println!("{id}: {} @ {}", assignment.path, assignment.start_time);
//! }
//! ```

pub mod collision;
pub mod error;
pub mod observer;
pub mod planner;
pub mod schedule;
pub mod scheduler;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use collision::{COLLISION_EPSILON, Collision, find_collisions, has_collisions};
pub use error::{ScheduleError, ScheduleResult};
pub use observer::{NoopObserver, ScheduleObserver, YieldAction};
pub use planner::Planner;
pub use schedule::{Assignment, Schedule};
pub use scheduler::{CollisionAvoidanceScheduler, Outcome, ScheduleReport, compute_schedule};
pub use timeline::{Timeline, build_timeline};
