//! Observer hooks for the resolution loop.

use fleet_core::AgentId;

use crate::{Collision, ScheduleReport};

/// What a yielding agent did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum YieldAction {
    /// Switched to the candidate path at `path_index`, same start time.
    Reroute { path_index: usize },
    /// Out of candidates: start time pushed back by `by`.
    Delay { by: f64 },
    /// Half-step correction applied after the halfway iteration.
    Nudge { by: f64 },
}

/// Callbacks invoked by
/// [`CollisionAvoidanceScheduler::run_with_observer`][crate::CollisionAvoidanceScheduler::run_with_observer].
///
/// All methods default to no-ops so implementors only override what they
/// care about.
///
/// # Example
///
/// ```rust,ignore
/// struct YieldCounter(usize);
///
/// impl ScheduleObserver for YieldCounter {
///     fn on_yield(&mut self, _iteration: usize, _agent: AgentId, _action: YieldAction) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait ScheduleObserver {
    /// Called at the start of each iteration (1-based).
    fn on_iteration_start(&mut self, _iteration: usize) {}

    /// Called when detection finds at least one collision.
    fn on_collisions(&mut self, _iteration: usize, _collisions: &[Collision]) {}

    /// Called once per schedule change.
    fn on_yield(&mut self, _iteration: usize, _agent: AgentId, _action: YieldAction) {}

    /// Called once with the final report.
    fn on_finish(&mut self, _report: &ScheduleReport) {}
}

/// A [`ScheduleObserver`] that does nothing.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}
