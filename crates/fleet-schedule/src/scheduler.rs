//! The collision-avoidance scheduler and its resolution loop.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, trace, warn};

use fleet_agent::{Agent, AgentError};
use fleet_core::{AgentId, CoreResult, PlanConfig};

use crate::{
    Assignment, Collision, NoopObserver, Schedule, ScheduleObserver, ScheduleResult, YieldAction,
    find_collisions,
};

// ── Report ────────────────────────────────────────────────────────────────────

/// How the resolution loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The returned schedule has no collisions.
    Converged,
    /// The iteration cap was hit and collisions remain.  The schedule is the
    /// best effort so far, not an error.
    Exhausted,
}

/// Everything [`CollisionAvoidanceScheduler::run`] produces.
#[derive(Clone, Debug)]
pub struct ScheduleReport {
    pub schedule:   Schedule,
    pub outcome:    Outcome,
    /// Iterations actually performed (1-based count, ≤ `max_iterations`).
    pub iterations: usize,
    /// Collisions still present in `schedule`; empty when converged.
    pub remaining:  Vec<Collision>,
}

impl ScheduleReport {
    pub fn is_converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Assigns every agent one candidate path and a start time so that no two
/// agents share a node at the same instant, resolving conflicts by priority.
///
/// Single-threaded and request-local: all working state lives inside one
/// `run` call, so one scheduler can serve any number of requests.
///
/// # Yield rules
///
/// - The lower-priority agent of a colliding pair yields; on equal priority
///   the larger id yields.
/// - Yielding means switching to the next candidate path at the same start
///   time, or, once candidates are exhausted, starting one `edge_duration`
///   later.  Re-routing comes first because delays cascade.
/// - After `max_iterations / 2` iterations, collisions surviving a pass get
///   an extra half-step delay on the lower-priority agent (on equal priority
///   the second agent of the pair).  This pass never re-routes.
#[derive(Clone, Debug)]
pub struct CollisionAvoidanceScheduler {
    edge_duration:  f64,
    max_iterations: usize,
}

impl CollisionAvoidanceScheduler {
    /// Fails with `InvalidConfiguration` for a negative or non-finite
    /// `edge_duration` or a zero `max_iterations`.
    pub fn new(edge_duration: f64, max_iterations: usize) -> CoreResult<Self> {
        PlanConfig::new()
            .with_edge_duration(edge_duration)
            .with_max_iterations(max_iterations)
            .validate()?;
        Ok(Self { edge_duration, max_iterations })
    }

    pub fn from_config(config: &PlanConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            edge_duration:  config.edge_duration,
            max_iterations: config.max_iterations,
        })
    }

    pub fn edge_duration(&self) -> f64 {
        self.edge_duration
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Resolve collisions for `agents`.
    ///
    /// Agent ids must be unique: a repeated id shares one schedule entry.
    /// [`compute_schedule`] and [`Planner`](crate::Planner) reject such input
    /// before running.
    pub fn run(&self, agents: &[Agent]) -> ScheduleReport {
        self.run_with_observer(agents, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), reporting progress to `observer`.
    pub fn run_with_observer<O: ScheduleObserver + ?Sized>(
        &self,
        agents:   &[Agent],
        observer: &mut O,
    ) -> ScheduleReport {
        let by_id: FxHashMap<AgentId, &Agent> = agents.iter().map(|a| (a.id(), a)).collect();
        debug_assert_eq!(by_id.len(), agents.len(), "duplicate agent ids");

        let mut schedule = initial_schedule(agents);
        let mut path_index: FxHashMap<AgentId, usize> =
            agents.iter().map(|a| (a.id(), 0)).collect();

        let halfway = self.max_iterations / 2;
        let mut iteration = 0;
        let mut converged = false;

        while iteration < self.max_iterations {
            iteration += 1;
            observer.on_iteration_start(iteration);

            // ── ① Detect ──────────────────────────────────────────────────
            let collisions = find_collisions(&schedule, self.edge_duration);
            debug!(iteration, collisions = collisions.len(), "collision check");
            if collisions.is_empty() {
                converged = true;
                break;
            }
            observer.on_collisions(iteration, &collisions);

            // ── ② Decide + ③ Yield, lowest (priority, id) first ──────────
            for ((_, id), named) in group_yielders(&collisions, &by_id) {
                let Some(&agent) = by_id.get(&id) else { continue };
                let Some(action) = self.yield_agent(agent, &mut schedule, &mut path_index) else {
                    continue;
                };
                trace!(iteration, agent = id.0, collisions = named.len(), ?action, "agent yields");
                observer.on_yield(iteration, id, action);
            }

            // ── ④ Half-step nudges ────────────────────────────────────────
            if iteration > halfway {
                self.nudge(iteration, &mut schedule, &by_id, observer);
            }
        }

        let remaining = if converged {
            Vec::new()
        } else {
            find_collisions(&schedule, self.edge_duration)
        };
        let outcome = if remaining.is_empty() { Outcome::Converged } else { Outcome::Exhausted };

        match outcome {
            Outcome::Converged => info!(iterations = iteration, agents = agents.len(), "schedule converged"),
            Outcome::Exhausted => warn!(
                iterations = iteration,
                remaining = remaining.len(),
                "iteration cap reached; returning schedule with unresolved collisions"
            ),
        }

        let report = ScheduleReport { schedule, outcome, iterations: iteration, remaining };
        observer.on_finish(&report);
        report
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Re-route `agent` to its next candidate, or delay it by one edge.
    fn yield_agent(
        &self,
        agent:      &Agent,
        schedule:   &mut Schedule,
        path_index: &mut FxHashMap<AgentId, usize>,
    ) -> Option<YieldAction> {
        let entry = schedule.get_mut(agent.id())?;
        let index = path_index.entry(agent.id()).or_insert(0);

        match agent.path(*index + 1) {
            Some(next) => {
                *index += 1;
                entry.path = next.clone();
                Some(YieldAction::Reroute { path_index: *index })
            }
            None => {
                entry.start_time += self.edge_duration;
                Some(YieldAction::Delay { by: self.edge_duration })
            }
        }
    }

    /// Re-detect and push the lower-priority agent of every surviving
    /// collision back by half an edge.  An agent named in several
    /// collisions is nudged once per collision.
    fn nudge<O: ScheduleObserver + ?Sized>(
        &self,
        iteration: usize,
        schedule:  &mut Schedule,
        by_id:     &FxHashMap<AgentId, &Agent>,
        observer:  &mut O,
    ) {
        let half_step = self.edge_duration * 0.5;

        for c in find_collisions(schedule, self.edge_duration) {
            let (Some(a), Some(b)) = (by_id.get(&c.agent_a), by_id.get(&c.agent_b)) else {
                continue;
            };
            // Equal priority falls through to `agent_b`, the larger id.
            let target = if a.priority() < b.priority() { a.id() } else { b.id() };

            if let Some(entry) = schedule.get_mut(target) {
                entry.start_time += half_step;
                trace!(iteration, agent = target.0, node = c.node.0, "half-step nudge");
                observer.on_yield(iteration, target, YieldAction::Nudge { by: half_step });
            }
        }
    }
}

/// Run the scheduler once with explicit parameters and return only the
/// schedule.
///
/// Fails with `InvalidConfiguration` for bad parameters and
/// `DuplicateAgent` when two agents share an id.
///
/// Callers needing a zero-collision guarantee should check
/// [`has_collisions`](crate::has_collisions) on the result, or use
/// [`CollisionAvoidanceScheduler::run`] and inspect the report.
pub fn compute_schedule(
    agents:         &[Agent],
    edge_duration:  f64,
    max_iterations: usize,
) -> ScheduleResult<Schedule> {
    let scheduler = CollisionAvoidanceScheduler::new(edge_duration, max_iterations)?;
    let mut seen = FxHashSet::default();
    if let Some(dup) = agents.iter().find(|a| !seen.insert(a.id())) {
        return Err(AgentError::DuplicateAgent(dup.id()).into());
    }
    Ok(scheduler.run(agents).schedule)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Every agent on its primary path at time zero, placed highest rank first.
fn initial_schedule(agents: &[Agent]) -> Schedule {
    let mut ranked: Vec<&Agent> = agents.iter().collect();
    ranked.sort_by(|a, b| {
        b.priority()
            .cmp(&a.priority())
            .then_with(|| a.id().cmp(&b.id()))
    });

    let mut schedule = Schedule::new();
    for agent in ranked {
        schedule.assign(agent.id(), Assignment::new(agent.primary_path().clone(), 0.0));
    }
    schedule
}

/// Collisions grouped by the agent that must yield, keyed `(priority, id)`
/// so iteration runs from the lowest-ranked yielder upward.
fn group_yielders(
    collisions: &[Collision],
    by_id:      &FxHashMap<AgentId, &Agent>,
) -> BTreeMap<(i32, AgentId), Vec<Collision>> {
    let mut groups: BTreeMap<(i32, AgentId), Vec<Collision>> = BTreeMap::new();

    for c in collisions {
        let (Some(a), Some(b)) = (by_id.get(&c.agent_a), by_id.get(&c.agent_b)) else {
            continue;
        };
        let loser = if a.outranks(b) { b } else { a };
        groups.entry((loser.priority(), loser.id())).or_default().push(*c);
    }

    groups
}
