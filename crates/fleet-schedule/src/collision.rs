//! Pairwise collision detection.
//!
//! # Ordering
//!
//! Records come out in a fixed order so scheduling is reproducible:
//! agent pairs by ascending id (the lower id is always `agent_a`), then
//! shared nodes by ascending node id, then timestamps in arrival order.
//!
//! # Cost
//!
//! Quadratic in agent count, linear in path length per pair.  Fine for tens
//! of agents; no time or space index is kept.

use fleet_core::{AgentId, NodeId};

use crate::{Schedule, Timeline, build_timeline};

/// Two arrivals closer than this are simultaneous.
pub const COLLISION_EPSILON: f64 = 1e-6;

/// Two agents at the same node at (nearly) the same time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Collision {
    pub agent_a: AgentId,
    pub agent_b: AgentId,
    pub node:    NodeId,
    /// Midpoint of the two observed arrival times.
    pub time:    f64,
}

/// Every collision in `schedule`.  Pure: calling twice gives equal results.
pub fn find_collisions(schedule: &Schedule, edge_duration: f64) -> Vec<Collision> {
    let timelines = build_timelines(schedule, edge_duration);
    let mut collisions = Vec::new();

    for (i, (a, ta)) in timelines.iter().enumerate() {
        for (b, tb) in &timelines[i + 1..] {
            collide_pair(*a, ta, *b, tb, &mut collisions);
        }
    }

    collisions
}

/// `true` if [`find_collisions`] would return anything.
pub fn has_collisions(schedule: &Schedule, edge_duration: f64) -> bool {
    !find_collisions(schedule, edge_duration).is_empty()
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn collide_pair(
    a:   AgentId,
    ta:  &Timeline,
    b:   AgentId,
    tb:  &Timeline,
    out: &mut Vec<Collision>,
) {
    for (node, times_a) in ta.iter() {
        let times_b = tb.times_at(node);
        if times_b.is_empty() {
            continue;
        }
        for &t1 in times_a {
            for &t2 in times_b {
                if (t1 - t2).abs() <= COLLISION_EPSILON {
                    out.push(Collision {
                        agent_a: a,
                        agent_b: b,
                        node,
                        time: (t1 + t2) / 2.0,
                    });
                }
            }
        }
    }
}

/// One timeline per scheduled agent, ascending id.
#[cfg(not(feature = "parallel"))]
fn build_timelines(schedule: &Schedule, edge_duration: f64) -> Vec<(AgentId, Timeline)> {
    schedule
        .iter()
        .map(|(&id, a)| (id, build_timeline(a.path.nodes(), a.start_time, edge_duration)))
        .collect()
}

/// One timeline per scheduled agent, ascending id.  Built on Rayon's pool;
/// `collect` keeps input order.
#[cfg(feature = "parallel")]
fn build_timelines(schedule: &Schedule, edge_duration: f64) -> Vec<(AgentId, Timeline)> {
    use rayon::prelude::*;

    let entries: Vec<_> = schedule.iter().collect();
    entries
        .par_iter()
        .map(|&(&id, a)| (id, build_timeline(a.path.nodes(), a.start_time, edge_duration)))
        .collect()
}
