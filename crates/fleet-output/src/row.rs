//! Plain data rows and their derivation from a [`Schedule`].

use fleet_graph::GridLayout;
use fleet_schedule::Schedule;

/// The route and timing chosen for one agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRow {
    pub agent_id:     u32,
    pub start_time:   f64,
    pub arrival_time: f64,
    pub hops:         u32,
    /// Node ids separated by single spaces, start first.
    pub path:         String,
}

/// One node visit.  `x`/`y` are present only when a grid layout is known
/// and contains the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointRow {
    pub agent_id:     u32,
    pub step:         u32,
    pub node:         u32,
    pub arrival_time: f64,
    pub x:            Option<u32>,
    pub y:            Option<u32>,
}

/// Collision count seen at the start of one resolution iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationRow {
    pub iteration:  u32,
    pub collisions: u32,
}

pub fn assignment_rows(schedule: &Schedule, edge_duration: f64) -> Vec<AssignmentRow> {
    schedule
        .iter()
        .map(|(id, a)| AssignmentRow {
            agent_id:     id.0,
            start_time:   a.start_time,
            arrival_time: a.arrival_time(edge_duration),
            hops:         a.path.edge_count() as u32,
            path:         a
                .path
                .nodes()
                .iter()
                .map(|n| n.0.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}

/// Waypoints for every agent, ascending agent id then step.
pub fn waypoint_rows(
    schedule:      &Schedule,
    edge_duration: f64,
    layout:        Option<&GridLayout>,
) -> Vec<WaypointRow> {
    let mut rows = Vec::new();
    for (id, a) in schedule {
        for (step, &node) in a.path.nodes().iter().enumerate() {
            let coord = layout.and_then(|l| l.node_to_coord(node));
            rows.push(WaypointRow {
                agent_id:     id.0,
                step:         step as u32,
                node:         node.0,
                arrival_time: a.start_time + step as f64 * edge_duration,
                x:            coord.map(|c| c.0),
                y:            coord.map(|c| c.1),
            });
        }
    }
    rows
}
