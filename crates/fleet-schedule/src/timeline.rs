//! Per-agent arrival timelines.

use std::collections::BTreeMap;

use fleet_core::NodeId;

/// Node → arrival times for one agent following one path.
///
/// Keyed in ascending node order so every scan over a timeline is
/// reproducible.  Simple paths visit each node once, but a node may hold
/// several timestamps if a path ever revisits it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    visits: BTreeMap<NodeId, Vec<f64>>,
}

impl Timeline {
    /// Record an arrival at `node`.
    pub fn record(&mut self, node: NodeId, time: f64) {
        self.visits.entry(node).or_default().push(time);
    }

    /// Arrival times at `node`, in arrival order.
    pub fn times_at(&self, node: NodeId) -> &[f64] {
        self.visits.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn visits(&self, node: NodeId) -> bool {
        self.visits.contains_key(&node)
    }

    /// `(node, times)` in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[f64])> + '_ {
        self.visits.iter().map(|(&n, t)| (n, t.as_slice()))
    }

    pub fn node_count(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

/// Arrival times for an agent that is at `path[0]` at `start_time` and
/// reaches `path[i]` at `start_time + i * edge_duration`.
pub fn build_timeline(path: &[NodeId], start_time: f64, edge_duration: f64) -> Timeline {
    let mut timeline = Timeline::default();
    for (i, &node) in path.iter().enumerate() {
        timeline.record(node, start_time + i as f64 * edge_duration);
    }
    timeline
}
