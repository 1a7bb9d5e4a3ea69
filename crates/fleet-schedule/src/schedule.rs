//! The scheduler's output artifact.

use std::collections::BTreeMap;
use std::collections::btree_map;

use fleet_core::AgentId;
use fleet_graph::Path;

/// The route and departure time assigned to one agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assignment {
    pub path:       Path,
    /// Time at which the agent is at `path.start()`.  Always ≥ 0.
    pub start_time: f64,
}

impl Assignment {
    pub fn new(path: Path, start_time: f64) -> Self {
        Self { path, start_time }
    }

    /// Time at which the agent reaches the end of its path.
    pub fn arrival_time(&self, edge_duration: f64) -> f64 {
        self.start_time + self.path.edge_count() as f64 * edge_duration
    }
}

/// Agent id → assignment, iterated in ascending id order.
///
/// Consumers (writers, viewers) only ever get shared access.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    entries: BTreeMap<AgentId, Assignment>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the assignment for `agent`.
    pub fn assign(&mut self, agent: AgentId, assignment: Assignment) {
        self.entries.insert(agent, assignment);
    }

    pub fn get(&self, agent: AgentId) -> Option<&Assignment> {
        self.entries.get(&agent)
    }

    pub(crate) fn get_mut(&mut self, agent: AgentId) -> Option<&mut Assignment> {
        self.entries.get_mut(&agent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, AgentId, Assignment> {
        self.entries.iter()
    }

    /// Latest arrival across all agents; 0 for an empty schedule.
    pub fn makespan(&self, edge_duration: f64) -> f64 {
        self.entries
            .values()
            .map(|a| a.arrival_time(edge_duration))
            .fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = (&'a AgentId, &'a Assignment);
    type IntoIter = btree_map::Iter<'a, AgentId, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(AgentId, Assignment)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (AgentId, Assignment)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
