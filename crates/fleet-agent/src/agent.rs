//! Agent input records and constructed agents.

use serde::Deserialize;

use fleet_core::{AgentId, NodeId};
use fleet_graph::Path;

use crate::{AgentError, AgentResult};

// ── AgentSpec ─────────────────────────────────────────────────────────────────

/// What the caller knows about an agent before any paths are computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AgentSpec {
    pub id:         AgentId,
    pub start_node: NodeId,
    pub end_node:   NodeId,
    /// Higher is more important.  Lower-priority agents yield in conflicts.
    #[serde(default)]
    pub priority:   i32,
}

impl AgentSpec {
    pub fn new(id: AgentId, start_node: NodeId, end_node: NodeId, priority: i32) -> Self {
        Self { id, start_node, end_node, priority }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// An agent with its ordered candidate paths.
///
/// `candidate_paths()[0]` is the preferred route; the rest are fallbacks in
/// discovery order.  Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Agent {
    id:              AgentId,
    priority:        i32,
    start_node:      NodeId,
    end_node:        NodeId,
    candidate_paths: Vec<Path>,
}

impl Agent {
    /// Fails with [`AgentError::NoPathFound`] if `candidate_paths` is empty.
    pub fn new(spec: AgentSpec, candidate_paths: Vec<Path>) -> AgentResult<Self> {
        if candidate_paths.is_empty() {
            return Err(AgentError::NoPathFound {
                agent: spec.id,
                from:  spec.start_node,
                to:    spec.end_node,
            });
        }
        Ok(Self {
            id:         spec.id,
            priority:   spec.priority,
            start_node: spec.start_node,
            end_node:   spec.end_node,
            candidate_paths,
        })
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn candidate_paths(&self) -> &[Path] {
        &self.candidate_paths
    }

    /// The preferred route.
    pub fn primary_path(&self) -> &Path {
        &self.candidate_paths[0]
    }

    /// Candidate at `index`, if any.
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.candidate_paths.get(index)
    }

    pub fn path_count(&self) -> usize {
        self.candidate_paths.len()
    }

    /// `true` if `other` must yield to `self` in a conflict: strictly
    /// higher priority wins, and on equal priority the smaller id wins.
    pub fn outranks(&self, other: &Agent) -> bool {
        (self.priority, std::cmp::Reverse(self.id)) > (other.priority, std::cmp::Reverse(other.id))
    }
}
