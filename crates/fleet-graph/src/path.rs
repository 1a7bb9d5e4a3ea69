//! Node-sequence paths.

use std::fmt;

use fleet_core::NodeId;

use crate::GraphError;

/// An ordered, non-empty sequence of nodes from start to end inclusive.
///
/// Paths produced by [`PathFinder`](crate::PathFinder) are simple (no node
/// repeats); [`is_simple`](Self::is_simple) checks that for arbitrary paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<NodeId>", into = "Vec<NodeId>"))]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// The single-node path of an agent that is already at its destination.
    pub fn trivial(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes (always ≥ 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of traversed edges, i.e. the path length used for timing.
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// `true` if no node appears twice.
    pub fn is_simple(&self) -> bool {
        self.nodes
            .iter()
            .enumerate()
            .all(|(i, n)| !self.nodes[i + 1..].contains(n))
    }

    /// Extend by one node.  Used by the enumerator to grow partial paths.
    pub(crate) fn extended(&self, next: NodeId) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(next);
        Self { nodes }
    }
}

impl TryFrom<Vec<NodeId>> for Path {
    type Error = GraphError;

    fn try_from(nodes: Vec<NodeId>) -> Result<Self, GraphError> {
        if nodes.is_empty() {
            return Err(GraphError::EmptyPath);
        }
        Ok(Self { nodes })
    }
}

impl From<Path> for Vec<NodeId> {
    fn from(path: Path) -> Vec<NodeId> {
        path.nodes
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", n.0)?;
        }
        Ok(())
    }
}
