//! Adjacency graph and builder.
//!
//! # Data layout
//!
//! Node ids are caller-chosen integers, not dense indices, so adjacency is a
//! hash map from `NodeId` to that node's outgoing neighbor list.  Neighbor
//! order is preserved exactly as inserted: path enumeration explores
//! neighbors in list order, and that order decides which candidate paths
//! are discovered first.
//!
//! The graph is directed.  Undirected graphs list both directions, which
//! [`GraphBuilder::add_edge`] does for you.

use rustc_hash::FxHashMap;

use fleet_core::NodeId;

use crate::Path;

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Directed graph with ordered neighbor lists.
///
/// Immutable once built; share it read-only across planning requests.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency:  FxHashMap<NodeId, Vec<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// A graph with no nodes.  Every enumeration against it finds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a graph from `(node, neighbors)` rows, as a parsed adjacency
    /// list would provide them.
    pub fn from_adjacency<I, N>(rows: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, N)>,
        N: IntoIterator<Item = NodeId>,
    {
        let mut b = GraphBuilder::new();
        for (node, neighbors) in rows {
            b.add_node(node);
            for n in neighbors {
                b.add_directed_edge(node, n);
            }
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Outgoing neighbors of `node`, in insertion order.
    ///
    /// Unknown nodes have no neighbors.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// `true` if `path` starts at a known node and every consecutive pair
    /// is an edge of this graph.
    pub fn contains_path(&self, path: &Path) -> bool {
        self.contains_node(path.start())
            && path.nodes().windows(2).all(|w| self.has_edge(w[0], w[1]))
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use fleet_core::NodeId;
/// use fleet_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_edge(NodeId(1), NodeId(2));
/// b.add_directed_edge(NodeId(2), NodeId(3));
/// let g = b.build();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 3);
/// assert!(g.neighbors(NodeId(3)).is_empty());
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    adjacency:  FxHashMap<NodeId, Vec<NodeId>>,
    edge_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `node` exists, with no edges if it is new.
    pub fn add_node(&mut self, node: NodeId) -> &mut Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Add a **directed** edge `from → to`, appended after `from`'s existing
    /// neighbors.  Repeating an edge is a no-op.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) -> &mut Self {
        self.add_node(to);
        let out = self.adjacency.entry(from).or_default();
        if !out.contains(&to) {
            out.push(to);
            self.edge_count += 1;
        }
        self
    }

    /// Convenience: add edges in **both directions**.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.add_directed_edge(a, b);
        self.add_directed_edge(b, a)
    }

    pub fn node_count(&self) -> usize { self.adjacency.len() }
    pub fn edge_count(&self) -> usize { self.edge_count }

    pub fn build(self) -> Graph {
        Graph {
            adjacency:  self.adjacency,
            edge_count: self.edge_count,
        }
    }
}
