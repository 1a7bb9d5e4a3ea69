//! Adjacency-list text loader.
//!
//! # Format
//!
//! One node per line, neighbors in brackets.  A trailing comma and blank
//! lines are tolerated so a pasted dictionary literal parses as-is:
//!
//! ```text
//! 1: [2, 3],
//! 2: [1, 4],
//! 3: [1, 4],
//! 4: [2, 3]
//! ```
//!
//! Neighbor order is preserved; it determines path discovery order.  A
//! neighbor repeated on one line is kept once, at its first position, so
//! `1: [2, 2]` is a single edge and yields a single path to 2.

use std::path::Path;

use fleet_core::NodeId;

use crate::{Graph, GraphBuilder, GraphError, GraphResult};

/// Load an adjacency list from a file.
pub fn load_adjacency(path: &Path) -> GraphResult<Graph> {
    let text = std::fs::read_to_string(path)?;
    parse_adjacency(&text)
}

/// Parse adjacency-list text into a [`Graph`].
///
/// Repeated neighbors collapse into one edge (see the module docs).
///
/// ```
/// use fleet_core::NodeId;
/// use fleet_graph::parse_adjacency;
///
/// let g = parse_adjacency("1: [2, 3],\n2: [1]\n3: []").unwrap();
/// assert_eq!(g.neighbors(NodeId(1)), &[NodeId(2), NodeId(3)]);
/// assert!(g.neighbors(NodeId(3)).is_empty());
/// ```
pub fn parse_adjacency(text: &str) -> GraphResult<Graph> {
    let mut b = GraphBuilder::new();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim().trim_end_matches(',').trim_end();
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| parse_err(line_no, "expected `node: [neighbors]`"))?;

        let node = parse_node(key, line_no)?;
        b.add_node(node);

        let inner = value
            .trim()
            .strip_prefix('[')
            .and_then(|v| v.strip_suffix(']'))
            .ok_or_else(|| parse_err(line_no, "neighbor list must be enclosed in [ ]"))?;

        for token in inner.split(',') {
            if token.trim().is_empty() {
                continue;
            }
            b.add_directed_edge(node, parse_node(token, line_no)?);
        }
    }

    Ok(b.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_node(s: &str, line: usize) -> GraphResult<NodeId> {
    let s = s.trim();
    s.parse::<u32>()
        .map(NodeId)
        .map_err(|_| parse_err(line, &format!("invalid node id {s:?}")))
}

fn parse_err(line: usize, message: &str) -> GraphError {
    GraphError::Parse { line, message: message.to_owned() }
}
