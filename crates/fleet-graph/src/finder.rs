//! Candidate-path enumeration.
//!
//! # Pluggability
//!
//! Agent construction calls enumeration through the [`PathFinder`] trait, so
//! applications can swap in other strategies (k-shortest by weight, A*-based
//! generators) without touching the scheduler.  The default
//! [`BfsPathFinder`] is an unweighted breadth-first search over partial
//! paths.
//!
//! # Ordering contract
//!
//! Results come back in **discovery order**.  Shorter paths are always found
//! in earlier rounds, but paths completing in the same round keep the order
//! in which their partial paths and neighbor lists were visited.

use fleet_core::NodeId;

use crate::{Graph, Path};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable candidate-path generator.
///
/// Implementations must be `Send + Sync` so one finder can serve several
/// planning requests over the same read-only graph.
pub trait PathFinder: Send + Sync {
    /// Return at most `k` simple paths from `start` to `end`.
    ///
    /// An empty result means `end` is unreachable.  `start == end` yields the
    /// trivial single-node path.
    fn find_paths(&self, graph: &Graph, start: NodeId, end: NodeId, k: usize) -> Vec<Path>;
}

// ── BfsPathFinder ─────────────────────────────────────────────────────────────

/// Breadth-first expansion over partial paths.
///
/// Cycle avoidance is per partial path, not global: a node visited by one
/// branch stays available to every other branch, which is what lets several
/// structurally distinct routes coexist in the frontier.
///
/// The frontier holds every simple partial path of the current length, so on
/// dense graphs where fewer than `k` routes exist the search can grow
/// exponentially before the frontier drains.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsPathFinder;

impl PathFinder for BfsPathFinder {
    fn find_paths(&self, graph: &Graph, start: NodeId, end: NodeId, k: usize) -> Vec<Path> {
        bfs_paths(graph, start, end, k)
    }
}

/// Enumerate up to `k` candidate paths with the default [`BfsPathFinder`].
pub fn enumerate_paths(graph: &Graph, start: NodeId, end: NodeId, k: usize) -> Vec<Path> {
    BfsPathFinder.find_paths(graph, start, end, k)
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs_paths(graph: &Graph, start: NodeId, end: NodeId, k: usize) -> Vec<Path> {
    if k == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![Path::trivial(start)];
    }

    let mut frontier = vec![Path::trivial(start)];
    let mut found: Vec<Path> = Vec::new();

    loop {
        let mut next = Vec::new();

        for partial in &frontier {
            for &neighbor in graph.neighbors(partial.end()) {
                if neighbor == end {
                    found.push(partial.extended(neighbor));
                } else if !partial.contains(neighbor) {
                    next.push(partial.extended(neighbor));
                }
            }
        }

        // The whole round is finished before checking, so `found` may
        // overshoot `k` here.
        if found.len() >= k || next.is_empty() {
            break;
        }
        frontier = next;
    }

    found.truncate(k);
    found
}
