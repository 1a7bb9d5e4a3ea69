//! Agent construction from specs.

use rustc_hash::FxHashSet;
use tracing::debug;

use fleet_core::CoreError;
use fleet_graph::{BfsPathFinder, Graph, PathFinder};

use crate::{Agent, AgentError, AgentResult, AgentSpec};

/// Build agents with the default breadth-first enumerator.
///
/// See [`build_agents_with`].
pub fn build_agents(
    graph:           &Graph,
    specs:           &[AgentSpec],
    paths_per_agent: usize,
) -> AgentResult<Vec<Agent>> {
    build_agents_with(&BfsPathFinder, graph, specs, paths_per_agent)
}

/// Enumerate up to `paths_per_agent` candidates for every spec, in input
/// order.
///
/// # Errors
///
/// - [`AgentError::Core`] if `paths_per_agent` is zero.
/// - [`AgentError::DuplicateAgent`] if two specs share an id.
/// - [`AgentError::NoPathFound`] for the first spec with an unreachable
///   destination.  The whole batch fails.
pub fn build_agents_with<F: PathFinder + ?Sized>(
    finder:          &F,
    graph:           &Graph,
    specs:           &[AgentSpec],
    paths_per_agent: usize,
) -> AgentResult<Vec<Agent>> {
    if paths_per_agent == 0 {
        return Err(CoreError::InvalidConfiguration(
            "paths_per_agent must be at least 1".into(),
        )
        .into());
    }

    let mut seen = FxHashSet::default();
    let mut agents = Vec::with_capacity(specs.len());

    for spec in specs {
        if !seen.insert(spec.id) {
            return Err(AgentError::DuplicateAgent(spec.id));
        }

        let paths = finder.find_paths(graph, spec.start_node, spec.end_node, paths_per_agent);
        debug!(
            agent = spec.id.0,
            start = spec.start_node.0,
            end = spec.end_node.0,
            candidates = paths.len(),
            "enumerated candidate paths"
        );
        agents.push(Agent::new(*spec, paths)?);
    }

    Ok(agents)
}
