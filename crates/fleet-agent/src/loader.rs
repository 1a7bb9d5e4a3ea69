//! Agent table loaders.
//!
//! # CSV format
//!
//! ```csv
//! id,start_node,end_node,priority
//! 1,1,8,3
//! 2,2,7,2
//! 3,5,6,1
//! ```
//!
//! The `priority` column may be left out entirely, in which case every agent
//! gets priority 0.
//!
//! # Pair-list format
//!
//! One `start,end` pair per line, most important agent first:
//!
//! ```text
//! 1,2
//! 2,3
//! 5,6
//! ```
//!
//! Agents get ids `1..=n` in line order and priority `n - index`, so the
//! first line outranks every other.

use std::io::Read;
use std::path::Path;

use fleet_core::{AgentId, NodeId};

use crate::{AgentError, AgentResult, AgentSpec};

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Load agent specs from a CSV file.
pub fn load_agents_csv(path: &Path) -> AgentResult<Vec<AgentSpec>> {
    let file = std::fs::File::open(path)?;
    load_agents_reader(file)
}

/// Like [`load_agents_csv`] but accepts any `Read` source.
pub fn load_agents_reader<R: Read>(reader: R) -> AgentResult<Vec<AgentSpec>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<AgentSpec>()
        .map(|row| row.map_err(|e| AgentError::Parse(e.to_string())))
        .collect()
}

// ── Pair list ─────────────────────────────────────────────────────────────────

/// Parse `start,end` lines ordered by importance.  Blank lines are skipped.
pub fn parse_agent_pairs(text: &str) -> AgentResult<Vec<AgentSpec>> {
    let mut pairs = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (start, end) = line.split_once(',').ok_or_else(|| {
            AgentError::Parse(format!("line {}: expected `start,end`, got {line:?}", i + 1))
        })?;
        pairs.push((parse_node(start, i + 1)?, parse_node(end, i + 1)?));
    }

    let count = pairs.len() as i32;
    Ok(pairs
        .into_iter()
        .enumerate()
        .map(|(i, (start, end))| {
            AgentSpec::new(AgentId(i as u32 + 1), start, end, count - i as i32)
        })
        .collect())
}

fn parse_node(s: &str, line: usize) -> AgentResult<NodeId> {
    let s = s.trim();
    s.parse::<u32>()
        .map(NodeId)
        .map_err(|_| AgentError::Parse(format!("line {line}: invalid node id {s:?}")))
}
