use fleet_core::{AgentId, CoreError, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no path from {from} to {to} for agent {agent}")]
    NoPathFound { agent: AgentId, from: NodeId, to: NodeId },

    #[error("agent id {0} appears more than once")]
    DuplicateAgent(AgentId),

    #[error("agent table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type AgentResult<T> = Result<T, AgentError>;
