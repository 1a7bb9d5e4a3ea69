use fleet_agent::AgentError;
use fleet_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("agent construction failed: {0}")]
    Agent(#[from] AgentError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
