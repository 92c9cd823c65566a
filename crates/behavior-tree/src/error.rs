//! Error types for configuration and scheduling.
//!
//! Tree evaluation itself never fails; misuse such as an empty composite or a
//! missing root has a defined status instead.

use thiserror::Error;

use crate::scheduler::AgentId;

/// Invalid scheduler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("tick interval must be a finite, non-negative number of seconds, got {0}")]
    InvalidTickInterval(f32),
}

/// Errors surfaced by the [`Scheduler`](crate::Scheduler).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SchedulerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown agent {0}")]
    UnknownAgent(AgentId),

    #[error("agent ids exhausted")]
    AgentIdsExhausted,
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
