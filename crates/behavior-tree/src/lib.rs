//! Tick-driven behavior trees for frame-based games.
//!
//! Once per frame the host calls [`BehaviorTree::tick`] with its own context
//! and the elapsed time. The tree decides which behavior runs, and a behavior
//! may span several frames by returning [`Status::Running`]; the next tick
//! resumes exactly where it left off.
//!
//! - **Caller-owned context**: the tree borrows `&mut C` per tick and keeps nothing
//! - **Resumable composites**: a `Running` child is continued, not restarted
//! - **Embedded timers**: cooldown state lives inside its decorator
//! - **Single-threaded**: one tick in flight per tree, plain recursion
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, [`NodeKind`] tags them
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Leaf nodes: [`Action`], [`Condition`]
//! - Decorator nodes: [`Inverter`], [`Succeeder`], [`Failer`], [`Cooldown`], [`Repeater`]
//! - [`BehaviorTree`]: root ownership, `tick` and `reset`
//! - [`Scheduler`]: ticks many agents at a fixed interval

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod scheduler;
pub mod status;
pub mod timer;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Node, NodeKind};
pub use composite::{Selector, Sequence};
pub use config::SchedulerConfig;
pub use decorator::{Cooldown, Failer, Inverter, Repeater, Succeeder};
pub use error::{ConfigError, SchedulerError};
pub use leaf::{Action, Condition};
pub use scheduler::{Agent, AgentId, Scheduler, TickReport};
pub use status::Status;
pub use timer::CooldownTimer;
pub use tree::BehaviorTree;
