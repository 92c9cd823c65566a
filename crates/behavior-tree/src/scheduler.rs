//! Fixed-interval scheduling of many trees.
//!
//! The [`Scheduler`] spreads AI updates over frames: every agent accumulates
//! frame time and its tree is ticked once the accumulated time reaches the
//! configured interval, receiving the whole accumulated time as `dt`.

use std::fmt;

use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use crate::{BehaviorTree, Status};

/// Stable handle to an agent registered with a [`Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tree together with the context it is evaluated against.
pub struct Agent<C> {
    id: AgentId,
    name: String,
    tree: BehaviorTree<C>,
    context: C,
    accumulated: f32,
    last_status: Option<Status>,
}

impl<C> Agent<C> {
    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tree(&self) -> &BehaviorTree<C> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut BehaviorTree<C> {
        &mut self.tree
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Frame time gathered since the agent was last ticked.
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Status returned by the most recent tick, if any.
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Consumes the agent, returning its context.
    pub fn into_context(self) -> C {
        self.context
    }

    fn advance(&mut self, dt: f32, interval: f32) -> Option<Status> {
        self.accumulated += dt;
        if self.accumulated < interval {
            return None;
        }

        let elapsed = std::mem::take(&mut self.accumulated);
        let status = self.tree.tick(&mut self.context, elapsed);
        self.last_status = Some(status);
        tracing::debug!(agent = %self.id, name = %self.name, elapsed, %status, "agent ticked");
        Some(status)
    }

    fn reset(&mut self) {
        self.tree.reset();
        self.accumulated = 0.0;
        self.last_status = None;
    }
}

/// Agents ticked during one [`Scheduler::update`], in registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    ticked: Vec<(AgentId, Status)>,
}

impl TickReport {
    pub fn len(&self) -> usize {
        self.ticked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Status)> + '_ {
        self.ticked.iter().copied()
    }

    /// Status of `id` if it was ticked in this update.
    pub fn status_of(&self, id: AgentId) -> Option<Status> {
        self.iter()
            .find_map(|(agent, status)| (agent == id).then_some(status))
    }
}

/// Ticks a population of agents at a fixed interval.
pub struct Scheduler<C> {
    config: SchedulerConfig,
    agents: Vec<Agent<C>>,
    next_id: u32,
}

impl<C> Scheduler<C> {
    /// Creates an empty scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Config`] if the configuration is invalid.
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        if let Err(error) = config.validate() {
            tracing::warn!(%error, "rejecting scheduler configuration");
            return Err(error.into());
        }

        Ok(Self {
            config,
            agents: Vec::new(),
            next_id: 0,
        })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Registers an agent. It is first ticked once `tick_interval` seconds
    /// of updates have accumulated.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AgentIdsExhausted`] once every id has been
    /// handed out. Ids are never reused, even after removal.
    pub fn add_agent(
        &mut self,
        name: impl Into<String>,
        tree: BehaviorTree<C>,
        context: C,
    ) -> Result<AgentId> {
        let id = AgentId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(SchedulerError::AgentIdsExhausted)?;

        let name = name.into();
        tracing::debug!(agent = %id, %name, "agent registered");
        self.agents.push(Agent {
            id,
            name,
            tree,
            context,
            accumulated: 0.0,
            last_status: None,
        });
        Ok(id)
    }

    /// Unregisters an agent and hands it back.
    pub fn remove_agent(&mut self, id: AgentId) -> Result<Agent<C>> {
        let index = self
            .agents
            .iter()
            .position(|agent| agent.id == id)
            .ok_or(SchedulerError::UnknownAgent(id))?;
        Ok(self.agents.remove(index))
    }

    pub fn agent(&self, id: AgentId) -> Result<&Agent<C>> {
        self.agents
            .iter()
            .find(|agent| agent.id == id)
            .ok_or(SchedulerError::UnknownAgent(id))
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Result<&mut Agent<C>> {
        self.agents
            .iter_mut()
            .find(|agent| agent.id == id)
            .ok_or(SchedulerError::UnknownAgent(id))
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent<C>> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Advances every agent by one frame of `dt` seconds.
    ///
    /// Negative or non-finite `dt` counts as `0.0`.
    pub fn update(&mut self, dt: f32) -> TickReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let interval = self.config.tick_interval;

        let ticked = self
            .agents
            .iter_mut()
            .filter_map(|agent| agent.advance(dt, interval).map(|status| (agent.id, status)))
            .collect();

        TickReport { ticked }
    }

    /// Resets every tree and clears accumulated time.
    pub fn reset_all(&mut self) {
        self.agents.iter_mut().for_each(Agent::reset);
    }
}
