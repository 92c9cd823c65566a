//! The tree: root ownership and the per-frame entry point.

use crate::{Behavior, Node, Status};

/// Owns a root node and drives it once per frame.
///
/// # Lifecycle
///
/// Assemble the node structure with the [`builder`](crate::builder)
/// functions, hand the root to the tree, then call [`tick`](Self::tick)
/// every frame. The context is borrowed only for the duration of a tick.
/// An empty tree ticks to `Failure`.
pub struct BehaviorTree<C> {
    root: Option<Node<C>>,
    ticks: u64,
}

impl<C> BehaviorTree<C> {
    /// Creates a tree without a root.
    pub fn new() -> Self {
        Self {
            root: None,
            ticks: 0,
        }
    }

    /// Creates a tree with the given root.
    pub fn with_root(root: Node<C>) -> Self {
        Self {
            root: Some(root),
            ticks: 0,
        }
    }

    /// Replaces the root. The previous root and all of its state are dropped.
    pub fn set_root(&mut self, root: Node<C>) {
        self.root = Some(root);
        self.ticks = 0;
    }

    pub fn root(&self) -> Option<&dyn Behavior<C>> {
        self.root.as_deref()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// Number of ticks since construction or the last [`reset`](Self::reset).
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Evaluates the tree once.
    ///
    /// Negative or non-finite `dt` is treated as `0.0`.
    pub fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        let dt = sanitize_dt(dt);
        self.ticks += 1;

        let status = match self.root.as_mut() {
            Some(root) => root.tick(ctx, dt),
            None => Status::Failure,
        };
        tracing::trace!(tick = self.ticks, dt, %status, "tree ticked");
        status
    }

    /// Clears every resumption point, cooldown timer and repeat counter.
    ///
    /// The next tick behaves as if the tree had just been built. A leaf
    /// that was mid-flight receives no notification.
    pub fn reset(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.reset();
        }
        self.ticks = 0;
    }
}

impl<C> Default for BehaviorTree<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> From<Node<C>> for BehaviorTree<C> {
    fn from(root: Node<C>) -> Self {
        Self::with_root(root)
    }
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        tracing::warn!(dt, "invalid delta time, using 0.0");
        0.0
    }
}
