//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to read and mutate caller-owned state
//! without the tree ever owning it.

use crate::Status;

/// Exclusively owned handle to a node in a tree.
pub type Node<C> = Box<dyn Behavior<C>>;

/// The kind tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Composite: first success wins.
    Selector,
    /// Composite: first failure wins.
    Sequence,
    /// Leaf: tri-state callback.
    Action,
    /// Leaf: boolean predicate.
    Condition,
    /// Decorator: swaps Success and Failure.
    Inverter,
    /// Decorator: reports any terminal result as Success.
    Succeeder,
    /// Decorator: reports any terminal result as Failure.
    Failer,
    /// Decorator: blocks the child for a while after it succeeds.
    Cooldown,
    /// Decorator: re-runs the child across ticks.
    Repeater,
}

impl NodeKind {
    /// Returns `true` for Selector and Sequence.
    pub fn is_composite(self) -> bool {
        matches!(self, NodeKind::Selector | NodeKind::Sequence)
    }

    /// Returns `true` for Action and Condition.
    pub fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Action | NodeKind::Condition)
    }

    /// Returns `true` for the single-child wrappers.
    pub fn is_decorator(self) -> bool {
        !self.is_composite() && !self.is_leaf()
    }
}

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the caller's context/blackboard. It is
    ///   only borrowed for the duration of the call.
    /// * `dt` - Seconds elapsed since the previous tick of the tree.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior needs another tick to finish
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status;

    /// Clears resumption, timer and repeat state in this node and all of its
    /// descendants. Structure is left untouched.
    fn reset(&mut self);

    /// Clears resumption state so the next tick starts this subtree from its
    /// first child. Unlike [`reset`](Self::reset), cooldown timers keep
    /// running. Stateless leaves need not override this.
    fn restart(&mut self) {}

    /// The kind tag of this node.
    fn kind(&self) -> NodeKind;

    /// Number of children owned by this node.
    fn child_count(&self) -> usize {
        0
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        (**self).tick(ctx, dt)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn restart(&mut self) {
        (**self).restart()
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        (**self).kind()
    }

    #[inline]
    fn child_count(&self) -> usize {
        (**self).child_count()
    }
}
