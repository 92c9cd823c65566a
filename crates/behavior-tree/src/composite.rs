//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both remember which child returned `Running` so the next tick continues
//! exactly there: earlier siblings are not re-run and later ones are not
//! skipped.

use crate::{Behavior, Node, NodeKind, Status};

/// Shared iteration for both composites.
///
/// Children returning `keep_going` advance the loop; any other terminal
/// status short-circuits. Running out of children yields `keep_going`.
fn tick_children<C>(
    children: &mut [Node<C>],
    resume: &mut Option<usize>,
    ctx: &mut C,
    dt: f32,
    keep_going: Status,
) -> Status {
    let start = resume.take().unwrap_or(0);

    for (index, child) in children.iter_mut().enumerate().skip(start) {
        match child.tick(ctx, dt) {
            Status::Running => {
                *resume = Some(index);
                return Status::Running;
            }
            status if status == keep_going => continue,
            status => return status, // Short-circuit
        }
    }

    keep_going
}

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   at that child on the next tick
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
/// An empty sequence succeeds.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
    resume: Option<usize>,
}

impl<C> Sequence<C> {
    /// Creates an empty sequence. Append children with [`push`](Self::push)
    /// or [`with_child`](Self::with_child).
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            resume: None,
        }
    }

    /// Creates a sequence with the given child behaviors.
    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            resume: None,
        }
    }

    /// Appends a child. Any pending resumption point is discarded.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
        self.resume = None;
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_child(mut self, child: Node<C>) -> Self {
        self.push(child);
        self
    }

    /// Index of the child that returned `Running` on the previous tick.
    pub fn resume_index(&self) -> Option<usize> {
        self.resume
    }
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        let status = tick_children(
            &mut self.children,
            &mut self.resume,
            ctx,
            dt,
            Status::Success,
        );
        tracing::trace!(?status, resume = ?self.resume, "sequence ticked");
        status
    }

    fn reset(&mut self) {
        self.resume = None;
        self.children.iter_mut().for_each(|child| child.reset());
    }

    fn restart(&mut self) {
        self.resume = None;
        self.children.iter_mut().for_each(|child| child.restart());
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If a child returns `Running`, the selector returns `Running` and resumes
///   at that child on the next tick
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
/// An empty selector fails.
pub struct Selector<C> {
    children: Vec<Node<C>>,
    resume: Option<usize>,
}

impl<C> Selector<C> {
    /// Creates an empty selector. Append children with [`push`](Self::push)
    /// or [`with_child`](Self::with_child).
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            resume: None,
        }
    }

    /// Creates a selector with the given child behaviors.
    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            resume: None,
        }
    }

    /// Appends a child. Any pending resumption point is discarded.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
        self.resume = None;
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_child(mut self, child: Node<C>) -> Self {
        self.push(child);
        self
    }

    /// Index of the child that returned `Running` on the previous tick.
    pub fn resume_index(&self) -> Option<usize> {
        self.resume
    }
}

impl<C> Default for Selector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        let status = tick_children(
            &mut self.children,
            &mut self.resume,
            ctx,
            dt,
            Status::Failure,
        );
        tracing::trace!(?status, resume = ?self.resume, "selector ticked");
        status
    }

    fn reset(&mut self) {
        self.resume = None;
        self.children.iter_mut().for_each(|child| child.reset());
    }

    fn restart(&mut self) {
        self.resume = None;
        self.children.iter_mut().for_each(|child| child.restart());
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Selector
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }
}
