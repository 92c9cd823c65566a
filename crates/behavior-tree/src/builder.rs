//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::with_children(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.
//!
//! Every builder returns a freshly and exclusively owned [`Node`]; decorator
//! builders take ownership of the child they wrap.

use crate::{
    Action, Condition, Cooldown, Failer, Inverter, Node, Repeater, Selector, Sequence, Status,
    Succeeder,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::with_children(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Box::new(Sequence::with_children(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::with_children(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Box::new(Selector::with_children(children))
}

/// Creates an action leaf from a tri-state callback.
#[inline]
pub fn action<C: 'static, F>(run: F) -> Node<C>
where
    F: FnMut(&mut C) -> Status + Send + Sync + 'static,
{
    Box::new(Action::new(run))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<C: 'static, F>(check: F) -> Node<C>
where
    F: FnMut(&mut C) -> bool + Send + Sync + 'static,
{
    Box::new(Condition::new(check))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Inverter::new(child))
}

/// Creates a succeeder node.
#[inline]
pub fn succeeder<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Succeeder::new(child))
}

/// Creates a failer node.
#[inline]
pub fn failer<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Failer::new(child))
}

/// Creates a cooldown of `seconds` around `child`.
#[inline]
pub fn cooldown<C: 'static>(child: Node<C>, seconds: f32) -> Node<C> {
    Box::new(Cooldown::new(child, seconds))
}

/// Creates a repeater. `None` repeats forever.
#[inline]
pub fn repeater<C: 'static>(child: Node<C>, count: Option<u32>) -> Node<C> {
    Box::new(Repeater::new(child, count))
}

/// Creates a repeater that never finishes.
#[inline]
pub fn repeat_forever<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Repeater::forever(child))
}

/// Creates a repeater from a signed count where any negative value (by
/// convention `-1`) repeats forever.
#[inline]
pub fn repeater_n<C: 'static>(child: Node<C>, count: i32) -> Node<C> {
    repeater(child, u32::try_from(count).ok())
}
