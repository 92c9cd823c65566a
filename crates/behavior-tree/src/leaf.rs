//! Leaf behavior nodes.
//!
//! Leaves are the only nodes that run caller logic. Both kinds wrap a
//! closure supplied at construction time, so they can capture whatever
//! external state they need.

use crate::{Behavior, NodeKind, Status};

type ActionFn<C> = Box<dyn FnMut(&mut C) -> Status + Send + Sync>;
type PredicateFn<C> = Box<dyn FnMut(&mut C) -> bool + Send + Sync>;

/// Runs a callback and returns its status verbatim.
///
/// Returning `Running` tells the owning composite to resume this action on
/// the next tick instead of restarting from its first child.
pub struct Action<C> {
    run: ActionFn<C>,
}

impl<C> Action<C> {
    /// Creates an action from a callback.
    pub fn new<F>(run: F) -> Self
    where
        F: FnMut(&mut C) -> Status + Send + Sync + 'static,
    {
        Self { run: Box::new(run) }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&mut self, ctx: &mut C, _dt: f32) -> Status {
        (self.run)(ctx)
    }

    fn reset(&mut self) {}

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }
}

/// Evaluates a predicate: `true` is `Success`, `false` is `Failure`.
///
/// A condition never returns `Running`.
pub struct Condition<C> {
    check: PredicateFn<C>,
}

impl<C> Condition<C> {
    /// Creates a condition from a predicate.
    pub fn new<F>(check: F) -> Self
    where
        F: FnMut(&mut C) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&mut self, ctx: &mut C, _dt: f32) -> Status {
        Status::from((self.check)(ctx))
    }

    fn reset(&mut self) {}

    fn kind(&self) -> NodeKind {
        NodeKind::Condition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    #[test]
    fn action_returns_callback_status() {
        let mut action = Action::new(|ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Running
        });

        let mut ctx = TestContext { value: 0 };
        assert_eq!(action.tick(&mut ctx, 0.0), Status::Running);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn condition_maps_bool() {
        let mut is_positive = Condition::new(|ctx: &mut TestContext| ctx.value > 0);

        let mut ctx = TestContext { value: 3 };
        assert_eq!(is_positive.tick(&mut ctx, 0.0), Status::Success);

        ctx.value = -3;
        assert_eq!(is_positive.tick(&mut ctx, 0.0), Status::Failure);
    }

    #[test]
    fn leaf_can_handle_absent_context() {
        let mut action = Action::new(|ctx: &mut Option<TestContext>| match ctx {
            Some(ctx) => {
                ctx.value += 1;
                Status::Success
            }
            None => Status::Failure,
        });

        let mut missing: Option<TestContext> = None;
        assert_eq!(action.tick(&mut missing, 0.0), Status::Failure);

        let mut present = Some(TestContext { value: 0 });
        assert_eq!(action.tick(&mut present, 0.0), Status::Success);
        assert_eq!(present.map(|c| c.value), Some(1));
    }

    #[test]
    fn leaves_report_kind() {
        let action = Action::new(|_: &mut TestContext| Status::Success);
        let condition = Condition::new(|_: &mut TestContext| true);
        assert_eq!(action.kind(), NodeKind::Action);
        assert_eq!(condition.kind(), NodeKind::Condition);
        assert_eq!(condition.child_count(), 0);
    }
}
