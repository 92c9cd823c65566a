//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Inverter`] (NOT logic), [`Succeeder`] and [`Failer`]
//! (result forcing), [`Cooldown`] (time gating) and [`Repeater`] (re-running a
//! child across ticks).
//!
//! `Running` passes through every decorator unchanged.

use crate::timer::CooldownTimer;
use crate::{Behavior, Node, NodeKind, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` is passed through
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Node<C>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        self.child.tick(ctx, dt).invert()
    }

    fn reset(&mut self) {
        self.child.reset();
    }

    fn restart(&mut self) {
        self.child.restart();
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Inverter
    }

    fn child_count(&self) -> usize {
        1
    }
}

/// Reports any terminal result of its child as `Success`.
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
pub struct Succeeder<C> {
    child: Node<C>,
}

impl<C> Succeeder<C> {
    /// Creates a new succeeder around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Succeeder<C> {
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        match self.child.tick(ctx, dt) {
            Status::Running => Status::Running,
            _ => Status::Success,
        }
    }

    fn reset(&mut self) {
        self.child.reset();
    }

    fn restart(&mut self) {
        self.child.restart();
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Succeeder
    }

    fn child_count(&self) -> usize {
        1
    }
}

/// Reports any terminal result of its child as `Failure`.
///
/// Placed first under a selector, a failer runs side effects (sensing,
/// bookkeeping) and then lets the selector fall through to its next child.
pub struct Failer<C> {
    child: Node<C>,
}

impl<C> Failer<C> {
    /// Creates a new failer around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Failer<C> {
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        match self.child.tick(ctx, dt) {
            Status::Running => Status::Running,
            _ => Status::Failure,
        }
    }

    fn reset(&mut self) {
        self.child.reset();
    }

    fn restart(&mut self) {
        self.child.restart();
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Failer
    }

    fn child_count(&self) -> usize {
        1
    }
}

/// Blocks its child for `threshold` seconds after the child succeeds.
///
/// # Semantics
///
/// - While cooling, `dt` accumulates and the decorator returns `Failure`
///   without ticking the child.
/// - The call that pushes the accumulated time to the threshold ends the
///   cooldown **and** ticks the child in that same call.
/// - When not cooling, the child's status is returned unchanged; a
///   `Success` starts a new cooling period. `Running` and `Failure` leave
///   the timer alone.
pub struct Cooldown<C> {
    child: Node<C>,
    timer: CooldownTimer,
}

impl<C> Cooldown<C> {
    /// Creates a cooldown of `seconds` around the given child behavior.
    pub fn new(child: Node<C>, seconds: f32) -> Self {
        Self {
            child,
            timer: CooldownTimer::new(seconds),
        }
    }

    /// Current timer state.
    pub fn timer(&self) -> &CooldownTimer {
        &self.timer
    }
}

impl<C> Behavior<C> for Cooldown<C> {
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        let was_cooling = self.timer.is_cooling();
        if self.timer.advance(dt) {
            return Status::Failure;
        }
        if was_cooling {
            tracing::debug!(threshold = self.timer.threshold(), "cooldown expired");
        }

        let status = self.child.tick(ctx, dt);
        if status.is_success() {
            self.timer.start();
            tracing::debug!(threshold = self.timer.threshold(), "cooldown started");
        }
        status
    }

    fn reset(&mut self) {
        self.timer.clear();
        self.child.reset();
    }

    /// The timer is left running.
    fn restart(&mut self) {
        self.child.restart();
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Cooldown
    }

    fn child_count(&self) -> usize {
        1
    }
}

/// Re-runs its child across ticks.
///
/// # Semantics
///
/// Each tick runs the child once:
/// - `Running` is passed through and does not count as a repetition
/// - A terminal result counts one repetition. If repetitions remain (or the
///   repeater is unlimited) the child is restarted from its first node and
///   the repeater returns `Running`, so the tree ticks it again next frame.
///   Cooldowns inside the child keep their timers across restarts
/// - The terminal result of the final repetition is returned, and the
///   repeater re-arms for the next cycle
///
/// A count of `0` behaves like `1`.
pub struct Repeater<C> {
    child: Node<C>,
    count: Option<u32>,
    remaining: u32,
}

impl<C> Repeater<C> {
    /// Creates a repeater. `None` repeats forever.
    pub fn new(child: Node<C>, count: Option<u32>) -> Self {
        Self {
            child,
            count,
            remaining: Self::armed(count),
        }
    }

    /// Repeats the child without limit.
    pub fn forever(child: Node<C>) -> Self {
        Self::new(child, None)
    }

    /// Repeats the child `count` times.
    pub fn times(child: Node<C>, count: u32) -> Self {
        Self::new(child, Some(count))
    }

    /// Configured repetition count; `None` is unlimited.
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// Repetitions left in the current cycle; `None` is unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.count.map(|_| self.remaining)
    }

    fn armed(count: Option<u32>) -> u32 {
        count.map_or(0, |count| count.max(1))
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Status {
        let status = self.child.tick(ctx, dt);
        if status.is_running() {
            return Status::Running;
        }

        if self.count.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                tracing::debug!(?status, count = ?self.count, "repeater finished");
                self.remaining = Self::armed(self.count);
                return status;
            }
        }

        tracing::debug!(?status, remaining = ?self.remaining(), "repeater restarting child");
        self.child.restart();
        Status::Running
    }

    fn reset(&mut self) {
        self.remaining = Self::armed(self.count);
        self.child.reset();
    }

    fn restart(&mut self) {
        self.remaining = Self::armed(self.count);
        self.child.restart();
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Repeater
    }

    fn child_count(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Sequence};

    struct TestContext {
        value: i32,
    }

    struct IsPositive;
    impl Behavior<TestContext> for IsPositive {
        fn tick(&mut self, ctx: &mut TestContext, _dt: f32) -> Status {
            Status::from(ctx.value > 0)
        }
        fn reset(&mut self) {}
        fn kind(&self) -> NodeKind {
            NodeKind::Condition
        }
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext, _dt: f32) -> Status {
            ctx.value += 1;
            Status::Success
        }
        fn reset(&mut self) {}
        fn kind(&self) -> NodeKind {
            NodeKind::Action
        }
    }

    struct FailAndIncrement;
    impl Behavior<TestContext> for FailAndIncrement {
        fn tick(&mut self, ctx: &mut TestContext, _dt: f32) -> Status {
            ctx.value += 1;
            Status::Failure
        }
        fn reset(&mut self) {}
        fn kind(&self) -> NodeKind {
            NodeKind::Action
        }
    }

    struct AlwaysRunning;
    impl Behavior<TestContext> for AlwaysRunning {
        fn tick(&mut self, _ctx: &mut TestContext, _dt: f32) -> Status {
            Status::Running
        }
        fn reset(&mut self) {}
        fn kind(&self) -> NodeKind {
            NodeKind::Action
        }
    }

    #[test]
    fn inverter_inverts_success() {
        let mut inverter = Inverter::new(Box::new(IsPositive));

        let mut ctx = TestContext { value: 10 };
        assert_eq!(inverter.tick(&mut ctx, 0.0), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let mut inverter = Inverter::new(Box::new(IsPositive));

        let mut ctx = TestContext { value: -10 };
        assert_eq!(inverter.tick(&mut ctx, 0.0), Status::Success);
    }

    #[test]
    fn inverter_passes_running() {
        let mut inverter = Inverter::new(Box::new(AlwaysRunning));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(inverter.tick(&mut ctx, 0.0), Status::Running);
    }

    #[test]
    fn succeeder_on_failure() {
        let mut succeeder = Succeeder::new(Box::new(FailAndIncrement));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(succeeder.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, 1); // Child still executed
    }

    #[test]
    fn succeeder_and_failer_pass_running() {
        let mut ctx = TestContext { value: 0 };
        assert_eq!(
            Succeeder::new(Box::new(AlwaysRunning)).tick(&mut ctx, 0.0),
            Status::Running
        );
        assert_eq!(
            Failer::new(Box::new(AlwaysRunning)).tick(&mut ctx, 0.0),
            Status::Running
        );
    }

    #[test]
    fn failer_on_success() {
        let mut failer = Failer::new(Box::new(Increment));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(failer.tick(&mut ctx, 0.0), Status::Failure);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn cooldown_blocks_child_until_threshold() {
        let mut cooldown = Cooldown::new(Box::new(Increment), 0.5);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(cooldown.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, 1);
        assert!(cooldown.timer().is_cooling());

        assert_eq!(cooldown.tick(&mut ctx, 0.2), Status::Failure);
        assert_eq!(ctx.value, 1); // Child not ticked while cooling

        assert_eq!(cooldown.tick(&mut ctx, 0.3), Status::Success);
        assert_eq!(ctx.value, 2); // Expired and ran in the same call
    }

    #[test]
    fn cooldown_ignores_failure_and_running() {
        let mut failing = Cooldown::new(Box::new(FailAndIncrement), 1.0);
        let mut running = Cooldown::new(Box::new(AlwaysRunning), 1.0);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(failing.tick(&mut ctx, 0.0), Status::Failure);
        assert_eq!(failing.tick(&mut ctx, 0.0), Status::Failure);
        assert_eq!(ctx.value, 2);
        assert!(!failing.timer().is_cooling());

        assert_eq!(running.tick(&mut ctx, 0.0), Status::Running);
        assert!(!running.timer().is_cooling());
    }

    #[test]
    fn cooldown_reset_clears_timer() {
        let mut cooldown = Cooldown::new(Box::new(Increment), 10.0);

        let mut ctx = TestContext { value: 0 };
        cooldown.tick(&mut ctx, 0.0);
        cooldown.tick(&mut ctx, 1.0);
        assert!(cooldown.timer().elapsed() > 0.0);

        cooldown.reset();
        assert!(!cooldown.timer().is_cooling());
        assert_eq!(cooldown.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn cooldown_restart_keeps_timer() {
        let mut cooldown = Cooldown::new(Box::new(Increment), 10.0);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(cooldown.tick(&mut ctx, 0.0), Status::Success);

        cooldown.restart();
        assert!(cooldown.timer().is_cooling());
        assert_eq!(cooldown.tick(&mut ctx, 0.0), Status::Failure);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn repeater_forever_respects_nested_cooldown() {
        let cooldown = Cooldown::new(Box::new(Increment), 10.0);
        let mut repeater: Repeater<TestContext> = Repeater::forever(Box::new(cooldown));

        let mut ctx = TestContext { value: 0 };
        for _ in 0..5 {
            assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running);
        }
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn repeater_counts_blocked_cooldown_as_repetition() {
        let cooldown = Cooldown::new(Box::new(Increment), 10.0);
        let mut repeater: Repeater<TestContext> = Repeater::times(Box::new(cooldown), 3);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running); // ran, cooling
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running); // blocked
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Failure); // blocked, last
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn repeater_lets_nested_cooldown_expire() {
        let cooldown = Cooldown::new(Box::new(Increment), 0.5);
        let mut repeater: Repeater<TestContext> = Repeater::forever(Box::new(cooldown));

        let mut ctx = TestContext { value: 0 };
        for _ in 0..6 {
            assert_eq!(repeater.tick(&mut ctx, 0.25), Status::Running);
        }
        assert_eq!(ctx.value, 3); // Ticks 1, 3 and 5
    }

    #[test]
    fn repeater_restart_rearms_nested_repeater() {
        let inner = Repeater::times(Box::new(Increment), 2);
        let seq = Sequence::new()
            .with_child(Box::new(inner))
            .with_child(Box::new(AlwaysRunning));
        let mut outer: Repeater<TestContext> = Repeater::forever(Box::new(seq));

        let mut ctx = TestContext { value: 0 };
        outer.tick(&mut ctx, 0.0); // inner 1 of 2
        outer.restart();
        assert_eq!(outer.tick(&mut ctx, 0.0), Status::Running); // inner 1 of 2 again
        assert_eq!(outer.tick(&mut ctx, 0.0), Status::Running); // inner done, AlwaysRunning
        assert_eq!(ctx.value, 3);
    }

    #[test]
    fn repeater_runs_child_count_times_across_ticks() {
        let mut repeater = Repeater::times(Box::new(Increment), 3);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running);
        assert_eq!(repeater.remaining(), Some(2));
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running);
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, 3);

        // Re-armed for the next cycle.
        assert_eq!(repeater.remaining(), Some(3));
    }

    #[test]
    fn repeater_returns_final_failure() {
        let mut repeater = Repeater::times(Box::new(FailAndIncrement), 2);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running);
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Failure);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn repeater_does_not_count_running() {
        let mut repeater = Repeater::times(Box::new(AlwaysRunning), 1);

        let mut ctx = TestContext { value: 0 };
        for _ in 0..5 {
            assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running);
        }
        assert_eq!(repeater.remaining(), Some(1));
    }

    #[test]
    fn repeater_forever_never_finishes() {
        let mut repeater = Repeater::forever(Box::new(Increment));

        let mut ctx = TestContext { value: 0 };
        for _ in 0..10 {
            assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running);
        }
        assert_eq!(ctx.value, 10);
        assert_eq!(repeater.remaining(), None);
    }

    #[test]
    fn repeater_zero_count_runs_once() {
        let mut repeater = Repeater::times(Box::new(Increment), 0);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn repeater_restarts_child_from_scratch() {
        // Each repetition starts the sequence over at Increment.
        let mut calls = 0;
        let flaky = Action::new(move |_: &mut TestContext| {
            calls += 1;
            if calls % 2 == 1 {
                Status::Running
            } else {
                Status::Success
            }
        });
        let seq = Sequence::new()
            .with_child(Box::new(Increment))
            .with_child(Box::new(flaky));
        let mut repeater = Repeater::times(Box::new(seq), 2);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running); // inc, flaky running
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running); // flaky ok, 1 of 2
        assert_eq!(ctx.value, 1);
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Running); // inc again, flaky running
        assert_eq!(ctx.value, 2);
        assert_eq!(repeater.tick(&mut ctx, 0.0), Status::Success);
    }
}
