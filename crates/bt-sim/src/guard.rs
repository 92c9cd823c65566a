//! Guard NPC used to exercise every node kind.
//!
//! The guard scans for an intruder, attacks it on a cooldown while it is
//! visible, falls back for a few ticks when badly hurt and otherwise patrols.

use behavior_tree::builder::{
    action, condition, cooldown, failer, inverter, repeater, selector, sequence, succeeder,
};
use behavior_tree::{BehaviorTree, Node, Status};
use serde::Serialize;

/// Seconds between two attacks.
pub const ATTACK_COOLDOWN: f32 = 1.5;
/// Ticks a retreat lasts once started.
pub const RETREAT_STEPS: u32 = 3;
/// Health below which the guard retreats.
pub const LOW_HEALTH: i32 = 30;

const MAX_HEALTH: i32 = 100;
const DAMAGE_PER_SCAN: i32 = 6;
const RETREAT_HEAL: i32 = 12;
// Scans per visibility window; the intruder alternates between seen and unseen.
const SIGHT_WINDOW: u32 = 8;

/// Blackboard for one guard.
#[derive(Clone, Debug)]
pub struct GuardContext {
    pub health: i32,
    pub enemy_visible: bool,
    /// Offsets the visibility windows so guards do not act in lockstep.
    pub phase: u32,
    pub scans: u32,
    pub attacks: u32,
    pub retreat_steps: u32,
    pub patrol_steps: u32,
}

impl GuardContext {
    pub fn new(phase: u32) -> Self {
        Self {
            health: MAX_HEALTH,
            enemy_visible: false,
            phase,
            scans: 0,
            attacks: 0,
            retreat_steps: 0,
            patrol_steps: 0,
        }
    }

    pub fn is_low_health(&self) -> bool {
        self.health < LOW_HEALTH
    }

    fn scan(&mut self) -> Status {
        self.scans += 1;
        self.enemy_visible = ((self.scans + self.phase) / SIGHT_WINDOW) % 2 == 0;
        if self.enemy_visible {
            self.health -= DAMAGE_PER_SCAN;
        }
        Status::Success
    }

    fn attack(&mut self) -> Status {
        self.attacks += 1;
        tracing::debug!(attacks = self.attacks, "guard attacks");
        Status::Success
    }

    fn retreat_step(&mut self) -> Status {
        self.retreat_steps += 1;
        self.health = (self.health + RETREAT_HEAL).min(MAX_HEALTH);
        Status::Success
    }

    fn patrol_step(&mut self) -> Status {
        self.patrol_steps += 1;
        self.health = (self.health + 1).min(MAX_HEALTH);
        Status::Success
    }
}

/// Builds the guard's decision tree.
///
/// ```text
/// Selector
///  ├─ Failer(scan)
///  ├─ Sequence [low health?, Repeater(retreat step, 3)]
///  ├─ Sequence [enemy visible?, Cooldown(attack, 1.5s)]
///  └─ Sequence [Inverter(enemy visible?), Succeeder(patrol step)]
/// ```
pub fn build_tree() -> BehaviorTree<GuardContext> {
    BehaviorTree::with_root(selector(vec![
        failer(action(GuardContext::scan)),
        sequence(vec![
            condition(|ctx: &mut GuardContext| ctx.is_low_health()),
            repeater(action(GuardContext::retreat_step), Some(RETREAT_STEPS)),
        ]),
        sequence(vec![
            enemy_visible(),
            cooldown(action(GuardContext::attack), ATTACK_COOLDOWN),
        ]),
        sequence(vec![
            inverter(enemy_visible()),
            succeeder(action(GuardContext::patrol_step)),
        ]),
    ]))
}

fn enemy_visible() -> Node<GuardContext> {
    condition(|ctx: &mut GuardContext| ctx.enemy_visible)
}

/// End-of-run summary for one guard.
#[derive(Debug, Serialize)]
pub struct GuardReport<'a> {
    pub name: &'a str,
    pub health: i32,
    pub scans: u32,
    pub attacks: u32,
    pub retreat_steps: u32,
    pub patrol_steps: u32,
    pub last_status: Option<Status>,
}
