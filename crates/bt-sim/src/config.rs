//! Simulation configuration loaded from the environment.
use std::env;

/// Settings for one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Number of frames to simulate.
    pub frames: u32,
    /// Seconds per frame.
    pub frame_dt: f32,
    /// Number of guard agents.
    pub agents: u32,
    /// Seconds between behavior tree ticks of each agent.
    pub tick_interval: f32,
}

impl SimConfig {
    pub const DEFAULT_FRAMES: u32 = 600;
    pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;
    pub const DEFAULT_AGENTS: u32 = 4;
    pub const DEFAULT_TICK_INTERVAL: f32 = 0.1;

    /// Construct configuration from process environment variables.
    ///
    /// - `BT_SIM_FRAMES`
    /// - `BT_SIM_FRAME_DT`
    /// - `BT_SIM_AGENTS`
    /// - `BT_SIM_TICK_INTERVAL`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(frames) = read_env::<u32>("BT_SIM_FRAMES") {
            config.frames = frames;
        }

        if let Some(frame_dt) = read_env::<f32>("BT_SIM_FRAME_DT") {
            config.frame_dt = frame_dt;
        }

        if let Some(agents) = read_env::<u32>("BT_SIM_AGENTS") {
            config.agents = agents.max(1);
        }

        if let Some(interval) = read_env::<f32>("BT_SIM_TICK_INTERVAL") {
            config.tick_interval = interval;
        }

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: Self::DEFAULT_FRAMES,
            frame_dt: Self::DEFAULT_FRAME_DT,
            agents: Self::DEFAULT_AGENTS,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
