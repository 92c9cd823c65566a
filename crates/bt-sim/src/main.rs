//! Headless behavior tree simulation.
//!
//! Drives a squad of guard NPCs through the fixed-interval scheduler and
//! prints what each of them did.
//! Run with: `cargo run -p bt-sim -- --frames 1200 --agents 8`

mod config;
mod guard;

use anyhow::Result;
use behavior_tree::{Scheduler, SchedulerConfig};
use clap::Parser;
use config::SimConfig;
use guard::{GuardContext, GuardReport};

/// Headless behavior tree simulation
#[derive(Parser)]
#[command(name = "bt-sim")]
#[command(about = "Run guard behavior trees without a renderer", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of frames to simulate [env: BT_SIM_FRAMES]
    #[arg(long)]
    frames: Option<u32>,

    /// Seconds per frame [env: BT_SIM_FRAME_DT]
    #[arg(long)]
    frame_dt: Option<f32>,

    /// Number of guards [env: BT_SIM_AGENTS]
    #[arg(long)]
    agents: Option<u32>,

    /// Seconds between tree ticks of each guard [env: BT_SIM_TICK_INTERVAL]
    #[arg(long)]
    tick_interval: Option<f32>,

    /// Print one JSON object per guard instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Command-line values take precedence over the environment.
    fn apply(&self, mut config: SimConfig) -> SimConfig {
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(frame_dt) = self.frame_dt {
            config.frame_dt = frame_dt;
        }
        if let Some(agents) = self.agents {
            config.agents = agents.max(1);
        }
        if let Some(interval) = self.tick_interval {
            config.tick_interval = interval;
        }
        config
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (for BT_SIM_* and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(SimConfig::from_env());

    run(&config, cli.json)
}

fn run(config: &SimConfig, json: bool) -> Result<()> {
    let scheduler = simulate(config)?;

    for agent in scheduler.agents() {
        let guard = agent.context();
        let report = GuardReport {
            name: agent.name(),
            health: guard.health,
            scans: guard.scans,
            attacks: guard.attacks,
            retreat_steps: guard.retreat_steps,
            patrol_steps: guard.patrol_steps,
            last_status: agent.last_status(),
        };

        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "{:<10} hp={:>3} scans={:>4} attacks={:>3} retreat={:>3} patrol={:>4}",
                report.name,
                report.health,
                report.scans,
                report.attacks,
                report.retreat_steps,
                report.patrol_steps,
            );
        }
    }

    Ok(())
}

fn simulate(config: &SimConfig) -> Result<Scheduler<GuardContext>> {
    let mut scheduler = Scheduler::new(SchedulerConfig::with_tick_interval(config.tick_interval))?;

    for index in 0..config.agents {
        scheduler.add_agent(
            format!("guard-{index}"),
            guard::build_tree(),
            GuardContext::new(index * 3),
        )?;
    }

    tracing::info!(
        agents = config.agents,
        frames = config.frames,
        frame_dt = config.frame_dt,
        tick_interval = config.tick_interval,
        "simulation started"
    );

    let mut tree_ticks = 0usize;
    for _ in 0..config.frames {
        tree_ticks += scheduler.update(config.frame_dt).len();
    }

    tracing::info!(tree_ticks, "simulation finished");
    Ok(scheduler)
}
