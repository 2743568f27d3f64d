//! Headless runner for the Whiskers pet simulation.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use clap::Parser;
use log::{info, warn};
use whiskers::{init_logging, PetCommand, PetNotification, PetPlugin, SimConfig, HEADLESS_FRAME_MS};

/// A virtual pet that wanders its scene and needs feeding
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON scene configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run this many 16 ms frames on a virtual clock, then exit
    #[arg(short, long)]
    frames: Option<u64>,

    /// Ring the bell at X Z once the pet has spawned
    #[arg(long, num_args = 2, value_names = ["X", "Z"], allow_negative_numbers = true)]
    bell: Option<Vec<f32>>,

    /// Log every pet event as JSON
    #[arg(long)]
    json_events: bool,
}

fn log_event_json(event: On<PetNotification>) {
    match serde_json::to_string(&event.event().0) {
        Ok(json) => info!(target: "whiskers::events", "{json}"),
        Err(e) => warn!("failed to encode pet event: {e}"),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig> {
    path.map_or_else(
        || Ok(SimConfig::default()),
        |p| {
            SimConfig::from_path(p)
                .with_context(|| format!("loading scene configuration from {}", p.display()))
        },
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    info!("starting {} with seed {}", config.display_name(), config.seed);

    let mut app = App::new();
    if args.frames.is_none() {
        app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_millis(HEADLESS_FRAME_MS),
        )));
    }
    app.add_plugins(PetPlugin::new(config));
    if args.json_events {
        app.add_observer(log_event_json);
    }
    if let Some([x, z]) = args.bell.as_deref().and_then(|v| <[f32; 2]>::try_from(v).ok()) {
        app.add_systems(PostStartup, move |mut commands: Commands| {
            commands.trigger(PetCommand::RingBell { x, z });
        });
    }

    match args.frames {
        Some(frames) => {
            let frame = Duration::from_millis(HEADLESS_FRAME_MS);
            for _ in 0..frames {
                app.world_mut().resource_mut::<Time>().advance_by(frame);
                app.update();
            }
            info!("finished {frames} frames");
        }
        None => {
            if let AppExit::Error(code) = app.run() {
                anyhow::bail!("app exited with code {code}");
            }
        }
    }
    Ok(())
}
