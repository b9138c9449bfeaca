use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use swarm_client::settings::{load_settings, to_config, SettingsOverrides};
use swarm_client::{driver, DriverOptions, StatusRenderer};
use swarm_core::{Shape, Simulation};
use tokio::io::BufReader;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Particle swarm that reforms into a cycle of shapes", long_about = None)]
struct Args {
    /// JSON settings file (missing fields use the defaults)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    #[command(flatten)]
    overrides: SettingsOverrides,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Stop after this many frames instead of running until Ctrl-C
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    frames: Option<u64>,

    /// Read settings updates as JSON lines from stdin
    #[arg(long)]
    listen_stdin: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!("Shape swarm starting...");

    let mut settings = load_settings(args.settings.as_deref())?;
    args.overrides.apply(&mut settings);
    let config = to_config(&settings).context("Invalid settings")?;
    log::info!("Settings: {:?}", settings);

    let shapes = Shape::catalog();
    for (shape, points) in Shape::ALL.iter().zip(&shapes) {
        log::debug!("Shape {}: {} points", shape.name(), points.len());
    }
    let mut simulation = Simulation::new(config, shapes).context("Failed to create simulation")?;

    let (sender, receiver) = mpsc::channel(8);
    if args.listen_stdin {
        log::info!("Listening for settings updates on stdin");
        tokio::spawn(driver::forward_updates(
            BufReader::new(tokio::io::stdin()),
            sender,
        ));
    } else {
        drop(sender);
    }

    let options = DriverOptions {
        frame_interval: Duration::from_secs(1) / args.fps,
        max_frames: args.frames,
    };
    let mut renderer = StatusRenderer::new(Duration::from_secs(1));
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let summary = driver::run(&mut simulation, &mut renderer, &options, receiver, shutdown).await;
    log::info!(
        "Finished: {} frames, {} shape transitions, {} settings updates ({} rejected)",
        summary.frames,
        summary.transitions,
        summary.updates_applied,
        summary.updates_rejected
    );

    Ok(())
}
