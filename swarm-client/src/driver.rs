//! Single-task loop that drives a [`Simulation`].
//!
//! Frame ticks, shape transitions, settings updates and shutdown are all
//! branches of one `select!`, so a step never runs while the swarm is being
//! retargeted.

use std::future::Future;
use std::time::Duration;

use swarm_core::Simulation;
use swarm_shared::SettingsUpdate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::render::{Frame, Renderer};
use crate::settings::to_config;

#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Time between simulation ticks
    pub frame_interval: Duration,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_secs(1) / 60,
            max_frames: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub transitions: u64,
    pub updates_applied: u64,
    pub updates_rejected: u64,
}

/// Runs the simulation until `shutdown` resolves or the frame limit is hit.
///
/// The simulation is initialised on entry and shut down on exit.
pub async fn run<R, S>(
    simulation: &mut Simulation,
    renderer: &mut R,
    options: &DriverOptions,
    mut updates: mpsc::Receiver<SettingsUpdate>,
    shutdown: S,
) -> RunSummary
where
    R: Renderer,
    S: Future<Output = ()>,
{
    let mut summary = RunSummary::default();
    simulation.init();

    tokio::pin!(shutdown);
    let mut frames = time::interval(options.frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let shape_timer = time::sleep(simulation.config().shape_duration);
    tokio::pin!(shape_timer);
    let mut updates_open = true;

    log::info!(
        "Running with {} particles, frame interval {:?}",
        simulation.particles().len(),
        options.frame_interval
    );

    loop {
        if options.max_frames.is_some_and(|max| summary.frames >= max) {
            log::info!("Frame limit reached");
            break;
        }
        tokio::select! {
            () = &mut shutdown => {
                log::info!("Shutdown requested");
                break;
            }
            _ = frames.tick() => {
                simulation.tick();
                renderer.render(&Frame {
                    particles: simulation.particles(),
                    shape_index: simulation.current_shape(),
                    tick: simulation.ticks(),
                });
                summary.frames += 1;
            }
            () = &mut shape_timer => {
                if simulation.advance_shape().is_some() {
                    summary.transitions += 1;
                }
                // Duration is re-read so runtime updates apply from the next shape on
                let next = Instant::now() + simulation.config().shape_duration;
                shape_timer.as_mut().reset(next);
            }
            update = updates.recv(), if updates_open => match update {
                Some(update) => {
                    if apply_update(simulation, &update) {
                        summary.updates_applied += 1;
                    } else {
                        summary.updates_rejected += 1;
                    }
                }
                None => {
                    log::debug!("Settings channel closed");
                    updates_open = false;
                }
            },
        }
    }

    simulation.shutdown();
    summary
}

/// Applies a settings update snapped onto the control-panel grid.
///
/// Updates with a value outside its slider range are rejected and the current
/// config is kept.
pub fn apply_update(simulation: &mut Simulation, update: &SettingsUpdate) -> bool {
    if !update.settings.within_panel() {
        log::warn!("Ignoring settings update outside panel ranges: {:?}", update.settings);
        return false;
    }
    let settings = update.settings.snap_to_panel();
    match to_config(&settings).and_then(|config| simulation.set_config(config)) {
        Ok(()) => {
            log::info!("Settings updated: {:?}", settings);
            true
        }
        Err(e) => {
            log::warn!("Ignoring settings update: {}", e);
            false
        }
    }
}

/// Forwards each JSON line of `reader` as a [`SettingsUpdate`] until EOF or
/// until the receiving side is dropped. Malformed lines are logged and skipped.
pub async fn forward_updates<R>(reader: R, sender: mpsc::Sender<SettingsUpdate>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match SettingsUpdate::from_json(line) {
                    Ok(update) => {
                        if sender.send(update).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => log::warn!("Invalid settings update {:?}: {}", line, e),
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::warn!("Failed to read settings updates: {}", e);
                break;
            }
        }
    }
}
