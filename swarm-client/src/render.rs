use std::time::Duration;

use swarm_core::particle::mean_target_distance;
use swarm_core::Particle;
use swarm_shared::SwarmStatus;
use tokio::time::Instant;

/// What a renderer sees after each completed tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub particles: &'a [Particle],
    pub shape_index: Option<usize>,
    pub tick: u64,
}

/// Consumes particle positions once per frame, after the tick completes.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Headless renderer that logs a status line at a fixed interval
pub struct StatusRenderer {
    interval: Duration,
    window_start: Instant,
    frames_in_window: u32,
    last_status: Option<SwarmStatus>,
}

impl StatusRenderer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: Instant::now(),
            frames_in_window: 0,
            last_status: None,
        }
    }

    pub fn last_status(&self) -> Option<&SwarmStatus> {
        self.last_status.as_ref()
    }
}

impl Renderer for StatusRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames_in_window += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed < self.interval {
            return;
        }

        let fps = (self.frames_in_window as f64 / elapsed.as_secs_f64()).round() as u32;
        let status = SwarmStatus {
            particle_count: frame.particles.len(),
            fps,
            shape_index: frame.shape_index,
            mean_target_distance: mean_target_distance(frame.particles),
            ticks: frame.tick,
        };
        match serde_json::to_string(&status) {
            Ok(line) => log::info!("{}", line),
            Err(e) => log::warn!("Failed to encode status: {}", e),
        }

        self.last_status = Some(status);
        self.frames_in_window = 0;
        self.window_start = Instant::now();
    }
}
