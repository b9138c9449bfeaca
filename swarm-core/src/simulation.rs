use core::time::Duration;

use crate::{
    particle, reconcile, steering, ConfigError, Particle, SequencerState, ShapeSequencer,
    SimulationConfig, Vector2D,
};

/// A swarm that reforms into each shape of its catalog in turn.
///
/// Owns the particles, the precomputed shapes, the sequencer and the current
/// config. Every method runs to completion, so a tick always sees either the
/// old or the new set of targets.
#[derive(Debug, Clone)]
pub struct Simulation {
    particles: Vec<Particle>,
    shapes: Vec<Vec<Vector2D>>,
    sequencer: ShapeSequencer,
    config: SimulationConfig,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: SimulationConfig, shapes: Vec<Vec<Vector2D>>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            particles: Vec::new(),
            sequencer: ShapeSequencer::new(shapes.len()),
            shapes,
            config,
            ticks: 0,
        })
    }

    /// Seeds a single particle at the origin and forms the first shape.
    pub fn init(&mut self) {
        self.particles.clear();
        self.particles.push(Particle::seed());
        self.ticks = 0;
        match self.sequencer.start() {
            Some(index) => {
                log::info!(
                    "starting with shape {} of {} ({} points)",
                    index,
                    self.shapes.len(),
                    self.shapes[index].len()
                );
                self.retarget(index);
            }
            None => log::warn!("shape catalog is empty, swarm will stay at the origin"),
        }
    }

    /// One simulation step for every particle.
    pub fn tick(&mut self) {
        steering::step(&mut self.particles, &self.config);
        self.ticks += 1;
    }

    /// Retargets the swarm to the next shape in the cycle.
    ///
    /// Returns the index of the shape now shown, or `None` when the
    /// simulation is idle.
    pub fn advance_shape(&mut self) -> Option<usize> {
        let next = self.sequencer.begin_transition()?;
        self.retarget(next);
        self.sequencer.complete_transition();
        log::info!("shape {} -> {} particles", next, self.particles.len());
        Some(next)
    }

    /// Advances the logical clock by `dt`, moving to the next shape when the
    /// current one has been held for the configured duration.
    ///
    /// This is the entry point for hosts that have no timer of their own and
    /// pass frame deltas in. Hosts with a timer call
    /// [`advance_shape`](Self::advance_shape) when it fires instead.
    pub fn elapse(&mut self, dt: Duration) -> Option<usize> {
        if self.sequencer.elapse(dt, self.config.shape_duration) {
            self.advance_shape()
        } else {
            None
        }
    }

    /// Stops the shape cycle. Particles keep their last state and further
    /// ticks still settle them onto the current targets.
    pub fn shutdown(&mut self) {
        self.sequencer.stop();
        log::info!("simulation stopped after {} ticks", self.ticks);
    }

    /// Replaces the config; an invalid one is rejected and the old one kept.
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn current_shape(&self) -> Option<usize> {
        self.sequencer.current()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn mean_target_distance(&self) -> f32 {
        particle::mean_target_distance(&self.particles)
    }

    fn retarget(&mut self, index: usize) {
        // A growable population cannot overflow
        if let Err(err) = reconcile::reconcile(&mut self.particles, &self.shapes[index]) {
            log::error!("reconciling shape {}: {}", index, err);
        }
    }
}
