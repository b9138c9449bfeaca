use core::time::Duration;

use crate::ConfigError;

/// Knobs for the steering model and the shape cadence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// How long each shape is held before the swarm moves on
    pub shape_duration: Duration,
    /// Radius around the target inside which desired speed ramps down to zero
    pub braking_distance: f32,
    /// Largest steering force applied in one tick
    pub max_force: f32,
    /// Largest speed a particle may have after a tick
    pub max_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shape_duration: Duration::from_millis(2000),
            braking_distance: 100.0,
            max_force: 5.0,
            max_speed: 20.0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("braking_distance", self.braking_distance)?;
        positive("max_force", self.max_force)?;
        positive("max_speed", self.max_speed)?;
        if self.shape_duration.is_zero() {
            return Err(ConfigError::ZeroShapeDuration);
        }
        Ok(())
    }

    /// Returns the config if every knob is usable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
