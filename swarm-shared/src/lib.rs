#![cfg_attr(not(feature = "std"), no_std)]

use serde::{Deserialize, Serialize};

/// Range and granularity of one control-panel slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knob {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Knob {
    /// Clamp `value` into range and round it to the nearest step from `min`.
    pub fn snap(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = libm::roundf((clamped - self.min) / self.step);
        (self.min + steps * self.step).min(self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const SHAPE_DURATION_MS: Knob = Knob {
    min: 1000.0,
    max: 5000.0,
    step: 1000.0,
};

pub const BRAKING_DISTANCE: Knob = Knob {
    min: 50.0,
    max: 300.0,
    step: 50.0,
};

pub const MAX_FORCE: Knob = Knob {
    min: 0.5,
    max: 10.0,
    step: 0.5,
};

pub const MAX_SPEED: Knob = Knob {
    min: 5.0,
    max: 50.0,
    step: 5.0,
};

/// Swarm settings as exposed to the control panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwarmSettings {
    pub shape_duration_ms: u32,
    pub braking_distance: f32,
    pub max_force: f32,
    pub max_speed: f32,
}

impl Default for SwarmSettings {
    fn default() -> Self {
        Self {
            shape_duration_ms: 2000,
            braking_distance: 100.0,
            max_force: 5.0,
            max_speed: 20.0,
        }
    }
}

impl SwarmSettings {
    /// The same settings moved onto the control-panel grid.
    pub fn snap_to_panel(&self) -> Self {
        Self {
            shape_duration_ms: SHAPE_DURATION_MS.snap(self.shape_duration_ms as f32) as u32,
            braking_distance: BRAKING_DISTANCE.snap(self.braking_distance),
            max_force: MAX_FORCE.snap(self.max_force),
            max_speed: MAX_SPEED.snap(self.max_speed),
        }
    }

    /// Whether every value lies within its slider range
    pub fn within_panel(&self) -> bool {
        SHAPE_DURATION_MS.contains(self.shape_duration_ms as f32)
            && BRAKING_DISTANCE.contains(self.braking_distance)
            && MAX_FORCE.contains(self.max_force)
            && MAX_SPEED.contains(self.max_speed)
    }
}

/// Settings update message sent from the control surface to the running swarm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsUpdate {
    pub settings: SwarmSettings,
}

#[cfg(feature = "std")]
impl SettingsUpdate {
    /// Parses one JSON message, e.g. `{"settings":{"max_speed":30}}`.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Periodic status of the running swarm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwarmStatus {
    pub particle_count: usize,
    pub fps: u32,
    /// Index of the shape being shown, `None` while idle
    pub shape_index: Option<usize>,
    pub mean_target_distance: f32,
    pub ticks: u64,
}
