use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use swarm_core::{ConfigError, SimulationConfig};
use swarm_shared::SwarmSettings;

/// Command-line overrides applied on top of the settings file
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// How long each shape is held, in milliseconds
    #[arg(long)]
    pub duration_ms: Option<u32>,

    /// Radius inside which particles brake toward their target
    #[arg(long)]
    pub braking_distance: Option<f32>,

    /// Largest steering force per tick
    #[arg(long)]
    pub max_force: Option<f32>,

    /// Largest particle speed per tick
    #[arg(long)]
    pub max_speed: Option<f32>,
}

impl SettingsOverrides {
    pub fn apply(&self, settings: &mut SwarmSettings) {
        if let Some(duration_ms) = self.duration_ms {
            settings.shape_duration_ms = duration_ms;
        }
        if let Some(braking_distance) = self.braking_distance {
            settings.braking_distance = braking_distance;
        }
        if let Some(max_force) = self.max_force {
            settings.max_force = max_force;
        }
        if let Some(max_speed) = self.max_speed {
            settings.max_speed = max_speed;
        }
    }
}

/// Reads settings from a JSON file, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<SwarmSettings> {
    let Some(path) = path else {
        return Ok(SwarmSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Converts panel settings into a validated simulation config.
pub fn to_config(settings: &SwarmSettings) -> Result<SimulationConfig, ConfigError> {
    if !settings.within_panel() {
        log::warn!("Settings outside the control panel range: {:?}", settings);
    }
    SimulationConfig {
        shape_duration: Duration::from_millis(settings.shape_duration_ms as u64),
        braking_distance: settings.braking_distance,
        max_force: settings.max_force,
        max_speed: settings.max_speed,
    }
    .validated()
}
