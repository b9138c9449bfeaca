//! Error types for the swarm core.
//!
//! Stepping and reconciliation are total; these errors only come from
//! rejecting a configuration or overflowing a fixed-capacity population.

use core::fmt;

/// A configuration value the steering model cannot run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A steering knob was zero, negative, or not finite.
    NonPositive { field: &'static str, value: f32 },
    /// The shape duration was zero.
    ZeroShapeDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be a positive finite number, got {}", field, value)
            }
            ConfigError::ZeroShapeDuration => write!(f, "shape duration must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// A fixed-capacity population cannot hold the requested number of particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub requested: usize,
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shape needs {} particles but the population holds at most {}",
            self.requested, self.capacity
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}
