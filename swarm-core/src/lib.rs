#![cfg_attr(not(feature = "std"), no_std)]

//! Steering-force particle swarm that reforms into a cycle of shapes.
//!
//! Without the `std` feature the crate keeps the vector math, particles,
//! steering, sequencer and reconciliation into fixed-capacity
//! `heapless::Vec` populations.

pub mod config;
pub mod error;
pub mod particle;
pub mod reconcile;
pub mod sequencer;
#[cfg(feature = "std")]
pub mod shapes;
#[cfg(feature = "std")]
pub mod simulation;
pub mod steering;
pub mod vector;

pub use config::SimulationConfig;
pub use error::{CapacityError, ConfigError};
pub use particle::Particle;
pub use reconcile::{reconcile, Population};
pub use sequencer::{SequencerState, ShapeSequencer};
#[cfg(feature = "std")]
pub use shapes::{build_catalog, Shape, ShapeGenerator};
#[cfg(feature = "std")]
pub use simulation::Simulation;
pub use steering::step;
pub use vector::Vector2D;
