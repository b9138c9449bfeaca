//! Maps a shape's point list onto an existing particle population.
//!
//! Particle `i` is paired with point `i`. The population is truncated from
//! the end when the shape has fewer points, and padded with copies of its
//! last particle when the shape has more, so new particles enter from where
//! the swarm already is.

use crate::{CapacityError, Particle, Vector2D};

/// Storage that can hold a swarm's particles in order.
pub trait Population {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most particles the storage can hold, `None` when it grows on demand.
    fn capacity_limit(&self) -> Option<usize>;

    fn last(&self) -> Option<&Particle>;

    fn truncate(&mut self, len: usize);

    fn push(&mut self, particle: Particle) -> Result<(), Particle>;

    fn particles_mut(&mut self) -> &mut [Particle];
}

#[cfg(feature = "std")]
impl Population for Vec<Particle> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity_limit(&self) -> Option<usize> {
        None
    }

    fn last(&self) -> Option<&Particle> {
        self.as_slice().last()
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn push(&mut self, particle: Particle) -> Result<(), Particle> {
        Vec::push(self, particle);
        Ok(())
    }

    fn particles_mut(&mut self) -> &mut [Particle] {
        self.as_mut_slice()
    }
}

impl<const N: usize> Population for heapless::Vec<Particle, N> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn capacity_limit(&self) -> Option<usize> {
        Some(N)
    }

    fn last(&self) -> Option<&Particle> {
        self.as_slice().last()
    }

    fn truncate(&mut self, len: usize) {
        heapless::Vec::truncate(self, len);
    }

    fn push(&mut self, particle: Particle) -> Result<(), Particle> {
        heapless::Vec::push(self, particle)
    }

    fn particles_mut(&mut self) -> &mut [Particle] {
        self.as_mut_slice()
    }
}

/// Resizes `population` to `points.len()` and points particle `i` at `points[i]`.
///
/// Surviving particles keep their position and velocity. A fixed-capacity
/// population that cannot fit `points` is left untouched.
pub fn reconcile<P>(population: &mut P, points: &[Vector2D]) -> Result<(), CapacityError>
where
    P: Population + ?Sized,
{
    let requested = points.len();
    if let Some(capacity) = population.capacity_limit() {
        if requested > capacity {
            return Err(CapacityError {
                requested,
                capacity,
            });
        }
    }

    let previous = population.len();
    if requested < previous {
        population.truncate(requested);
    } else if requested > previous {
        let template = population.last().cloned().unwrap_or_else(Particle::seed);
        for _ in previous..requested {
            // Placeholder target, overwritten below
            population
                .push(template.clone_with_target(template.target))
                .map_err(|_| CapacityError {
                    requested,
                    capacity: previous,
                })?;
        }
    }

    for (particle, point) in population.particles_mut().iter_mut().zip(points) {
        particle.target = *point;
    }

    log::debug!("reconciled population {} -> {}", previous, requested);
    Ok(())
}
