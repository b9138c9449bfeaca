use crate::Vector2D;

/// A single point of the swarm
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector2D,
    pub target: Vector2D,
    pub velocity: Vector2D,
}

impl Particle {
    /// A particle at rest at `position`, heading for `target`
    pub fn new(position: Vector2D, target: Vector2D) -> Self {
        Self {
            position,
            target,
            velocity: Vector2D::zero(),
        }
    }

    /// The particle every swarm starts from: at rest on the origin, aimed at the origin.
    pub fn seed() -> Self {
        Self::new(Vector2D::zero(), Vector2D::zero())
    }

    pub fn apply_force(&mut self, force: Vector2D) {
        self.velocity += force;
    }

    /// One explicit Euler step with a unit time step.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// A copy that starts where this particle is, moving as it moves, but aimed at `target`.
    pub fn clone_with_target(&self, target: Vector2D) -> Self {
        Self {
            position: self.position,
            target,
            velocity: self.velocity,
        }
    }
}

/// Mean distance between each particle and its target, zero for an empty slice.
pub fn mean_target_distance(particles: &[Particle]) -> f32 {
    if particles.is_empty() {
        return 0.0;
    }
    let total: f32 = particles
        .iter()
        .map(|particle| particle.position.distance(&particle.target))
        .sum();
    total / particles.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_creation() {
        let particle = Particle::new(Vector2D::new(10.0, 20.0), Vector2D::new(1.0, 2.0));

        assert_eq!(particle.position, Vector2D::new(10.0, 20.0));
        assert_eq!(particle.target, Vector2D::new(1.0, 2.0));
        assert_eq!(particle.velocity, Vector2D::zero());
    }

    #[test]
    fn test_apply_force_only_touches_velocity() {
        let mut particle = Particle::new(Vector2D::new(5.0, 5.0), Vector2D::zero());

        particle.apply_force(Vector2D::new(1.0, -2.0));
        particle.apply_force(Vector2D::new(0.5, 0.5));

        assert_eq!(particle.velocity, Vector2D::new(1.5, -1.5));
        assert_eq!(particle.position, Vector2D::new(5.0, 5.0));
    }

    #[test]
    fn test_integrate() {
        let mut particle = Particle::seed();
        particle.velocity = Vector2D::new(1.0, 1.0);

        particle.integrate();
        particle.integrate();

        assert_eq!(particle.position, Vector2D::new(2.0, 2.0));
    }

    #[test]
    fn test_clone_with_target_keeps_motion() {
        let mut source = Particle::new(Vector2D::new(3.0, 4.0), Vector2D::new(9.0, 9.0));
        source.velocity = Vector2D::new(-1.0, 0.5);

        let clone = source.clone_with_target(Vector2D::new(-7.0, 0.0));

        assert_eq!(clone.position, source.position);
        assert_eq!(clone.velocity, source.velocity);
        assert_eq!(clone.target, Vector2D::new(-7.0, 0.0));
        assert_eq!(source.target, Vector2D::new(9.0, 9.0));
    }

    #[test]
    fn test_mean_target_distance() {
        let particles = [
            Particle::new(Vector2D::zero(), Vector2D::new(3.0, 4.0)),
            Particle::new(Vector2D::new(1.0, 1.0), Vector2D::new(1.0, 2.0)),
        ];
        assert_eq!(mean_target_distance(&particles), 3.0);
        assert_eq!(mean_target_distance(&[]), 0.0);
    }
}
