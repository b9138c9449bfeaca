use crate::{Particle, SimulationConfig, Vector2D};

/// Speed a particle wants at `distance` from its target.
///
/// Ramps linearly from zero at the target up to `max_speed` at the braking
/// distance, and stays at `max_speed` beyond it.
pub fn desired_speed(distance: f32, config: &SimulationConfig) -> f32 {
    if distance < config.braking_distance {
        distance / config.braking_distance * config.max_speed
    } else {
        config.max_speed
    }
}

/// Force that turns the particle's velocity toward its braking-aware desired velocity.
pub fn steering_force(particle: &Particle, config: &SimulationConfig) -> Vector2D {
    let to_target = particle.target - particle.position;
    let speed = desired_speed(to_target.magnitude(), config);
    let desired = to_target.with_magnitude(speed);
    (desired - particle.velocity).limit(config.max_force)
}

/// Advances every particle by one tick.
///
/// The speed clamp runs after the force is applied, so `|velocity| <=
/// max_speed` holds when this returns.
pub fn step(particles: &mut [Particle], config: &SimulationConfig) {
    for particle in particles.iter_mut() {
        let force = steering_force(particle, config);
        particle.apply_force(force);
        particle.velocity = particle.velocity.limit(config.max_speed);
        particle.integrate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig {
            braking_distance: 100.0,
            max_speed: 20.0,
            max_force: 5.0,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_desired_speed_profile() {
        let config = config();
        assert_eq!(desired_speed(0.0, &config), 0.0);
        assert_eq!(desired_speed(50.0, &config), 10.0);
        assert_eq!(desired_speed(100.0, &config), 20.0);
        assert_eq!(desired_speed(1000.0, &config), 20.0);
    }

    #[test]
    fn test_step_at_braking_boundary() {
        let config = config();
        let mut particles = [Particle::new(Vector2D::new(100.0, 0.0), Vector2D::zero())];

        let force = steering_force(&particles[0], &config);
        assert!(force.magnitude() <= config.max_force + 1e-5);

        step(&mut particles, &config);

        let p = &particles[0];
        assert!(p.position.magnitude() < 100.0);
        // No overshoot past the target
        assert!(p.position.x > 0.0);
        assert!((p.velocity.magnitude() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_particle_at_rest_on_target_stays() {
        let config = config();
        let mut particles = [Particle::new(Vector2D::new(7.0, -3.0), Vector2D::new(7.0, -3.0))];

        step(&mut particles, &config);

        assert_eq!(particles[0].position, Vector2D::new(7.0, -3.0));
        assert_eq!(particles[0].velocity, Vector2D::zero());
    }

    #[test]
    fn test_speed_is_clamped_after_force() {
        let config = config();
        let mut particle = Particle::new(Vector2D::zero(), Vector2D::new(1000.0, 0.0));
        particle.velocity = Vector2D::new(0.0, 50.0);
        let mut particles = [particle];

        step(&mut particles, &config);

        assert!(particles[0].velocity.magnitude() <= config.max_speed + 1e-4);
    }

    #[test]
    fn test_moving_particle_at_target_brakes() {
        let config = config();
        let mut particle = Particle::new(Vector2D::zero(), Vector2D::zero());
        particle.velocity = Vector2D::new(3.0, 4.0);
        let mut particles = [particle];

        step(&mut particles, &config);

        // Desired velocity is zero, so the whole velocity is cancelled within max_force
        assert_eq!(particles[0].velocity, Vector2D::zero());
        assert_eq!(particles[0].position, Vector2D::zero());
    }

    #[test]
    fn test_empty_population_is_noop() {
        let mut particles: [Particle; 0] = [];
        step(&mut particles, &config());
    }
}
