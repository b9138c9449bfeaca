/// A 2D vector used for positions, targets, velocities and forces.
///
/// Arithmetic is plain `f32`; results for NaN or infinite components are
/// unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f32 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    /// Same direction, length `magnitude`. The zero vector stays zero.
    pub fn with_magnitude(&self, magnitude: f32) -> Self {
        self.normalize() * magnitude
    }

    /// Scales the vector down to `max` if it is longer, otherwise returns it unchanged.
    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).magnitude()
    }
}

#[cfg(feature = "std")]
fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

#[cfg(not(feature = "std"))]
fn sqrt(value: f32) -> f32 {
    libm::sqrtf(value)
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(Vector2D::zero().magnitude(), 0.0);
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));

        let mut v3 = v1;
        v3 += v2;
        assert_eq!(v3, Vector2D::new(4.0, 6.0));
    }

    #[test]
    fn test_vector2d_normalize() {
        let normalized = Vector2D::new(3.0, 4.0).normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 0.0001);
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    }

    #[test]
    fn test_with_magnitude_preserves_direction() {
        let v = Vector2D::new(3.0, 4.0).with_magnitude(10.0);
        assert!((v.x - 6.0).abs() < 1e-5);
        assert!((v.y - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_with_magnitude_of_zero_vector_is_zero() {
        let v = Vector2D::zero().with_magnitude(20.0);
        assert_eq!(v, Vector2D::zero());
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }

    #[test]
    fn test_limit() {
        let short = Vector2D::new(1.0, 1.0);
        assert_eq!(short.limit(5.0), short);

        let long = Vector2D::new(30.0, 40.0).limit(5.0);
        assert!((long.magnitude() - 5.0).abs() < 1e-5);
        assert!((long.x - 3.0).abs() < 1e-5);

        assert_eq!(Vector2D::zero().limit(0.0), Vector2D::zero());
    }

    #[test]
    fn test_distance() {
        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(-3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
