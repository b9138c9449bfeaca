//! Outlines the swarm reforms into.
//!
//! Every outline is centered on the origin in screen coordinates, with `y`
//! growing downward. Parametric outlines accumulate `t += step` in `f64`
//! from zero while `t <= 2π`, which fixes each outline's point count.

use core::f64::consts::{PI, TAU};

use crate::Vector2D;

/// Produces one shape as an ordered list of anchor points.
pub trait ShapeGenerator {
    fn generate(&self) -> Vec<Vector2D>;
}

impl<F> ShapeGenerator for F
where
    F: Fn() -> Vec<Vector2D>,
{
    fn generate(&self) -> Vec<Vector2D> {
        self()
    }
}

/// The built-in outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Triangle,
    Square,
    Circle,
    Heart,
    Cycloid,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Triangle,
        Shape::Square,
        Shape::Circle,
        Shape::Heart,
        Shape::Cycloid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Heart => "heart",
            Shape::Cycloid => "cycloid",
        }
    }

    /// Point lists for every built-in shape, in display order.
    pub fn catalog() -> Vec<Vec<Vector2D>> {
        build_catalog(Self::ALL.iter().map(|shape| shape as &dyn ShapeGenerator))
    }
}

impl ShapeGenerator for Shape {
    fn generate(&self) -> Vec<Vector2D> {
        match self {
            Shape::Triangle => triangle(),
            Shape::Square => sweep(0.15, |t| {
                let (sin, cos) = t.sin_cos();
                Vector2D::new(
                    150.0 * (cos.abs() * cos + sin.abs() * sin),
                    150.0 * (cos.abs() * cos - sin.abs() * sin),
                )
            }),
            Shape::Circle => sweep(PI / 15.0, |t| {
                let (sin, cos) = t.sin_cos();
                Vector2D::new(150.0 * cos, 150.0 * sin)
            }),
            Shape::Heart => sweep(0.15, |t| {
                Vector2D::new(
                    10.0 * 16.0 * t.sin().powi(3),
                    -10.0
                        * (13.0 * t.cos()
                            - 5.0 * (2.0 * t).cos()
                            - 2.0 * (3.0 * t).cos()
                            - (4.0 * t).cos()),
                )
            }),
            Shape::Cycloid => sweep(0.12, |t| {
                let (sin, cos) = t.sin_cos();
                Vector2D::new(200.0 * sin.powi(3), 200.0 * cos.powi(3))
            }),
        }
    }
}

/// Runs each generator once, in order.
pub fn build_catalog<'a, I>(generators: I) -> Vec<Vec<Vector2D>>
where
    I: IntoIterator<Item = &'a dyn ShapeGenerator>,
{
    generators
        .into_iter()
        .map(|generator| generator.generate())
        .collect()
}

fn sweep(step: f64, point: impl Fn(f32) -> Vector2D) -> Vec<Vector2D> {
    // Accumulated error pushes the circle's 31st sample just past 2π
    let mut points = Vec::new();
    let mut t = 0.0_f64;
    while t <= TAU {
        points.push(point(t as f32));
        t += step;
    }
    points
}

fn triangle() -> Vec<Vector2D> {
    const SIDE: f32 = 350.0;
    const POINTS_PER_SIDE: usize = 10;

    let height = SIDE * 3.0_f32.sqrt() / 4.0;
    let a = Vector2D::new(-SIDE / 2.0, height);
    let b = Vector2D::new(SIDE / 2.0, height);
    let c = Vector2D::new(0.0, -height);

    [(a, b), (b, c), (c, a)]
        .into_iter()
        .flat_map(|(start, end)| {
            (1..=POINTS_PER_SIDE).map(move |k| {
                let t = k as f32 / POINTS_PER_SIDE as f32;
                start + (end - start) * t
            })
        })
        .collect()
}
