//! Explosion patterns.
//!
//! Terminal cells are about twice as tall as they are wide, so every pattern
//! stretches its horizontal velocity by [`ASPECT`] to look round on screen.

use super::motion::Motion;
use super::particle::{BurstId, Particle};
use crate::palette::Ink;
use crate::random::Entropy;
use std::f32::consts::{FRAC_PI_8, TAU};
use std::ops::RangeInclusive;

pub const PARTICLE_GLYPHS: [char; 4] = ['*', '.', '+', '·'];
pub const ASPECT: f32 = 2.0;

const HEART_TEMPLATE: [(i32, i32); 16] = [
    (0, -2), (1, -3), (2, -2), (3, -1), (4, 0),
    (3, 1), (2, 2), (1, 3), (0, 4), (-1, 3),
    (-2, 2), (-3, 1), (-4, 0), (-3, -1), (-2, -2), (-1, -3),
];
const HEART_SCALE: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Star,
    Square,
    Heart,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Star, Shape::Square, Shape::Heart];

    pub fn random<R: Entropy>(rng: &mut R) -> Self {
        *rng.pick(&Self::ALL)
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Star => "star",
            Shape::Square => "square",
            Shape::Heart => "heart",
        }
    }

    pub fn burst_size(self) -> RangeInclusive<usize> {
        match self {
            Shape::Heart => 150..=250,
            _ => 100..=200,
        }
    }

    pub fn lifespan(self) -> RangeInclusive<usize> {
        match self {
            Shape::Heart => 40..=80,
            _ => 60..=120,
        }
    }
}

/// Per-explosion parameters, drawn once before the particles.
enum Pattern {
    Circle,
    Star { rays: usize, base_angle: f32 },
    Square,
    Heart { outline: [(f32, f32); 16] },
}

impl Pattern {
    fn plan<R: Entropy>(shape: Shape, rng: &mut R) -> Self {
        match shape {
            Shape::Circle => Pattern::Circle,
            Shape::Star => Pattern::Star {
                rays: rng.between(5..=8),
                base_angle: rng.uniform(0.0, TAU),
            },
            Shape::Square => Pattern::Square,
            Shape::Heart => Pattern::Heart { outline: heart_outline() },
        }
    }

    fn velocity<R: Entropy>(&self, rng: &mut R) -> (f32, f32) {
        match *self {
            Pattern::Circle => circle_velocity(rng),
            Pattern::Star { rays, base_angle } => star_velocity(rng, rays, base_angle),
            Pattern::Square => square_velocity(rng),
            Pattern::Heart { ref outline } => heart_velocity(rng, outline),
        }
    }
}

/// Build the particles of one explosion at `origin`.
pub fn burst<R: Entropy>(
    shape: Shape,
    origin: &Motion,
    ink: Ink,
    id: BurstId,
    rng: &mut R,
) -> Vec<Particle> {
    let pattern = Pattern::plan(shape, rng);
    let count = rng.between(shape.burst_size());
    let mut particles = Vec::with_capacity(count);

    for _ in 0..count {
        let (vx, vy) = pattern.velocity(rng);
        let life = rng.between(shape.lifespan()) as i32;
        let glyph = *rng.pick(&PARTICLE_GLYPHS);
        let mut particle = Particle::new(Motion::new(origin.x, origin.y, vx, vy), glyph, ink, life);
        particle.burst = Some(id);
        particles.push(particle);
    }

    particles
}

fn circle_velocity<R: Entropy>(rng: &mut R) -> (f32, f32) {
    let angle = rng.uniform(0.0, TAU);
    let speed = rng.uniform(0.5, 1.5);
    (angle.cos() * speed * ASPECT, angle.sin() * speed)
}

fn star_velocity<R: Entropy>(rng: &mut R, rays: usize, base_angle: f32) -> (f32, f32) {
    let ray = rng.below(rays);
    let angle = base_angle + (TAU / rays as f32) * ray as f32 + rng.uniform(-0.1, 0.1);
    let speed = rng.uniform(1.0, 3.0);
    (angle.cos() * speed * ASPECT, angle.sin() * speed)
}

fn square_velocity<R: Entropy>(rng: &mut R) -> (f32, f32) {
    let side = rng.below(4);
    let speed = rng.uniform(0.5, 1.5);
    let (vx, vy) = match side {
        0 => (rng.uniform(-1.0, 1.0) * speed, -speed), // top
        1 => (rng.uniform(-1.0, 1.0) * speed, speed),  // bottom
        2 => (-speed, rng.uniform(-1.0, 1.0) * speed), // left
        _ => (speed, rng.uniform(-1.0, 1.0) * speed),  // right
    };
    (vx * ASPECT, vy)
}

fn heart_outline() -> [(f32, f32); 16] {
    // Scaled points snap toward zero on the integer grid
    HEART_TEMPLATE.map(|(x, y)| {
        (
            (x as f32 * HEART_SCALE) as i32 as f32,
            (y as f32 * HEART_SCALE) as i32 as f32,
        )
    })
}

fn heart_velocity<R: Entropy>(rng: &mut R, outline: &[(f32, f32); 16]) -> (f32, f32) {
    let (px, py) = *rng.pick(outline);
    let dx = px + rng.uniform(-0.8, 0.8);
    let dy = py + rng.uniform(-0.8, 0.8);

    let angle = dy.atan2(dx) + rng.uniform(-FRAC_PI_8, FRAC_PI_8);
    let outward = rng.uniform(0.1, 0.6);

    (
        dx * 0.1 + angle.cos() * outward * ASPECT,
        dy * 0.1 + angle.sin() * outward,
    )
}
