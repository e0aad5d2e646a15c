use super::motion::{Motion, integrate};
use super::particle::{BurstId, Particle};
use super::shape::{self, Shape};
use crate::palette::{Ink, PaletteColor};
use crate::random::Entropy;
use crate::surface::Surface;

const ROCKET_GLYPH: char = '^';
const TRAIL_GLYPHS: [char; 2] = ['.', '`'];

/// Rows kept free between the burst zone and the middle of the screen.
const APEX_MARGIN: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ascending,
    /// Past the apex, counting down to detonation.
    Descending { countdown: i32 },
    Detonated,
}

#[derive(Clone, Debug)]
pub struct Rocket {
    pub motion: Motion,
    pub color: PaletteColor,
    pub shape: Shape,
    phase: Phase,
}

/// Highest row a rocket may reach on a surface `rows` tall.
pub fn min_apex_row(rows: usize) -> f32 {
    ((rows / 2) as i32 - APEX_MARGIN) as f32
}

impl Rocket {
    pub fn new(motion: Motion, color: PaletteColor, shape: Shape) -> Self {
        Self { motion, color, shape, phase: Phase::Ascending }
    }

    /// A rocket fired from `(x, y)` with a random tilt, speed and shape.
    pub fn launch<R: Entropy>(x: f32, y: f32, color: PaletteColor, rng: &mut R) -> Self {
        let vx = rng.uniform(-1.5, 1.5);
        let vy = -rng.uniform(2.0, 3.0);
        Self::new(Motion::new(x, y, vx, vy), color, Shape::random(rng))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn apex_reached(&self) -> bool {
        self.phase != Phase::Ascending
    }

    pub fn is_detonated(&self) -> bool {
        self.phase == Phase::Detonated
    }

    /// Advance one tick on a surface `rows` tall. Returns the trail emitted
    /// at the position the rocket held before moving.
    pub fn update<R: Entropy>(&mut self, rows: usize, rng: &mut R) -> Vec<Particle> {
        let trail = self.emit_trail(rng);

        integrate(&mut self.motion);

        let apex_row = min_apex_row(rows);
        if self.motion.y < apex_row {
            self.motion.y = apex_row;
            if self.motion.vy() < 0.0 {
                self.motion.halt_vertical();
            }
        }

        self.phase = match self.phase {
            Phase::Ascending if self.motion.vy() >= 0.0 => Phase::Descending {
                countdown: rng.between(3..=10) as i32,
            },
            Phase::Descending { countdown } if countdown - 1 <= 0 => Phase::Detonated,
            Phase::Descending { countdown } => Phase::Descending { countdown: countdown - 1 },
            phase => phase,
        };

        trail
    }

    fn emit_trail<R: Entropy>(&self, rng: &mut R) -> Vec<Particle> {
        let count = rng.between(4..=7);
        (0..count)
            .map(|_| {
                let life = rng.between(5..=15) as i32;
                let glyph = *rng.pick(&TRAIL_GLYPHS);
                // Cells are taller than wide, so spread less vertically
                let x = self.motion.x + rng.uniform(-0.5, 0.5);
                let y = self.motion.y + rng.uniform(-0.2, 0.2);
                Particle::new(Motion::new(x, y, 0.0, 0.0), glyph, Ink::bold(self.color), life)
            })
            .collect()
    }

    pub fn explode<R: Entropy>(&self, id: BurstId, rng: &mut R) -> Vec<Particle> {
        shape::burst(self.shape, &self.motion, Ink::plain(self.color), id, rng)
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        if self.is_detonated() {
            return;
        }
        surface.plot(
            self.motion.row(),
            self.motion.col(),
            ROCKET_GLYPH,
            Ink::plain(self.color),
        );
    }
}
