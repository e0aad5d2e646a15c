use super::motion::{Motion, integrate};
use crate::palette::Ink;
use crate::surface::Surface;

/// Identifies the explosion a particle came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BurstId(pub u64);

#[derive(Clone, Debug)]
pub struct Particle {
    pub motion: Motion,
    pub glyph: char,
    pub ink: Ink,
    /// Remaining ticks; expired at zero or below.
    pub life: i32,
    pub burst: Option<BurstId>,
}

impl Particle {
    pub fn new(motion: Motion, glyph: char, ink: Ink, life: i32) -> Self {
        Self { motion, glyph, ink, life, burst: None }
    }

    pub fn update(&mut self) {
        integrate(&mut self.motion);
        self.life -= 1;
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        if self.is_expired() {
            return;
        }
        surface.plot(self.motion.row(), self.motion.col(), self.glyph, self.ink);
    }
}
