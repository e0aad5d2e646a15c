use super::caption::Caption;
use super::particle::{BurstId, Particle};
use super::rocket::Rocket;
use crate::palette::FIREWORK_COLORS;
use crate::random::Entropy;
use crate::surface::Surface;
use std::collections::HashMap;

pub const DEFAULT_LAUNCH_CHANCE: f32 = 0.02;

/// Live rockets, particles and captions, stepped once per frame.
///
/// The collections have no hard cap. They stay small because every particle
/// dies within a few hundred ticks and rockets launch at a fixed rate, but
/// that bound is a property of the tuning, not something enforced here.
pub struct Simulation<R> {
    rng: R,
    launch_chance: f32,
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    captions: Vec<Caption>,
    next_burst: u64,
}

impl<R: Entropy> Simulation<R> {
    pub fn new(rng: R, launch_chance: f32) -> Self {
        Self {
            rng,
            launch_chance,
            rockets: Vec::new(),
            particles: Vec::new(),
            captions: Vec::new(),
            next_burst: 0,
        }
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn launch(&mut self, rocket: Rocket) {
        log::debug!(
            "launch {} rocket at ({:.1}, {:.1})",
            rocket.shape.name(),
            rocket.motion.x,
            rocket.motion.y
        );
        self.rockets.push(rocket);
    }

    /// Advance everything by one frame on a `cols` x `rows` surface.
    pub fn tick(&mut self, cols: usize, rows: usize) {
        if cols > 0 && rows > 0 && self.rng.chance(self.launch_chance) {
            let x = self.rng.between(cols / 4..=cols * 3 / 4) as f32;
            let color = *self.rng.pick(&FIREWORK_COLORS);
            let rocket = Rocket::launch(x, (rows - 1) as f32, color, &mut self.rng);
            self.launch(rocket);
        }

        // Rockets: collect trails and detonations, apply them after the pass
        let mut spawned = Vec::new();
        let mut detonated = Vec::new();
        let rng = &mut self.rng;
        self.rockets.retain_mut(|rocket| {
            spawned.extend(rocket.update(rows, rng));
            if rocket.is_detonated() {
                detonated.push(rocket.clone());
                false
            } else {
                true
            }
        });

        for rocket in detonated {
            let id = BurstId(self.next_burst);
            self.next_burst += 1;

            let burst = rocket.explode(id, &mut self.rng);
            log::debug!("{} burst of {} particles", rocket.shape.name(), burst.len());
            if !burst.is_empty() {
                self.captions.push(Caption::new(
                    rocket.shape.name(),
                    rocket.motion.row(),
                    rocket.motion.col(),
                    id,
                    burst.len(),
                ));
            }
            spawned.extend(burst);
        }
        self.particles.extend(spawned);

        // Particles
        let mut live_per_burst: HashMap<BurstId, usize> = HashMap::new();
        self.particles.retain_mut(|particle| {
            particle.update();
            if particle.is_expired() {
                return false;
            }
            if let Some(burst) = particle.burst {
                *live_per_burst.entry(burst).or_default() += 1;
            }
            true
        });

        // Captions
        self.captions.retain_mut(|caption| caption.update(&live_per_burst));
    }

    /// Draw rockets, then particles, then captions. Captions pick a fresh
    /// colour from `flicker` on every call. Drawing never touches the
    /// simulation's own source, so a seeded show does not depend on how many
    /// frames were drawn.
    pub fn render<S: Surface, F: Entropy>(&self, surface: &mut S, flicker: &mut F) {
        for rocket in &self.rockets {
            rocket.draw(surface);
        }
        for particle in &self.particles {
            particle.draw(surface);
        }
        for caption in &self.captions {
            let color = *flicker.pick(&FIREWORK_COLORS);
            caption.draw(surface, color);
        }
    }
}
