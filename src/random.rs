//! Random source used by the simulation.
//!
//! Every random decision (launch gating, shape, countdown, jitter) goes
//! through [`Entropy`], so a seeded or scripted source reproduces a show
//! exactly.

use std::ops::RangeInclusive;

pub trait Entropy {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }

    /// Inclusive integer range, like `randint`.
    fn between(&mut self, range: RangeInclusive<usize>) -> usize {
        let (lo, hi) = range.into_inner();
        lo + self.below(hi - lo + 1)
    }

    fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

impl Entropy for fastrand::Rng {
    fn unit(&mut self) -> f32 {
        self.f32()
    }

    fn below(&mut self, n: usize) -> usize {
        self.usize(0..n)
    }
}
