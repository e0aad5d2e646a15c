//! Terminal countdown clock with a firework show behind it.

pub mod clock;
pub mod config;
pub mod face;
pub mod input;
pub mod palette;
pub mod random;
pub mod scene;
pub mod sim;
pub mod surface;
