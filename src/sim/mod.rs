//! Firework particle simulation.
//!
//! Units are terminal cells and frames: x is a column, y a row growing
//! downward, and every velocity is in cells per tick.

pub mod caption;
pub mod motion;
pub mod particle;
pub mod rocket;
pub mod shape;
pub mod state;

pub use state::{DEFAULT_LAUNCH_CHANCE, Simulation};
