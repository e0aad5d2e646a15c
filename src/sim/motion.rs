/// Downward acceleration, in rows per tick per tick.
pub const GRAVITY: f32 = 0.05;

/// Position and velocity shared by particles and rockets.
///
/// Vertical velocity is kept as a base value plus elapsed ticks, so after N
/// ticks it is exactly `vy0 + N * GRAVITY` with one rounding instead of N.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    vy0: f32,
    ticks: u32,
}

impl Motion {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { x, y, vx, vy0: vy, ticks: 0 }
    }

    pub fn vy(&self) -> f32 {
        self.vy0 + self.ticks as f32 * GRAVITY
    }

    /// Stop vertical motion; gravity starts again from zero next tick.
    pub fn halt_vertical(&mut self) {
        self.vy0 = 0.0;
        self.ticks = 0;
    }

    pub fn row(&self) -> i32 {
        self.y.floor() as i32
    }

    pub fn col(&self) -> i32 {
        self.x.floor() as i32
    }
}

/// One tick: move by the current velocity, then let gravity act.
pub fn integrate(motion: &mut Motion) {
    motion.x += motion.vx;
    motion.y += motion.vy();
    motion.ticks += 1;
}
