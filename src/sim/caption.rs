use super::particle::BurstId;
use crate::palette::{Ink, PaletteColor};
use crate::surface::Surface;
use std::collections::HashMap;

/// Ticks a caption stays up at most.
pub const CAPTION_TICKS: i32 = 10;

/// Shape name shown over an explosion while its burst is still visible.
#[derive(Clone, Debug)]
pub struct Caption {
    pub text: &'static str,
    pub row: i32,
    /// Leftmost column; the text is centred on the explosion.
    pub col: i32,
    pub burst: BurstId,
    /// Burst particles still alive as of the last update.
    pub live: usize,
    pub countdown: i32,
}

impl Caption {
    pub fn new(text: &'static str, row: i32, center: i32, burst: BurstId, live: usize) -> Self {
        Self {
            text,
            row,
            col: center - (text.chars().count() / 2) as i32,
            burst,
            live,
            countdown: CAPTION_TICKS,
        }
    }

    /// Refresh from the per-burst live counts. Returns whether to keep it.
    pub fn update(&mut self, live_per_burst: &HashMap<BurstId, usize>) -> bool {
        self.live = live_per_burst.get(&self.burst).copied().unwrap_or(0);
        self.countdown -= 1;
        self.live > 0 && self.countdown > 0
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, color: PaletteColor) {
        surface.plot_str(self.row, self.col, self.text, Ink::bold(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::Recording;

    #[test]
    fn text_is_centred_on_the_explosion() {
        let caption = Caption::new("circle", 5, 40, BurstId(0), 10);
        assert_eq!(caption.col, 37);

        let mut surface = Recording::new(80, 20);
        caption.draw(&mut surface, PaletteColor::Magenta);
        let text: String = surface.plots.iter().map(|p| p.glyph).collect();
        assert_eq!(text, "circle");
        assert!(surface.plots.iter().all(|p| p.ink == Ink::bold(PaletteColor::Magenta)));
    }

    #[test]
    fn expires_after_its_countdown() {
        let mut caption = Caption::new("star", 0, 0, BurstId(3), 50);
        let counts = HashMap::from([(BurstId(3), 50)]);
        for _ in 0..CAPTION_TICKS - 1 {
            assert!(caption.update(&counts));
        }
        assert!(!caption.update(&counts));
    }

    #[test]
    fn expires_with_its_burst() {
        let mut caption = Caption::new("heart", 0, 0, BurstId(3), 50);
        assert!(caption.update(&HashMap::from([(BurstId(3), 1)])));
        assert!(!caption.update(&HashMap::from([(BurstId(4), 7)])));
        assert_eq!(caption.live, 0);
    }
}
