//! Fixed colour palette shared by the clock face and the fireworks.

/// Semantic colours, in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    White,
    Yellow,
    Green,
    Cyan,
    Red,
    Magenta,
    Blue,
}

/// Colours cycled for rockets, bursts and captions. White is kept for the clock.
pub const FIREWORK_COLORS: [PaletteColor; 6] = [
    PaletteColor::Yellow,
    PaletteColor::Green,
    PaletteColor::Cyan,
    PaletteColor::Red,
    PaletteColor::Magenta,
    PaletteColor::Blue,
];

/// What a single cell is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ink {
    pub color: PaletteColor,
    pub bold: bool,
}

impl Ink {
    pub const fn plain(color: PaletteColor) -> Self {
        Self { color, bold: false }
    }

    pub const fn bold(color: PaletteColor) -> Self {
        Self { color, bold: true }
    }
}

/// RGB values for each palette entry plus the optional background.
///
/// Built once at startup and only read afterwards.
#[derive(Clone, Debug)]
pub struct Palette {
    background: Option<(u8, u8, u8)>,
}

impl Palette {
    pub fn new(background: Option<(u8, u8, u8)>) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Option<(u8, u8, u8)> {
        self.background
    }

    pub fn rgb(&self, color: PaletteColor) -> (u8, u8, u8) {
        match color {
            PaletteColor::White => (235, 235, 235),
            PaletteColor::Yellow => (255, 220, 0),
            PaletteColor::Green => (0, 255, 100),
            PaletteColor::Cyan => (0, 220, 255),
            PaletteColor::Red => (255, 30, 30),
            PaletteColor::Magenta => (230, 50, 230),
            PaletteColor::Blue => (60, 120, 255),
        }
    }
}
