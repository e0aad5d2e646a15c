//! Large-digit clock face and the text overlays around it.

use crate::clock::Countdown;
use crate::palette::{Ink, PaletteColor};
use crate::surface::Surface;

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
const GLYPH_SPACING: usize = 1;
const FILL: char = '█';

pub const EXIT_HINT: &str = "Press escape twice to exit terminal";
pub const TOO_SMALL: &str = "Terminal too small";

static FONT: [(char, [&str; GLYPH_HEIGHT]); 11] = [
    ('0', [" XXX ", "X   X", "X   X", "X   X", "X   X", "X   X", " XXX "]),
    ('1', ["  X  ", " XX  ", "  X  ", "  X  ", "  X  ", "  X  ", " XXX "]),
    ('2', [" XXX ", "X   X", "    X", "   X ", "  X  ", " X   ", "XXXXX"]),
    ('3', [" XXX ", "X   X", "    X", " XXX ", "    X", "X   X", " XXX "]),
    ('4', ["X   X", "X   X", "X   X", "XXXXX", "    X", "    X", "    X"]),
    ('5', ["XXXXX", "X    ", "X    ", " XXX ", "    X", "X   X", " XXX "]),
    ('6', [" XXX ", "X    ", "X    ", "XXXXX", "X   X", "X   X", " XXX "]),
    ('7', ["XXXXX", "X   X", "    X", "   X ", "  X  ", "  X  ", "  X  "]),
    ('8', [" XXX ", "X   X", "X   X", " XXX ", "X   X", "X   X", " XXX "]),
    ('9', [" XXX ", "X   X", "X   X", "XXXXX", "    X", "    X", " XXX "]),
    (':', ["     ", "  X  ", "     ", "     ", "     ", "  X  ", "     "]),
];

fn glyph(c: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    FONT.iter().find(|(key, _)| *key == c).map(|(_, rows)| rows)
}

/// Columns needed to draw `text` in the large font.
pub fn text_width(text: &str) -> usize {
    text.chars().count() * (GLYPH_WIDTH + GLYPH_SPACING)
}

fn draw_glyph<S: Surface>(surface: &mut S, c: char, row: i32, col: i32, ink: Ink) {
    let Some(rows) = glyph(c) else {
        return;
    };
    for (dy, line) in rows.iter().enumerate() {
        for (dx, mark) in line.chars().enumerate() {
            if mark != ' ' {
                surface.plot(row + dy as i32, col + dx as i32, FILL, ink);
            }
        }
    }
}

/// Plot `text` centred on `row`.
pub fn draw_centered<S: Surface>(surface: &mut S, row: i32, text: &str, ink: Ink) {
    let (_, cols) = surface.dimensions();
    let col = (cols / 2) as i32 - (text.chars().count() / 2) as i32;
    surface.plot_str(row, col, text, ink);
}

/// Draw the countdown in the middle of the surface, or a notice when it
/// does not fit.
pub fn draw_clock<S: Surface>(surface: &mut S, countdown: &Countdown) {
    let (rows, cols) = surface.dimensions();
    let text = countdown.display();
    let width = text_width(&text);
    let white = Ink::plain(PaletteColor::White);

    if cols < width || rows < GLYPH_HEIGHT {
        draw_centered(surface, (rows / 2) as i32, TOO_SMALL, white);
        return;
    }

    let left = (cols / 2 - width / 2) as i32;
    let top = ((rows - GLYPH_HEIGHT) / 2) as i32;
    for (i, c) in text.chars().enumerate() {
        draw_glyph(surface, c, top, left + (i * (GLYPH_WIDTH + GLYPH_SPACING)) as i32, white);
    }
}

pub fn draw_exit_hint<S: Surface>(surface: &mut S) {
    let (rows, _) = surface.dimensions();
    draw_centered(
        surface,
        (rows / 2) as i32 + 10,
        EXIT_HINT,
        Ink::bold(PaletteColor::White),
    );
}
