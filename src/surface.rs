use crate::palette::{Ink, Palette};
use std::io::{self, Write};

/// Something the scene can be drawn on.
///
/// `plot` must tolerate any coordinate: cells outside `[0, rows) x [0, cols)`
/// are dropped without error, the way a terminal clips.
pub trait Surface {
    fn plot(&mut self, row: i32, col: i32, glyph: char, ink: Ink);

    /// `(rows, cols)`
    fn dimensions(&self) -> (usize, usize);

    fn plot_str(&mut self, row: i32, col: i32, text: &str, ink: Ink) {
        for (i, glyph) in text.chars().enumerate() {
            self.plot(row, col + i as i32, glyph, ink);
        }
    }
}

/// Cell buffer flushed to the terminal as one ANSI frame.
pub struct TerminalSurface {
    rows: usize,
    cols: usize,
    cells: Vec<Option<(char, Ink)>>,
    palette: Palette,
    output_buf: Vec<u8>,
}

impl TerminalSurface {
    pub fn new(cols: usize, rows: usize, palette: Palette) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; cols * rows],
            palette,
            output_buf: Vec::with_capacity(cols * rows * 25),
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; cols * rows];
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn cell(&self, row: usize, col: usize) -> Option<(char, Ink)> {
        self.cells[row * self.cols + col]
    }

    /// Encode the whole buffer and write it in a single call.
    pub fn present<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        for row in 0..self.rows {
            // Force a style reset at the start of each row
            let mut prev: Option<Option<Ink>> = None;
            for col in 0..self.cols {
                let cell = self.cell(row, col);
                let ink = cell.map(|(_, ink)| ink);
                if prev != Some(ink) {
                    self.write_style(ink)?;
                    prev = Some(ink);
                }
                let glyph = cell.map_or(' ', |(glyph, _)| glyph);
                let mut utf8 = [0u8; 4];
                self.output_buf
                    .extend_from_slice(glyph.encode_utf8(&mut utf8).as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            if row + 1 < self.rows {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()
    }

    fn write_style(&mut self, ink: Option<Ink>) -> io::Result<()> {
        self.output_buf.extend_from_slice(b"\x1b[0m");
        if let Some((r, g, b)) = self.palette.background() {
            write!(self.output_buf, "\x1b[48;2;{};{};{}m", r, g, b)?;
        }
        if let Some(ink) = ink {
            if ink.bold {
                self.output_buf.extend_from_slice(b"\x1b[1m");
            }
            let (r, g, b) = self.palette.rgb(ink.color);
            write!(self.output_buf, "\x1b[38;2;{};{};{}m", r, g, b)?;
        }
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn plot(&mut self, row: i32, col: i32, glyph: char, ink: Ink) {
        if row < 0 || col < 0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return;
        }
        self.cells[row * self.cols + col] = Some((glyph, ink));
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;

    fn surface() -> TerminalSurface {
        TerminalSurface::new(4, 2, Palette::new(None))
    }

    #[test]
    fn out_of_bounds_plots_leave_the_buffer_untouched() {
        let mut s = surface();
        s.plot(0, 0, '*', Ink::plain(PaletteColor::Red));
        let before = s.cells.clone();

        let ink = Ink::bold(PaletteColor::Blue);
        for (row, col) in [(-1, 0), (0, -1), (2, 0), (0, 4), (i32::MAX, i32::MAX), (i32::MIN, 3)] {
            s.plot(row, col, '#', ink);
        }
        s.plot_str(1, 2, "overflow", ink);

        assert_eq!(s.cells[..6], before[..6]);
        assert_eq!(s.cell(1, 2), Some(('o', ink)));
        assert_eq!(s.cell(1, 3), Some(('v', ink)));
    }

    #[test]
    fn present_writes_one_frame() {
        let mut s = surface();
        s.plot(1, 1, '·', Ink::bold(PaletteColor::Red));
        let mut out = Vec::new();
        s.present(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[H"));
        assert!(text.contains("\x1b[1m\x1b[38;2;255;30;30m·"));
        assert_eq!(text.matches("\r\n").count(), 1);
        assert!(!text.contains("48;2"));
    }

    #[test]
    fn background_is_painted_when_configured() {
        let mut s = TerminalSurface::new(2, 1, Palette::new(Some((0x1a, 0x1b, 0x26))));
        let mut out = Vec::new();
        s.present(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[48;2;26;27;38m  "));
    }

    #[test]
    fn clear_and_resize_drop_old_cells() {
        let mut s = surface();
        s.plot(0, 0, 'x', Ink::plain(PaletteColor::White));
        s.clear();
        assert_eq!(s.cell(0, 0), None);

        s.resize(10, 3);
        assert_eq!(s.dimensions(), (3, 10));
        s.plot(2, 9, 'y', Ink::plain(PaletteColor::White));
        assert_eq!(s.cell(2, 9), Some(('y', Ink::plain(PaletteColor::White))));
    }
}
