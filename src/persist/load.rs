//! Parsing saved escape text back into a canvas.

use std::fs;
use std::mem;
use std::path::Path;

use vte::{Params, Parser, Perform};

use crate::canvas::Canvas;
use crate::codec::{pattern_bit, pattern_for_glyph, CELL_H, CELL_W};
use crate::color::{Color, ColorMode};

use super::{PersistError, Result};

/// Parse saved image text into a canvas.
///
/// Accepts exactly the sequences [`save_canvas`](super::save_canvas) can
/// emit. Rows may be ragged; short ones pad out with blank default-colored
/// cells. The color mode comes from the sequences themselves: any direct
/// RGB sequence makes the image direct-color, otherwise it is 16-color
/// when every palette index fits below 16 and 256-color when not.
pub fn load_canvas(text: &str) -> Result<Canvas> {
    let mut parser = Parser::new();
    let mut loader = Loader::new();
    parser.advance(&mut loader, text.as_bytes());
    loader.finish()
}

/// Read and parse an image file.
pub fn load_canvas_from(path: &Path) -> Result<Canvas> {
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    load_canvas(&text)
}

/// Palette and direct-color sequences cannot appear in the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorFamily {
    Palette,
    Direct,
}

/// One parsed glyph with the colors in effect when it was printed.
///
/// A `fg` of `None` means no foreground has been set since the last
/// reset; it resolves to the inferred mode's default at the end.
#[derive(Clone, Copy)]
struct LoadedCell {
    pattern: u8,
    fg: Option<Color>,
    bg: Color,
}

/// `vte::Perform` sink accepting exactly the save grammar.
///
/// `Perform` methods cannot return errors, so the first failure latches
/// into `error`, later input is ignored, and `finish` reports it.
struct Loader {
    rows: Vec<Vec<LoadedCell>>,
    cells: Vec<LoadedCell>,
    fg: Option<Color>,
    bg: Color,
    family: Option<ColorFamily>,
    error: Option<PersistError>,
}

impl Loader {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            cells: Vec::new(),
            fg: None,
            bg: Color::Transparent,
            family: None,
            error: None,
        }
    }

    fn fail(&mut self, err: PersistError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn unsupported(&mut self, found: String) {
        self.fail(PersistError::UnsupportedSequence { found });
    }

    fn set_family(&mut self, family: ColorFamily) {
        match self.family {
            None => self.family = Some(family),
            Some(seen) if seen != family => self.fail(PersistError::MixedColorModes),
            Some(_) => {}
        }
    }

    /// CSI `m` with its parameters flattened into one slice.
    fn apply_sgr(&mut self, params: &[u16]) {
        match params {
            [] | [0] => {
                self.fg = None;
                self.bg = Color::Transparent;
            }
            [n @ 30..=37] => {
                self.fg = Some(Color::Indexed((n - 30) as u8));
                self.set_family(ColorFamily::Palette);
            }
            [n @ 90..=97] => {
                self.fg = Some(Color::Indexed((n - 90 + 8) as u8));
                self.set_family(ColorFamily::Palette);
            }
            [n @ 40..=47] => {
                self.bg = Color::Indexed((n - 40) as u8);
                self.set_family(ColorFamily::Palette);
            }
            [n @ 100..=107] => {
                self.bg = Color::Indexed((n - 100 + 8) as u8);
                self.set_family(ColorFamily::Palette);
            }
            [38, 5, n] if *n <= 255 => {
                self.fg = Some(Color::Indexed(*n as u8));
                self.set_family(ColorFamily::Palette);
            }
            [48, 5, n] if *n <= 255 => {
                self.bg = Color::Indexed(*n as u8);
                self.set_family(ColorFamily::Palette);
            }
            [38, 2, r, g, b] if *r <= 255 && *g <= 255 && *b <= 255 => {
                self.fg = Some(Color::Rgb(*r as u8, *g as u8, *b as u8));
                self.set_family(ColorFamily::Direct);
            }
            [48, 2, r, g, b] if *r <= 255 && *g <= 255 && *b <= 255 => {
                self.bg = Color::Rgb(*r as u8, *g as u8, *b as u8);
                self.set_family(ColorFamily::Direct);
            }
            _ => self.unsupported(format!("SGR {:?}", params)),
        }
    }

    fn finish(mut self) -> Result<Canvas> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.cells.is_empty() {
            let row = mem::take(&mut self.cells);
            self.rows.push(row);
        }
        let cols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if cols == 0 {
            return Err(PersistError::EmptyImage);
        }

        let mode = match self.family {
            Some(ColorFamily::Direct) => ColorMode::Direct,
            _ => {
                let all_low = self.rows.iter().flatten().all(|cell| {
                    let fg_low = match cell.fg {
                        Some(Color::Indexed(n)) => n <= 15,
                        _ => true,
                    };
                    let bg_low = match cell.bg {
                        Color::Indexed(n) => n <= 15,
                        _ => true,
                    };
                    fg_low && bg_low
                });
                if all_low {
                    ColorMode::C16
                } else {
                    ColorMode::C256
                }
            }
        };

        let width = cols * CELL_W;
        let height = self.rows.len() * CELL_H;
        let default_fg = mode.default_fg();
        let mut pixels = vec![false; width * height];
        let mut fg = vec![default_fg; cols * self.rows.len()];
        let mut bg = vec![mode.default_bg(); cols * self.rows.len()];
        for (cy, row) in self.rows.iter().enumerate() {
            for (cx, cell) in row.iter().enumerate() {
                fg[cy * cols + cx] = cell.fg.unwrap_or(default_fg);
                bg[cy * cols + cx] = cell.bg;
                for px in 0..CELL_W {
                    for py in 0..CELL_H {
                        if cell.pattern & pattern_bit(px, py) != 0 {
                            pixels[(cy * CELL_H + py) * width + cx * CELL_W + px] = true;
                        }
                    }
                }
            }
        }
        log::debug!(
            "parsed {} cell rows into a {}x{} {} canvas",
            self.rows.len(),
            width,
            height,
            mode
        );
        Ok(Canvas::from_parts(width, height, mode, pixels, fg, bg))
    }
}

impl Perform for Loader {
    fn print(&mut self, c: char) {
        if self.error.is_some() {
            return;
        }
        match pattern_for_glyph(c) {
            Some(pattern) => self.cells.push(LoadedCell {
                pattern,
                fg: self.fg,
                bg: self.bg,
            }),
            None => self.fail(PersistError::UnknownGlyph {
                glyph: c,
                row: self.rows.len(),
                col: self.cells.len(),
            }),
        }
    }

    fn execute(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        if byte == b'\n' {
            let row = mem::take(&mut self.cells);
            self.rows.push(row);
        } else {
            self.unsupported(format!("control byte {:#04x}", byte));
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if self.error.is_some() {
            return;
        }
        if action != 'm' || !intermediates.is_empty() || ignore {
            self.unsupported(format!("CSI {:?}", action));
            return;
        }
        // save output never uses colon subparameters or more than five params
        let mut flat = [0u16; 5];
        let mut len = 0;
        for group in params.iter() {
            if group.len() > 1 || len == flat.len() {
                self.unsupported("an oversized SGR".to_string());
                return;
            }
            flat[len] = group.first().copied().unwrap_or(0);
            len += 1;
        }
        self.apply_sgr(&flat[..len]);
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, byte: u8) {
        self.unsupported(format!("ESC {:?}", byte as char));
    }

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        self.unsupported("an OSC sequence".to_string());
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        self.unsupported("a DCS sequence".to_string());
    }

    // DCS payloads are already rejected at hook
    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}
}
