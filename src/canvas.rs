//! Pixel canvas backing every drawing operation.
//!
//! The canvas is a monochrome bitmap plus two per-cell color planes. Pixel
//! coordinates run over `width x height`, cell coordinates over
//! `width / 2 x height / 4`. Dimensions always divide into whole cells, so
//! every pixel belongs to exactly one cell and every cell renders as one
//! glyph.

use crate::codec::{self, CELL_H, CELL_W};
use crate::color::{can_convert, Color, ColorMode, ConvertBlocked};
use std::fmt;

/// Errors from canvas accessors and constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// Coordinates outside the canvas.
    OutOfBounds { x: usize, y: usize },
    /// Dimensions that do not divide into whole 2x4 cells.
    InvalidDimensions { width: usize, height: usize },
    /// A color value the canvas mode cannot store.
    ModeMismatch { mode: ColorMode, color: Color },
    /// Transparent is a background-only sentinel.
    TransparentForeground,
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::OutOfBounds { x, y } => {
                write!(f, "coordinates ({}, {}) outside the canvas", x, y)
            }
            CanvasError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "canvas dimensions {}x{} do not divide into {}x{} cells",
                    width, height, CELL_W, CELL_H
                )
            }
            CanvasError::ModeMismatch { mode, color } => {
                write!(f, "color {:?} not storable in {} mode", color, mode)
            }
            CanvasError::TransparentForeground => {
                write!(f, "foreground color cannot be transparent")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

pub type Result<T> = std::result::Result<T, CanvasError>;

/// A drawing surface of pixels with per-cell colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Width in pixels, always a positive multiple of 2.
    pub(crate) width: usize,
    /// Height in pixels, always a positive multiple of 4.
    pub(crate) height: usize,
    /// Pixel bitmap, row-major, `width * height` entries.
    pub(crate) pixels: Vec<bool>,
    /// Palette depth of the color planes.
    pub(crate) mode: ColorMode,
    /// Per-cell foreground colors, row-major over cells.
    pub(crate) fg: Vec<Color>,
    /// Per-cell background colors, row-major over cells.
    pub(crate) bg: Vec<Color>,
}

impl Canvas {
    /// Create a blank canvas. `width` must be a positive multiple of 2 and
    /// `height` a positive multiple of 4.
    pub fn new(width: usize, height: usize, mode: ColorMode) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let cells = (width / CELL_W) * (height / CELL_H);
        Ok(Self {
            width,
            height,
            pixels: vec![false; width * height],
            mode,
            fg: vec![mode.default_fg(); cells],
            bg: vec![mode.default_bg(); cells],
        })
    }

    fn check_dimensions(width: usize, height: usize) -> Result<()> {
        if width == 0 || width % CELL_W != 0 || height == 0 || height % CELL_H != 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Assemble a canvas from prebuilt planes. Plane lengths must already
    /// agree with the dimensions.
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        mode: ColorMode,
        pixels: Vec<bool>,
        fg: Vec<Color>,
        bg: Vec<Color>,
    ) -> Self {
        debug_assert!(Self::check_dimensions(width, height).is_ok());
        debug_assert_eq!(pixels.len(), width * height);
        debug_assert_eq!(fg.len(), (width / CELL_W) * (height / CELL_H));
        debug_assert_eq!(bg.len(), fg.len());
        Self {
            width,
            height,
            pixels,
            mode,
            fg,
            bg,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cell columns.
    pub fn cell_cols(&self) -> usize {
        self.width / CELL_W
    }

    /// Number of cell rows.
    pub fn cell_rows(&self) -> usize {
        self.height / CELL_H
    }

    /// Current palette depth.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Get a pixel, `None` outside the canvas.
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set a pixel.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> Result<()> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = on;
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds { x, y })
        }
    }

    /// Get a cell's foreground and background, `None` outside the grid.
    pub fn get_cell_color(&self, cx: usize, cy: usize) -> Option<(Color, Color)> {
        if cx < self.cell_cols() && cy < self.cell_rows() {
            let idx = cy * self.cell_cols() + cx;
            Some((self.fg[idx], self.bg[idx]))
        } else {
            None
        }
    }

    /// Set a cell's foreground and background.
    ///
    /// The foreground must be an opaque color of the current mode; the
    /// background may additionally be transparent.
    pub fn set_cell_color(&mut self, cx: usize, cy: usize, fg: Color, bg: Color) -> Result<()> {
        if cx >= self.cell_cols() || cy >= self.cell_rows() {
            return Err(CanvasError::OutOfBounds { x: cx, y: cy });
        }
        if fg.is_transparent() {
            return Err(CanvasError::TransparentForeground);
        }
        if !fg.fits(self.mode) {
            return Err(CanvasError::ModeMismatch { mode: self.mode, color: fg });
        }
        if !bg.fits(self.mode) {
            return Err(CanvasError::ModeMismatch { mode: self.mode, color: bg });
        }
        let idx = cy * self.cell_cols() + cx;
        self.fg[idx] = fg;
        self.bg[idx] = bg;
        Ok(())
    }

    /// Packed 2x4 pixel pattern of a cell, `None` outside the grid.
    pub fn cell_pattern(&self, cx: usize, cy: usize) -> Option<u8> {
        if cx >= self.cell_cols() || cy >= self.cell_rows() {
            return None;
        }
        let mut pattern = 0u8;
        for px in 0..CELL_W {
            for py in 0..CELL_H {
                if self.pixels[(cy * CELL_H + py) * self.width + cx * CELL_W + px] {
                    pattern |= codec::pattern_bit(px, py);
                }
            }
        }
        Some(pattern)
    }

    /// Overwrite a cell's 2x4 pixel block from a packed pattern.
    pub fn set_cell_pattern(&mut self, cx: usize, cy: usize, pattern: u8) -> Result<()> {
        if cx >= self.cell_cols() || cy >= self.cell_rows() {
            return Err(CanvasError::OutOfBounds { x: cx, y: cy });
        }
        for px in 0..CELL_W {
            for py in 0..CELL_H {
                let on = pattern & codec::pattern_bit(px, py) != 0;
                self.pixels[(cy * CELL_H + py) * self.width + cx * CELL_W + px] = on;
            }
        }
        Ok(())
    }

    /// Glyph currently shown by a cell, `None` outside the grid.
    pub fn cell_glyph(&self, cx: usize, cy: usize) -> Option<char> {
        self.cell_pattern(cx, cy).map(codec::glyph_for_pattern)
    }

    /// Resize the canvas, keeping the overlapping top-left region.
    ///
    /// Pixels and cell colors inside the overlap are copied one-to-one, no
    /// resampling. Everything outside it starts at the mode defaults. On
    /// error the canvas is unchanged.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<()> {
        Self::check_dimensions(new_width, new_height)?;
        if new_width == self.width && new_height == self.height {
            return Ok(());
        }

        let mut pixels = vec![false; new_width * new_height];
        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                pixels[y * new_width + x] = self.pixels[y * self.width + x];
            }
        }

        let new_cols = new_width / CELL_W;
        let new_rows = new_height / CELL_H;
        let mut fg = vec![self.mode.default_fg(); new_cols * new_rows];
        let mut bg = vec![self.mode.default_bg(); new_cols * new_rows];
        for cy in 0..self.cell_rows().min(new_rows) {
            for cx in 0..self.cell_cols().min(new_cols) {
                let old_idx = cy * self.cell_cols() + cx;
                let new_idx = cy * new_cols + cx;
                fg[new_idx] = self.fg[old_idx];
                bg[new_idx] = self.bg[old_idx];
            }
        }

        log::debug!(
            "canvas resized {}x{} -> {}x{}",
            self.width,
            self.height,
            new_width,
            new_height
        );
        self.width = new_width;
        self.height = new_height;
        self.pixels = pixels;
        self.fg = fg;
        self.bg = bg;
        Ok(())
    }

    /// Turn every pixel off and reset all cell colors to the mode defaults.
    pub fn clear(&mut self) {
        self.pixels.fill(false);
        self.fg.fill(self.mode.default_fg());
        self.bg.fill(self.mode.default_bg());
    }

    /// Whether a value-preserving switch to `to` is possible right now.
    ///
    /// `None` means [`Canvas::convert_mode`] will succeed; otherwise the
    /// blocking reason for the caller's confirmation prompt.
    pub fn check_convert(&self, to: ColorMode) -> Option<ConvertBlocked> {
        can_convert(self.mode, to, &self.fg, &self.bg)
    }

    /// Switch palette depth, keeping every stored color value.
    pub fn convert_mode(&mut self, to: ColorMode) -> std::result::Result<(), ConvertBlocked> {
        if let Some(blocked) = self.check_convert(to) {
            return Err(blocked);
        }
        log::debug!("canvas mode {} -> {} (values preserved)", self.mode, to);
        self.mode = to;
        Ok(())
    }

    /// Switch palette depth discarding all colors.
    ///
    /// The confirmed path after [`Canvas::check_convert`] reported a
    /// blocked conversion. Pixels stay, both color planes reset to the new
    /// mode's defaults. History captured under the old mode is no longer
    /// applicable; callers drop it.
    pub fn force_mode(&mut self, to: ColorMode) {
        log::debug!("canvas mode {} -> {} (colors reset)", self.mode, to);
        self.mode = to;
        self.fg.fill(to.default_fg());
        self.bg.fill(to.default_bg());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_dimensions() {
        assert!(Canvas::new(2, 4, ColorMode::C16).is_ok());
        assert!(Canvas::new(80, 96, ColorMode::C256).is_ok());
        for (w, h) in [(0, 4), (2, 0), (3, 4), (2, 5), (1, 1)] {
            assert_eq!(
                Canvas::new(w, h, ColorMode::C16),
                Err(CanvasError::InvalidDimensions { width: w, height: h }),
                "{}x{} must be rejected",
                w,
                h
            );
        }
    }

    #[test]
    fn test_fresh_canvas_is_blank() {
        let canvas = Canvas::new(4, 8, ColorMode::C256).unwrap();
        assert_eq!(canvas.cell_cols(), 2);
        assert_eq!(canvas.cell_rows(), 2);
        assert_eq!(canvas.mode(), ColorMode::C256);
        for y in 0..8 {
            for x in 0..4 {
                assert_eq!(canvas.get_pixel(x, y), Some(false));
            }
        }
        for cy in 0..2 {
            for cx in 0..2 {
                assert_eq!(
                    canvas.get_cell_color(cx, cy),
                    Some((Color::Indexed(15), Color::Transparent))
                );
            }
        }
    }

    #[test]
    fn test_pixel_bounds() {
        let mut canvas = Canvas::new(4, 4, ColorMode::C16).unwrap();
        assert_eq!(canvas.get_pixel(4, 0), None);
        assert_eq!(canvas.get_pixel(0, 4), None);
        assert_eq!(
            canvas.set_pixel(4, 0, true),
            Err(CanvasError::OutOfBounds { x: 4, y: 0 })
        );
        canvas.set_pixel(3, 3, true).unwrap();
        assert_eq!(canvas.get_pixel(3, 3), Some(true));
    }

    #[test]
    fn test_cell_color_validation() {
        let mut canvas = Canvas::new(4, 8, ColorMode::C16).unwrap();
        assert_eq!(
            canvas.set_cell_color(2, 0, Color::Indexed(1), Color::Transparent),
            Err(CanvasError::OutOfBounds { x: 2, y: 0 })
        );
        assert_eq!(
            canvas.set_cell_color(0, 0, Color::Transparent, Color::Indexed(0)),
            Err(CanvasError::TransparentForeground)
        );
        assert_eq!(
            canvas.set_cell_color(0, 0, Color::Indexed(16), Color::Transparent),
            Err(CanvasError::ModeMismatch {
                mode: ColorMode::C16,
                color: Color::Indexed(16)
            })
        );
        assert_eq!(
            canvas.set_cell_color(0, 0, Color::Indexed(1), Color::Rgb(0, 0, 0)),
            Err(CanvasError::ModeMismatch {
                mode: ColorMode::C16,
                color: Color::Rgb(0, 0, 0)
            })
        );
        canvas
            .set_cell_color(1, 1, Color::Indexed(9), Color::Indexed(4))
            .unwrap();
        assert_eq!(
            canvas.get_cell_color(1, 1),
            Some((Color::Indexed(9), Color::Indexed(4)))
        );
    }

    #[test]
    fn test_cell_pattern_packing() {
        let mut canvas = Canvas::new(4, 8, ColorMode::C16).unwrap();
        // left column of cell (1, 1)
        for py in 0..4 {
            canvas.set_pixel(2, 4 + py, true).unwrap();
        }
        assert_eq!(canvas.cell_pattern(1, 1), Some(0x0F));
        assert_eq!(canvas.cell_glyph(1, 1), Some('\u{258C}'));
        // neighboring cells untouched
        assert_eq!(canvas.cell_pattern(0, 1), Some(0x00));
        assert_eq!(canvas.cell_pattern(1, 0), Some(0x00));
        assert_eq!(canvas.cell_pattern(2, 0), None);
    }

    #[test]
    fn test_set_cell_pattern_round_trip() {
        let mut canvas = Canvas::new(6, 8, ColorMode::C16).unwrap();
        canvas.set_cell_pattern(2, 1, 0xA5).unwrap();
        assert_eq!(canvas.cell_pattern(2, 1), Some(0xA5));
        // bit 0 = left top, bit 7 = right bottom
        assert_eq!(canvas.get_pixel(4, 4), Some(true));
        assert_eq!(canvas.get_pixel(4, 5), Some(false));
        assert_eq!(canvas.get_pixel(5, 7), Some(true));
        assert_eq!(
            canvas.set_cell_pattern(3, 0, 0xFF),
            Err(CanvasError::OutOfBounds { x: 3, y: 0 })
        );
    }

    #[test]
    fn test_resize_grow_preserves_content() {
        let mut canvas = Canvas::new(4, 4, ColorMode::C256).unwrap();
        canvas.set_pixel(3, 3, true).unwrap();
        canvas
            .set_cell_color(1, 0, Color::Indexed(100), Color::Indexed(20))
            .unwrap();
        canvas.resize(8, 8).unwrap();
        assert_eq!(canvas.get_pixel(3, 3), Some(true));
        assert_eq!(
            canvas.get_cell_color(1, 0),
            Some((Color::Indexed(100), Color::Indexed(20)))
        );
        // grown area is blank with default colors
        assert_eq!(canvas.get_pixel(7, 7), Some(false));
        assert_eq!(
            canvas.get_cell_color(3, 1),
            Some((Color::Indexed(15), Color::Transparent))
        );
    }

    #[test]
    fn test_resize_shrink_then_grow_loses_outside() {
        let mut canvas = Canvas::new(8, 8, ColorMode::C16).unwrap();
        canvas.set_pixel(1, 1, true).unwrap();
        canvas.set_pixel(7, 7, true).unwrap();
        canvas.resize(4, 4).unwrap();
        canvas.resize(8, 8).unwrap();
        assert_eq!(canvas.get_pixel(1, 1), Some(true), "overlap survives");
        assert_eq!(canvas.get_pixel(7, 7), Some(false), "cut area is gone");
    }

    #[test]
    fn test_resize_rejects_bad_dimensions() {
        let mut canvas = Canvas::new(4, 4, ColorMode::C16).unwrap();
        canvas.set_pixel(0, 0, true).unwrap();
        assert_eq!(
            canvas.resize(5, 4),
            Err(CanvasError::InvalidDimensions { width: 5, height: 4 })
        );
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.get_pixel(0, 0), Some(true));
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(4, 4, ColorMode::C16).unwrap();
        canvas.set_pixel(2, 2, true).unwrap();
        canvas
            .set_cell_color(0, 0, Color::Indexed(3), Color::Indexed(5))
            .unwrap();
        canvas.clear();
        assert_eq!(canvas.get_pixel(2, 2), Some(false));
        assert_eq!(
            canvas.get_cell_color(0, 0),
            Some((Color::Indexed(15), Color::Transparent))
        );
    }

    #[test]
    fn test_convert_mode_preserves_values() {
        let mut canvas = Canvas::new(4, 4, ColorMode::C16).unwrap();
        canvas
            .set_cell_color(0, 0, Color::Indexed(12), Color::Indexed(3))
            .unwrap();
        canvas.convert_mode(ColorMode::C256).unwrap();
        assert_eq!(canvas.mode(), ColorMode::C256);
        assert_eq!(
            canvas.get_cell_color(0, 0),
            Some((Color::Indexed(12), Color::Indexed(3)))
        );
        // narrowing back is still legal while all indices fit
        canvas.convert_mode(ColorMode::C16).unwrap();
        assert_eq!(canvas.mode(), ColorMode::C16);
    }

    #[test]
    fn test_convert_mode_blocked() {
        let mut canvas = Canvas::new(4, 4, ColorMode::C256).unwrap();
        canvas
            .set_cell_color(1, 0, Color::Indexed(42), Color::Transparent)
            .unwrap();
        assert_eq!(
            canvas.check_convert(ColorMode::C16),
            Some(ConvertBlocked::ValueOutOfRange { value: 42, max: 15 })
        );
        assert!(canvas.convert_mode(ColorMode::C16).is_err());
        assert_eq!(canvas.mode(), ColorMode::C256, "failed conversion is a no-op");
        assert!(canvas.convert_mode(ColorMode::Direct).is_err());
    }

    #[test]
    fn test_force_mode_resets_colors() {
        let mut canvas = Canvas::new(4, 4, ColorMode::C256).unwrap();
        canvas.set_pixel(1, 2, true).unwrap();
        canvas
            .set_cell_color(0, 0, Color::Indexed(42), Color::Indexed(17))
            .unwrap();
        canvas.force_mode(ColorMode::Direct);
        assert_eq!(canvas.mode(), ColorMode::Direct);
        assert_eq!(canvas.get_pixel(1, 2), Some(true), "pixels survive");
        assert_eq!(
            canvas.get_cell_color(0, 0),
            Some((Color::Rgb(255, 255, 255), Color::Transparent))
        );
    }
}
