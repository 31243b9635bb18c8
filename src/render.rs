//! Painting canvas regions through a [`TermWriter`].
//!
//! The renderer walks cells, sends the per-cell colors through the writer's
//! diffing, and emits one glyph per cell. The cursor moves once per row;
//! columns inside a row print sequentially. The outline painter overlays
//! selection and cursor boxes by flipping the border pixels of the cells a
//! highlight rectangle's edges cross, leaving interior cells alone.

use crate::canvas::Canvas;
use crate::codec::{self, CELL_H, CELL_W};
use crate::rect::{CellRect, PixelRect};
use crate::writer::TermWriter;
use bitflags::bitflags;
use std::io::{self, Write};

bitflags! {
    /// Border strokes of a highlight rectangle crossing one cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// Which of a highlight rectangle's border strokes pass through cell
/// `(cx, cy)`. Empty for cells the outline does not touch, including
/// interior cells.
///
/// A rectangle narrower than a cell puts LEFT and RIGHT in the same cell,
/// and likewise TOP and BOTTOM for one shorter than a cell.
pub fn edges_for_cell(cx: usize, cy: usize, highlight: &PixelRect) -> Edges {
    if highlight.is_empty() {
        return Edges::empty();
    }
    let x0 = cx * CELL_W;
    let x1 = x0 + CELL_W - 1;
    let y0 = cy * CELL_H;
    let y1 = y0 + CELL_H - 1;
    let hx1 = highlight.x + highlight.w - 1;
    let hy1 = highlight.y + highlight.h - 1;
    if highlight.x > x1 || hx1 < x0 || highlight.y > y1 || hy1 < y0 {
        return Edges::empty();
    }
    let mut edges = Edges::empty();
    if highlight.y >= y0 && highlight.y <= y1 {
        edges |= Edges::TOP;
    }
    if hy1 >= y0 && hy1 <= y1 {
        edges |= Edges::BOTTOM;
    }
    if highlight.x >= x0 && highlight.x <= x1 {
        edges |= Edges::LEFT;
    }
    if hx1 >= x0 && hx1 <= x1 {
        edges |= Edges::RIGHT;
    }
    edges
}

/// Pattern bits of cell `(cx, cy)` lying on the highlight's border.
fn border_mask(cx: usize, cy: usize, highlight: &PixelRect) -> u8 {
    let mut mask = 0u8;
    for px in 0..CELL_W {
        for py in 0..CELL_H {
            if highlight.on_border(cx * CELL_W + px, cy * CELL_H + py) {
                mask |= codec::pattern_bit(px, py);
            }
        }
    }
    mask
}

/// Paints canvas content at a fixed screen offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    /// Screen column of canvas cell (0, 0).
    pub origin_x: usize,
    /// Screen row of canvas cell (0, 0).
    pub origin_y: usize,
}

impl Renderer {
    pub fn new(origin_x: usize, origin_y: usize) -> Self {
        Self { origin_x, origin_y }
    }

    /// Repaint a rectangle of cells, clamped to the canvas.
    ///
    /// One cursor move per row; within a row the writer's color diffing
    /// keeps runs of same-colored cells down to bare glyphs.
    pub fn paint_region<W: Write>(
        &self,
        w: &mut TermWriter<W>,
        canvas: &Canvas,
        rect: CellRect,
    ) -> io::Result<()> {
        let rect = rect.clamped(canvas.cell_cols(), canvas.cell_rows());
        if rect.is_empty() {
            return Ok(());
        }
        let cols = canvas.cell_cols();
        for cy in rect.y..rect.y + rect.h {
            w.send_pos(self.origin_x + rect.x, self.origin_y + cy)?;
            for cx in rect.x..rect.x + rect.w {
                if let Some(glyph) = canvas.cell_glyph(cx, cy) {
                    let idx = cy * cols + cx;
                    w.send_bg(canvas.bg[idx])?;
                    w.send_fg(canvas.fg[idx])?;
                    w.put_char(glyph)?;
                }
            }
        }
        Ok(())
    }

    /// Repaint the one cell containing nothing but its own state, the
    /// common refresh after a single pixel or color edit.
    pub fn paint_cell<W: Write>(
        &self,
        w: &mut TermWriter<W>,
        canvas: &Canvas,
        cx: usize,
        cy: usize,
    ) -> io::Result<()> {
        self.paint_region(w, canvas, CellRect::new(cx, cy, 1, 1))
    }

    /// Overlay or clear a highlight rectangle's outline.
    ///
    /// With `invert` set, every cell one of the highlight's border strokes
    /// crosses is repainted with those border pixels flipped. With it
    /// clear, the same cells are repainted as the canvas has them, erasing
    /// a previous overlay. Cells the border does not cross are never
    /// touched.
    pub fn paint_outline<W: Write>(
        &self,
        w: &mut TermWriter<W>,
        canvas: &Canvas,
        highlight: PixelRect,
        invert: bool,
    ) -> io::Result<()> {
        let cells = highlight
            .enclosing_cells()
            .clamped(canvas.cell_cols(), canvas.cell_rows());
        if cells.is_empty() {
            return Ok(());
        }
        let cols = canvas.cell_cols();
        for cy in cells.y..cells.y + cells.h {
            for cx in cells.x..cells.x + cells.w {
                let edges = edges_for_cell(cx, cy, &highlight);
                if edges.is_empty() {
                    continue;
                }
                if let Some(pattern) = canvas.cell_pattern(cx, cy) {
                    let mask = if invert { border_mask(cx, cy, &highlight) } else { 0 };
                    let idx = cy * cols + cx;
                    w.send_pos(self.origin_x + cx, self.origin_y + cy)?;
                    w.send_bg(canvas.bg[idx])?;
                    w.send_fg(canvas.fg[idx])?;
                    w.put_char(codec::glyph_for_pattern(pattern ^ mask))?;
                }
            }
        }
        Ok(())
    }
}

/// Reverse-video status line at screen row `row`.
pub fn paint_status<W: Write>(w: &mut TermWriter<W>, row: usize, text: &str) -> io::Result<()> {
    w.send_pos(0, row)?;
    w.send_normal()?;
    w.send_reverse()?;
    w.put_str(text)?;
    w.force_normal()
}
