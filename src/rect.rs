//! Cell-space and pixel-space rectangles.
//!
//! Pixel coordinates address the drawing surface, cell coordinates address
//! the character grid beneath it. Snapshots and repaints work on whole
//! cells, so pixel rectangles convert to the enclosing cell rectangle
//! before either happens.

use crate::codec::{CELL_H, CELL_W};

/// Rectangle in character-cell coordinates, `w` and `h` exclusive extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl CellRect {
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> CellRect {
        CellRect { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The part of this rectangle that lies on a `cols` x `rows` grid.
    pub fn clamped(self, cols: usize, rows: usize) -> CellRect {
        if self.x >= cols || self.y >= rows {
            return CellRect { x: self.x.min(cols), y: self.y.min(rows), w: 0, h: 0 };
        }
        CellRect {
            x: self.x,
            y: self.y,
            w: self.w.min(cols - self.x),
            h: self.h.min(rows - self.y),
        }
    }

    /// Pixel rectangle covering exactly these cells.
    pub fn to_pixels(self) -> PixelRect {
        PixelRect {
            x: self.x * CELL_W,
            y: self.y * CELL_H,
            w: self.w * CELL_W,
            h: self.h * CELL_H,
        }
    }
}

/// Rectangle in pixel coordinates, `w` and `h` exclusive extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl PixelRect {
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> PixelRect {
        PixelRect { x, y, w, h }
    }

    /// Rectangle spanning two corner pixels inclusively, in either order.
    pub fn from_corners(x0: usize, y0: usize, x1: usize, y1: usize) -> PixelRect {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        PixelRect {
            x: left,
            y: top,
            w: right - left + 1,
            h: bottom - top + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Whether `(px, py)` lies on one of the four one-pixel border strokes.
    ///
    /// For rectangles one pixel wide or tall every contained pixel is on a
    /// stroke, which is what an outline of such a rectangle should show.
    pub fn on_border(&self, px: usize, py: usize) -> bool {
        self.contains(px, py)
            && (px == self.x
                || py == self.y
                || px == self.x + self.w - 1
                || py == self.y + self.h - 1)
    }

    /// Smallest cell rectangle whose pixel coverage includes this one.
    pub fn enclosing_cells(self) -> CellRect {
        if self.is_empty() {
            return CellRect { x: self.x / CELL_W, y: self.y / CELL_H, w: 0, h: 0 };
        }
        let cx0 = self.x / CELL_W;
        let cy0 = self.y / CELL_H;
        let cx1 = (self.x + self.w - 1) / CELL_W;
        let cy1 = (self.y + self.h - 1) / CELL_H;
        CellRect {
            x: cx0,
            y: cy0,
            w: cx1 - cx0 + 1,
            h: cy1 - cy0 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        let r = CellRect::new(1, 2, 3, 4);
        assert_eq!(r.clamped(10, 10), r);
    }

    #[test]
    fn test_clamp_overhang() {
        let r = CellRect::new(8, 8, 5, 5);
        assert_eq!(r.clamped(10, 10), CellRect::new(8, 8, 2, 2));
    }

    #[test]
    fn test_clamp_fully_outside_is_empty() {
        let r = CellRect::new(12, 3, 2, 2);
        assert!(r.clamped(10, 10).is_empty());
        assert!(CellRect::new(0, 10, 1, 1).clamped(10, 10).is_empty());
    }

    #[test]
    fn test_from_corners_normalizes() {
        let a = PixelRect::from_corners(5, 9, 2, 3);
        let b = PixelRect::from_corners(2, 3, 5, 9);
        assert_eq!(a, b);
        assert_eq!(a, PixelRect::new(2, 3, 4, 7));
        assert_eq!(PixelRect::from_corners(4, 4, 4, 4), PixelRect::new(4, 4, 1, 1));
    }

    #[test]
    fn test_enclosing_cells_aligned() {
        let r = PixelRect::new(2, 4, 4, 8);
        assert_eq!(r.enclosing_cells(), CellRect::new(1, 1, 2, 2));
    }

    #[test]
    fn test_enclosing_cells_straddling() {
        // one pixel into each neighboring cell on every side
        let r = PixelRect::new(1, 3, 3, 3);
        assert_eq!(r.enclosing_cells(), CellRect::new(0, 0, 2, 2));
    }

    #[test]
    fn test_enclosing_cells_single_pixel() {
        let r = PixelRect::new(3, 7, 1, 1);
        assert_eq!(r.enclosing_cells(), CellRect::new(1, 1, 1, 1));
    }

    #[test]
    fn test_cells_to_pixels_round_trip() {
        let cells = CellRect::new(2, 1, 3, 2);
        assert_eq!(cells.to_pixels(), PixelRect::new(4, 4, 6, 8));
        assert_eq!(cells.to_pixels().enclosing_cells(), cells);
    }

    #[test]
    fn test_border_of_wide_rect() {
        let r = PixelRect::new(1, 1, 4, 3);
        assert!(r.on_border(1, 1)); // corner
        assert!(r.on_border(2, 1)); // top edge
        assert!(r.on_border(1, 2)); // left edge
        assert!(r.on_border(4, 3)); // opposite corner
        assert!(!r.on_border(2, 2)); // interior
        assert!(!r.on_border(0, 0)); // outside
    }

    #[test]
    fn test_border_of_degenerate_rects() {
        // one pixel wide: every contained pixel is border
        let thin = PixelRect::new(3, 0, 1, 5);
        for py in 0..5 {
            assert!(thin.on_border(3, py));
        }
        // one pixel tall
        let flat = PixelRect::new(0, 2, 6, 1);
        for px in 0..6 {
            assert!(flat.on_border(px, 2));
        }
        // single pixel
        assert!(PixelRect::new(2, 2, 1, 1).on_border(2, 2));
    }
}
