//! Bounded undo/redo over rectangular snapshots.
//!
//! Edits copy the cells they are about to touch into a [`DataRect`] before
//! mutating the canvas. Undo pops the latest snapshot, saves the current
//! content of the same rectangle for redo, and puts the old content back;
//! redo mirrors it. Both stacks are bounded and drop their oldest entry
//! when full. A [`DataRect`] is also the clipboard payload: copying a
//! selection and pasting it elsewhere go through the same capture and
//! apply paths.

use crate::canvas::Canvas;
use crate::codec::{CELL_H, CELL_W};
use crate::color::{Color, ColorMode};
use crate::rect::{CellRect, PixelRect};
use std::collections::VecDeque;

/// Default number of undo steps kept.
pub const DEFAULT_UNDO_LEVELS: usize = 100;

/// Owned copy of a rectangle of canvas content.
///
/// Holds the pixels and both color planes for a cell rectangle, detached
/// from the canvas they came from, plus the mode they were captured under.
#[derive(Debug, Clone)]
pub struct DataRect {
    /// Cell rectangle this data covers.
    rect: CellRect,
    /// Pixels, row-major, `rect.w * 2` wide by `rect.h * 4` tall.
    pixels: Vec<bool>,
    /// Foreground per cell, row-major.
    fg: Vec<Color>,
    /// Background per cell, row-major.
    bg: Vec<Color>,
    /// Color mode at capture time.
    mode: ColorMode,
    /// Whether the rectangle covered the entire canvas at capture time.
    whole: bool,
}

impl DataRect {
    /// Capture `rect` (clamped to the canvas) from `canvas`.
    ///
    /// Covering the whole canvas takes a bulk-clone fast path that skips
    /// the per-row repacking.
    pub fn copy_from(canvas: &Canvas, rect: CellRect) -> DataRect {
        let rect = rect.clamped(canvas.cell_cols(), canvas.cell_rows());
        let whole = rect.x == 0
            && rect.y == 0
            && rect.w == canvas.cell_cols()
            && rect.h == canvas.cell_rows();
        if whole {
            return DataRect {
                rect,
                pixels: canvas.pixels.clone(),
                fg: canvas.fg.clone(),
                bg: canvas.bg.clone(),
                mode: canvas.mode,
                whole,
            };
        }

        let pw = rect.w * CELL_W;
        let mut pixels = Vec::with_capacity(pw * rect.h * CELL_H);
        for py in 0..rect.h * CELL_H {
            let start = (rect.y * CELL_H + py) * canvas.width + rect.x * CELL_W;
            pixels.extend_from_slice(&canvas.pixels[start..start + pw]);
        }
        let mut fg = Vec::with_capacity(rect.w * rect.h);
        let mut bg = Vec::with_capacity(rect.w * rect.h);
        for cy in 0..rect.h {
            let start = (rect.y + cy) * canvas.cell_cols() + rect.x;
            fg.extend_from_slice(&canvas.fg[start..start + rect.w]);
            bg.extend_from_slice(&canvas.bg[start..start + rect.w]);
        }
        DataRect {
            rect,
            pixels,
            fg,
            bg,
            mode: canvas.mode,
            whole: false,
        }
    }

    /// Cell rectangle this data was captured from.
    pub fn rect(&self) -> CellRect {
        self.rect
    }

    /// Whether the capture covered the entire canvas.
    pub fn is_whole_buffer(&self) -> bool {
        self.whole
    }

    /// Color mode the data was captured under.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Write the data back where it came from.
    ///
    /// Returns the cell rectangle actually touched, for repainting, or
    /// `None` when nothing was applied.
    pub fn apply(&self, canvas: &mut Canvas) -> Option<CellRect> {
        self.apply_at(canvas, self.rect.x, self.rect.y)
    }

    /// Write the data at a different top-left corner, the paste path.
    ///
    /// The target is clamped to the canvas; rows and columns falling
    /// outside are dropped. A snapshot captured under a different color
    /// mode is refused, since its values may not exist in the canvas's
    /// current palette.
    pub fn apply_at(&self, canvas: &mut Canvas, cx: usize, cy: usize) -> Option<CellRect> {
        if self.mode != canvas.mode() {
            log::warn!(
                "refusing to apply snapshot captured in {} onto {} canvas",
                self.mode,
                canvas.mode()
            );
            return None;
        }
        if self.rect.is_empty() {
            return None;
        }
        if self.whole
            && cx == 0
            && cy == 0
            && canvas.cell_cols() == self.rect.w
            && canvas.cell_rows() == self.rect.h
        {
            canvas.pixels.clone_from(&self.pixels);
            canvas.fg.clone_from(&self.fg);
            canvas.bg.clone_from(&self.bg);
            return Some(self.rect);
        }

        let target = CellRect::new(cx, cy, self.rect.w, self.rect.h)
            .clamped(canvas.cell_cols(), canvas.cell_rows());
        if target.is_empty() {
            return None;
        }
        if target.w < self.rect.w || target.h < self.rect.h {
            log::warn!(
                "snapshot apply clamped to {}x{} of {}x{} cells",
                target.w,
                target.h,
                self.rect.w,
                self.rect.h
            );
        }

        let src_pw = self.rect.w * CELL_W;
        let dst_pw = target.w * CELL_W;
        for py in 0..target.h * CELL_H {
            let dst = (target.y * CELL_H + py) * canvas.width + target.x * CELL_W;
            let src = py * src_pw;
            canvas.pixels[dst..dst + dst_pw].copy_from_slice(&self.pixels[src..src + dst_pw]);
        }
        for row in 0..target.h {
            let dst = (target.y + row) * canvas.cell_cols() + target.x;
            let src = row * self.rect.w;
            canvas.fg[dst..dst + target.w].copy_from_slice(&self.fg[src..src + target.w]);
            canvas.bg[dst..dst + target.w].copy_from_slice(&self.bg[src..src + target.w]);
        }
        Some(target)
    }
}

/// Bounded undo and redo stacks of [`DataRect`] snapshots.
#[derive(Debug)]
pub struct History {
    /// Undo entries, oldest first.
    undo: VecDeque<DataRect>,
    /// Redo entries, oldest first.
    redo: VecDeque<DataRect>,
    /// Maximum entries kept per stack.
    levels: usize,
}

impl History {
    /// Create a history keeping up to `levels` steps per direction.
    pub fn new(levels: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            levels,
        }
    }

    /// Create a history with the default depth.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_UNDO_LEVELS)
    }

    /// Snapshot the cells an edit inside `touched` is about to change.
    ///
    /// Call before mutating the canvas. The pixel rectangle widens to the
    /// enclosing cell rectangle, because undo restores whole cells. Any
    /// new edit makes the redo stack meaningless and clears it.
    pub fn snapshot_before_edit(&mut self, canvas: &Canvas, touched: PixelRect) {
        let cells = touched
            .enclosing_cells()
            .clamped(canvas.cell_cols(), canvas.cell_rows());
        if cells.is_empty() {
            return;
        }
        Self::push_bounded(&mut self.undo, self.levels, DataRect::copy_from(canvas, cells));
        self.redo.clear();
    }

    /// Undo the most recent edit.
    ///
    /// Returns the cell rectangle to repaint, or `None` when there is
    /// nothing to undo. The pre-undo content of the same rectangle moves
    /// to the redo stack.
    pub fn undo(&mut self, canvas: &mut Canvas) -> Option<CellRect> {
        let entry = self.undo.pop_back()?;
        let current = DataRect::copy_from(canvas, entry.rect());
        if !current.rect().is_empty() {
            Self::push_bounded(&mut self.redo, self.levels, current);
        }
        entry.apply(canvas)
    }

    /// Redo the most recently undone edit.
    pub fn redo(&mut self, canvas: &mut Canvas) -> Option<CellRect> {
        let entry = self.redo.pop_back()?;
        let current = DataRect::copy_from(canvas, entry.rect());
        if !current.rect().is_empty() {
            Self::push_bounded(&mut self.undo, self.levels, current);
        }
        entry.apply(canvas)
    }

    /// Drop both stacks.
    ///
    /// Required after a mode conversion: snapshots captured under the old
    /// mode no longer apply.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Number of undoable steps currently held.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of redoable steps currently held.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Configured per-stack capacity.
    pub fn levels(&self) -> usize {
        self.levels
    }

    fn push_bounded(stack: &mut VecDeque<DataRect>, levels: usize, entry: DataRect) {
        stack.push_back(entry);
        while stack.len() > levels {
            stack.pop_front();
        }
    }
}
