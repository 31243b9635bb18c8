//! A terminal pixel-art canvas engine built on Unicode octant glyphs
//!
//! Each character cell carries a 2x4 block of pixels, drawn with the
//! Symbols for Legacy Computing octant glyphs, plus one foreground and
//! one background color. The library covers everything a terminal
//! drawing program needs short of its interactive shell:
//!
//! ## Canvas
//! - Pixel get/set over a cell-aligned buffer
//! - Per-cell foreground/background colors with a transparent background
//! - Resizing that keeps overlapping content
//!
//! ## Color
//! - 16-color, 256-color, and direct RGB palettes
//! - Lossless mode conversion with an explicit legality check
//! - Forced conversion that resets colors instead of quantizing
//!
//! ## Terminal output
//! - A diffing escape-sequence writer that skips redundant SGR changes
//! - Region, cell, and selection-outline repaints
//! - A reverse-video status line
//!
//! ## Persistence
//! - Images saved as literal escape text, viewable with `cat`
//! - Bit-exact round-trips through a strict `vte`-based loader
//! - A glyphs-only variant for colorless exports
//!
//! ## Editing
//! - Bounded undo/redo over rectangular snapshots
//! - Copy/paste through the same snapshot type
//! - A cooperative interrupt flag for abandoning long repaints
//!
//! ```
//! use octadraw_core::{Canvas, ColorMode, SaveVariant};
//!
//! let mut canvas = Canvas::new(4, 8, ColorMode::C16)?;
//! canvas.set_pixel(0, 0, true)?;
//! let text = octadraw_core::save_canvas(&canvas, SaveVariant::WithColor)?;
//! let reloaded = octadraw_core::load_canvas(&text)?;
//! assert_eq!(reloaded.get_pixel(0, 0), Some(true));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod canvas;
pub mod codec;
pub mod color;
pub mod history;
pub mod interrupt;
pub mod persist;
pub mod rect;
pub mod render;
pub mod writer;

pub use canvas::{Canvas, CanvasError};
pub use codec::{glyph_for_pattern, pattern_for_glyph, CELL_H, CELL_W};
pub use color::{can_convert, Color, ColorMode, ConvertBlocked};
pub use history::{DataRect, History, DEFAULT_UNDO_LEVELS};
pub use interrupt::Interrupt;
pub use persist::{
    load_canvas, load_canvas_from, save_canvas, save_canvas_to, PersistError, SaveVariant,
};
pub use rect::{CellRect, PixelRect};
pub use render::{paint_status, Edges, Renderer};
pub use writer::TermWriter;
