//! Image persistence as literal terminal escape text.
//!
//! A saved image is exactly what painting the canvas would send to a
//! terminal, minus cursor movement: rows of octant glyphs with SGR color
//! changes in front of them and a reset at every row end. `cat`-ing a
//! saved file renders it. Loading parses those same sequences back, and
//! nothing else; input outside that grammar is an error, not something to
//! skip over.

mod load;
mod save;

pub use load::{load_canvas, load_canvas_from};
pub use save::{save_canvas, save_canvas_to};

use std::fmt;
use std::io;

/// What a saved image carries besides the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveVariant {
    /// Color sequences plus glyphs. Loads back with full fidelity.
    WithColor,
    /// Glyphs and newlines only. Loads back with default colors.
    GlyphsOnly,
}

/// Errors from saving or loading image files.
#[derive(Debug)]
pub enum PersistError {
    /// A printable character in the input is not an octant glyph.
    UnknownGlyph { glyph: char, row: usize, col: usize },
    /// The input mixes palette and direct-color sequences.
    MixedColorModes,
    /// The input contains a sequence the save format never emits.
    UnsupportedSequence { found: String },
    /// The input contains no glyphs at all.
    EmptyImage,
    /// Reading or writing the file failed.
    Io(io::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::UnknownGlyph { glyph, row, col } => write!(
                f,
                "character {:?} at row {}, column {} is not an octant glyph",
                glyph, row, col
            ),
            PersistError::MixedColorModes => {
                write!(f, "image mixes palette and direct-color sequences")
            }
            PersistError::UnsupportedSequence { found } => {
                write!(f, "image contains {}, which the save format never emits", found)
            }
            PersistError::EmptyImage => write!(f, "image contains no glyphs"),
            PersistError::Io(err) => write!(f, "image file i/o failed: {}", err),
        }
    }
}

impl std::error::Error for PersistError {}

impl From<io::Error> for PersistError {
    fn from(err: io::Error) -> Self {
        PersistError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
