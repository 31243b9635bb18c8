//! Color model shared by the canvas, writer, and persistence codec.
//!
//! A canvas runs in one of three palette depths. Paletted cells store
//! indices, direct-color cells store RGB triples, and a background may
//! additionally be [`Color::Transparent`], meaning no background override
//! is emitted and the terminal's own background shows through. Foregrounds
//! are never transparent.

use std::fmt;

/// Palette depth a canvas operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 16-color palette, indices 0..=15.
    C16,
    /// 256-color palette, indices 0..=255.
    C256,
    /// 24-bit direct RGB.
    Direct,
}

impl ColorMode {
    /// Deepest mode a terminal advertising `count` colors can display.
    pub fn from_color_count(count: u32) -> ColorMode {
        if count >= 1 << 24 {
            ColorMode::Direct
        } else if count >= 256 {
            ColorMode::C256
        } else {
            ColorMode::C16
        }
    }

    /// Default foreground for a fresh canvas in this mode.
    pub fn default_fg(self) -> Color {
        match self {
            ColorMode::C16 | ColorMode::C256 => Color::Indexed(15),
            ColorMode::Direct => Color::Rgb(255, 255, 255),
        }
    }

    /// Default background for a fresh canvas.
    ///
    /// Transparent in every mode: untouched cells render on whatever
    /// background the terminal already has.
    pub fn default_bg(self) -> Color {
        Color::Transparent
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::C16 => write!(f, "16-color"),
            ColorMode::C256 => write!(f, "256-color"),
            ColorMode::Direct => write!(f, "direct-color"),
        }
    }
}

/// A single cell color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Palette index, valid range depending on [`ColorMode`].
    Indexed(u8),
    /// Direct RGB triple.
    Rgb(u8, u8, u8),
    /// No background override. Never valid as a foreground.
    Transparent,
}

impl Color {
    /// Whether this value is storable under `mode`.
    ///
    /// Transparent fits every mode; the foreground-specific rejection of
    /// transparency is the canvas setter's job.
    pub fn fits(self, mode: ColorMode) -> bool {
        match (self, mode) {
            (Color::Transparent, _) => true,
            (Color::Indexed(idx), ColorMode::C16) => idx <= 15,
            (Color::Indexed(_), ColorMode::C256) => true,
            (Color::Rgb(..), ColorMode::Direct) => true,
            _ => false,
        }
    }

    /// True for the transparent background sentinel.
    pub fn is_transparent(self) -> bool {
        matches!(self, Color::Transparent)
    }
}

/// Why a mode conversion was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertBlocked {
    /// Conversions to or from direct color have no value-preserving
    /// mapping and always need explicit confirmation.
    DirectConversion { from: ColorMode, to: ColorMode },
    /// A stored palette index does not exist in the destination palette.
    ValueOutOfRange { value: u8, max: u8 },
}

impl fmt::Display for ConvertBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertBlocked::DirectConversion { from, to } => {
                write!(f, "no value-preserving conversion from {} to {}", from, to)
            }
            ConvertBlocked::ValueOutOfRange { value, max } => {
                write!(f, "palette index {} exceeds destination maximum {}", value, max)
            }
        }
    }
}

impl std::error::Error for ConvertBlocked {}

/// Checks whether the colors stored in `fg` and `bg` can move from mode
/// `from` to mode `to` without changing any value.
///
/// Returns `None` when the conversion is legal, otherwise the first
/// blocking reason. Transparent backgrounds never block anything.
pub fn can_convert(
    from: ColorMode,
    to: ColorMode,
    fg: &[Color],
    bg: &[Color],
) -> Option<ConvertBlocked> {
    if from == to {
        return None;
    }
    if from == ColorMode::Direct || to == ColorMode::Direct {
        return Some(ConvertBlocked::DirectConversion { from, to });
    }
    if from == ColorMode::C256 && to == ColorMode::C16 {
        for &color in fg.iter().chain(bg.iter()) {
            if let Color::Indexed(value) = color {
                if value > 15 {
                    return Some(ConvertBlocked::ValueOutOfRange { value, max: 15 });
                }
            }
        }
    }
    None
}
