//! Stateful, diffing escape-sequence emitter.
//!
//! Every byte the engine sends at a terminal or into a save buffer goes
//! through a [`TermWriter`]. The writer remembers the colors it last
//! emitted and suppresses sends that would not change anything, so painting
//! a run of same-colored cells costs one escape sequence, not one per cell.
//!
//! Two behaviors share the type. A terminal writer starts knowing nothing
//! and treats the foreground as unknown again after every reset, because
//! the terminal's default foreground is whatever the user's theme says. A
//! file writer owns its whole stream, so resets land on the file-format
//! defaults and default-colored cells cost nothing. Backgrounds are simpler
//! in both: a reset always leaves no background override, which is exactly
//! the transparent state.

use crate::color::{Color, ColorMode};
use std::io::{self, Write};

const RESET: &[u8] = b"\x1b[0m";

/// Diffing writer over any byte sink.
#[derive(Debug)]
pub struct TermWriter<W: Write> {
    out: W,
    /// Foreground the sink currently shows, `None` when unknown.
    fg: Option<Color>,
    /// Background the sink currently shows, `None` when unknown.
    /// `Some(Transparent)` means no override is active.
    bg: Option<Color>,
    /// Whether the sink is in the reset attribute state.
    normal: bool,
    /// Foreground a reset restores, known only for file output.
    file_default_fg: Option<Color>,
}

impl<W: Write> TermWriter<W> {
    /// Writer for a live terminal. Starts with everything unknown, so the
    /// first sends always emit.
    pub fn new(out: W) -> Self {
        Self {
            out,
            fg: None,
            bg: None,
            normal: false,
            file_default_fg: None,
        }
    }

    /// Writer for a save buffer in the given color mode.
    ///
    /// A reader of the stream starts from the reset state, so the writer
    /// does too: the mode's default foreground over a transparent
    /// background, with nothing emitted yet.
    pub fn for_file(out: W, mode: ColorMode) -> Self {
        Self {
            out,
            fg: Some(mode.default_fg()),
            bg: Some(Color::Transparent),
            normal: true,
            file_default_fg: Some(mode.default_fg()),
        }
    }

    fn settle_reset(&mut self) {
        self.normal = true;
        self.fg = self.file_default_fg;
        self.bg = Some(Color::Transparent);
    }

    /// Drop all attributes unless the sink is already in that state.
    pub fn send_normal(&mut self) -> io::Result<()> {
        if self.normal {
            return Ok(());
        }
        self.force_normal()
    }

    /// Drop all attributes unconditionally.
    ///
    /// Row ends in save output reset even when nothing was emitted, and a
    /// caller that wrote to the terminal outside this writer can use this
    /// to resynchronize.
    pub fn force_normal(&mut self) -> io::Result<()> {
        self.out.write_all(RESET)?;
        self.settle_reset();
        Ok(())
    }

    /// Emit a foreground change if `color` is not already active.
    pub fn send_fg(&mut self, color: Color) -> io::Result<()> {
        debug_assert!(!color.is_transparent(), "foreground cannot be transparent");
        if color.is_transparent() || self.fg == Some(color) {
            return Ok(());
        }
        match color {
            Color::Indexed(n) if n <= 7 => write!(self.out, "\x1b[3{}m", n)?,
            Color::Indexed(n) if n <= 15 => write!(self.out, "\x1b[9{}m", n - 8)?,
            Color::Indexed(n) => write!(self.out, "\x1b[38;5;{}m", n)?,
            Color::Rgb(r, g, b) => write!(self.out, "\x1b[38;2;{};{};{}m", r, g, b)?,
            Color::Transparent => {}
        }
        self.fg = Some(color);
        self.normal = false;
        Ok(())
    }

    /// Emit a background change if `color` is not already active.
    ///
    /// A transparent background has no escape sequence of its own. When an
    /// override might be active it goes through a full reset, which also
    /// drops the cached foreground, so the caller's next
    /// [`TermWriter::send_fg`] is never skipped. Once the sink is known to
    /// have no override, further transparent requests are free even after
    /// foreground changes.
    pub fn send_bg(&mut self, color: Color) -> io::Result<()> {
        if self.bg == Some(color) {
            return Ok(());
        }
        if color.is_transparent() {
            return self.force_normal();
        }
        match color {
            Color::Indexed(n) if n <= 7 => write!(self.out, "\x1b[4{}m", n)?,
            Color::Indexed(n) if n <= 15 => write!(self.out, "\x1b[10{}m", n - 8)?,
            Color::Indexed(n) => write!(self.out, "\x1b[48;5;{}m", n)?,
            Color::Rgb(r, g, b) => write!(self.out, "\x1b[48;2;{};{};{}m", r, g, b)?,
            Color::Transparent => {}
        }
        self.bg = Some(color);
        self.normal = false;
        Ok(())
    }

    /// Place the cursor at screen cell `(x, y)`, zero-based.
    ///
    /// Always emitted. Terminals cannot be asked where the cursor is, so
    /// there is nothing to diff against.
    pub fn send_pos(&mut self, x: usize, y: usize) -> io::Result<()> {
        write!(self.out, "\x1b[{};{}H", y + 1, x + 1)
    }

    /// Turn on reverse video, used for status-line highlighting.
    pub fn send_reverse(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[7m")?;
        self.normal = false;
        Ok(())
    }

    /// Write a glyph. Attribute state is unaffected.
    pub fn put_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())
    }

    /// Write literal text. Attribute state is unaffected.
    pub fn put_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
