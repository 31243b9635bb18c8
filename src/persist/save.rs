//! Writing a canvas out as renderable escape text.

use std::fs;
use std::path::Path;

use crate::canvas::Canvas;
use crate::writer::TermWriter;

use super::{Result, SaveVariant};

/// Serialize `canvas` into the text form of `variant`.
///
/// With color, the output is a whole-canvas repaint without cursor
/// movement: per cell a background change, a foreground change, and the
/// glyph, with every row ending in a forced reset and a newline. The
/// writer diffs against the previous cell, and each row starts from the
/// file-default state, so cells holding default colors emit no escapes
/// at all and a blank canvas saves as bare glyph rows.
pub fn save_canvas(canvas: &Canvas, variant: SaveVariant) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    match variant {
        SaveVariant::WithColor => {
            let mut w = TermWriter::for_file(&mut buf, canvas.mode());
            for cy in 0..canvas.cell_rows() {
                for cx in 0..canvas.cell_cols() {
                    if let Some((fg, bg)) = canvas.get_cell_color(cx, cy) {
                        // background first: a transparent one resets both
                        w.send_bg(bg)?;
                        w.send_fg(fg)?;
                    }
                    if let Some(glyph) = canvas.cell_glyph(cx, cy) {
                        w.put_char(glyph)?;
                    }
                }
                w.force_normal()?;
                w.put_str("\n")?;
            }
            w.flush()?;
        }
        SaveVariant::GlyphsOnly => {
            for cy in 0..canvas.cell_rows() {
                for cx in 0..canvas.cell_cols() {
                    if let Some(glyph) = canvas.cell_glyph(cx, cy) {
                        let mut utf8 = [0u8; 4];
                        buf.extend_from_slice(glyph.encode_utf8(&mut utf8).as_bytes());
                    }
                }
                buf.push(b'\n');
            }
        }
    }
    let text = String::from_utf8_lossy(&buf).into_owned();
    log::debug!(
        "serialized {}x{} {} canvas into {} bytes",
        canvas.width(),
        canvas.height(),
        canvas.mode(),
        text.len()
    );
    Ok(text)
}

/// Serialize `canvas` and write it to `path`.
pub fn save_canvas_to(path: &Path, canvas: &Canvas, variant: SaveVariant) -> Result<()> {
    let text = save_canvas(canvas, variant)?;
    fs::write(path, &text)?;
    log::debug!("saved {} canvas to {}", canvas.mode(), path.display());
    Ok(())
}
