//! A drawing session end to end: paint, snapshot, undo, redo, repaint.
//!
//! Tests cover:
//! - History snapshots wrapped around freehand edits
//! - Repaints driven by the rectangles undo and redo report
//! - Copy/paste through the snapshot type
//! - The interrupt flag inside a row-by-row repaint loop
//! - The status line around a save

use octadraw_core::{
    paint_status, save_canvas, Canvas, CellRect, Color, ColorMode, DataRect, History, Interrupt,
    PixelRect, Renderer, SaveVariant, TermWriter,
};

/// 8x4 cells, 256-color, blank.
fn session_canvas() -> Canvas {
    Canvas::new(16, 16, ColorMode::C256).unwrap()
}

#[test_log::test]
fn test_draw_undo_redo_repaint() {
    let mut canvas = session_canvas();
    let mut history = History::with_defaults();
    let renderer = Renderer::new(0, 0);

    // freehand stroke down the diagonal
    history.snapshot_before_edit(&canvas, PixelRect::from_corners(0, 0, 9, 9));
    for i in 0..10 {
        canvas.set_pixel(i, i, true).unwrap();
    }
    // recolor the first cell
    history.snapshot_before_edit(&canvas, CellRect::new(0, 0, 1, 1).to_pixels());
    canvas
        .set_cell_color(0, 0, Color::Indexed(202), Color::Indexed(20))
        .unwrap();

    // undo the recolor, then the stroke, repainting what each reports
    let mut screen: Vec<u8> = Vec::new();
    let mut w = TermWriter::new(&mut screen);

    let touched = history.undo(&mut canvas).unwrap();
    assert_eq!(touched, CellRect::new(0, 0, 1, 1));
    assert_eq!(
        canvas.get_cell_color(0, 0),
        Some((Color::Indexed(15), Color::Transparent))
    );
    assert_eq!(canvas.get_pixel(5, 5), Some(true), "pixels outlive the recolor undo");
    renderer.paint_region(&mut w, &canvas, touched).unwrap();

    let touched = history.undo(&mut canvas).unwrap();
    assert_eq!(touched, CellRect::new(0, 0, 5, 3));
    assert_eq!(canvas.get_pixel(5, 5), Some(false));
    renderer.paint_region(&mut w, &canvas, touched).unwrap();
    assert!(history.undo(&mut canvas).is_none());

    // redo both
    assert_eq!(history.redo(&mut canvas), Some(CellRect::new(0, 0, 5, 3)));
    assert_eq!(canvas.get_pixel(5, 5), Some(true));
    assert_eq!(history.redo(&mut canvas), Some(CellRect::new(0, 0, 1, 1)));
    assert_eq!(
        canvas.get_cell_color(0, 0),
        Some((Color::Indexed(202), Color::Indexed(20)))
    );
    assert!(history.redo(&mut canvas).is_none());
    assert!(!screen.is_empty());

    // a single-cell repaint of the restored cell, byte for byte
    let mut out: Vec<u8> = Vec::new();
    let mut w = TermWriter::new(&mut out);
    renderer.paint_cell(&mut w, &canvas, 0, 0).unwrap();
    let glyph = canvas.cell_glyph(0, 0).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("\x1b[1;1H\x1b[48;5;20m\x1b[38;5;202m{}", glyph)
    );
}

#[test_log::test]
fn test_copy_paste_and_save() {
    let mut canvas = session_canvas();
    canvas.set_cell_pattern(0, 0, 0x5A).unwrap();
    canvas
        .set_cell_color(0, 0, Color::Indexed(99), Color::Transparent)
        .unwrap();

    let clip = DataRect::copy_from(&canvas, CellRect::new(0, 0, 1, 1));
    assert_eq!(
        clip.apply_at(&mut canvas, 4, 2),
        Some(CellRect::new(4, 2, 1, 1))
    );
    assert_eq!(canvas.cell_pattern(4, 2), Some(0x5A));
    assert_eq!(
        canvas.get_cell_color(4, 2),
        Some((Color::Indexed(99), Color::Transparent))
    );

    let text = save_canvas(&canvas, SaveVariant::WithColor).unwrap();
    assert_eq!(
        text.matches("\x1b[38;5;99m").count(),
        2,
        "both the original and the pasted cell carry the color"
    );
}

#[test_log::test]
fn test_mode_conversion_invalidates_history() {
    let mut canvas = Canvas::new(8, 8, ColorMode::C16).unwrap();
    let mut history = History::with_defaults();

    history.snapshot_before_edit(&canvas, PixelRect::new(0, 0, 2, 4));
    canvas.set_cell_pattern(0, 0, 0xFF).unwrap();

    canvas.convert_mode(ColorMode::C256).unwrap();
    history.clear();
    assert!(history.undo(&mut canvas).is_none());

    // a stale snapshot from before a forced conversion is refused
    history.snapshot_before_edit(&canvas, PixelRect::new(0, 0, 2, 4));
    canvas.set_cell_pattern(0, 0, 0x0F).unwrap();
    canvas.force_mode(ColorMode::Direct);
    assert!(history.undo(&mut canvas).is_none());
    assert_eq!(canvas.cell_pattern(0, 0), Some(0x0F), "refused undo changes nothing");
}

#[test_log::test]
fn test_interrupt_stops_repaint_between_rows() {
    let canvas = session_canvas();
    let renderer = Renderer::new(0, 0);
    let interrupt = Interrupt::new();

    let mut out: Vec<u8> = Vec::new();
    let mut w = TermWriter::new(&mut out);
    interrupt.raise();
    let mut painted = 0;
    for cy in 0..canvas.cell_rows() {
        if interrupt.take() {
            break;
        }
        renderer
            .paint_region(&mut w, &canvas, CellRect::new(0, cy, canvas.cell_cols(), 1))
            .unwrap();
        painted += 1;
    }
    assert_eq!(painted, 0);
    assert!(out.is_empty());
    assert!(!interrupt.is_raised(), "taking the flag lowers it");

    // with the flag down the same loop paints every row
    let mut w = TermWriter::new(&mut out);
    for cy in 0..canvas.cell_rows() {
        if interrupt.take() {
            break;
        }
        renderer
            .paint_region(&mut w, &canvas, CellRect::new(0, cy, canvas.cell_cols(), 1))
            .unwrap();
        painted += 1;
    }
    assert_eq!(painted, canvas.cell_rows());
    assert!(!out.is_empty());
}

#[test_log::test]
fn test_status_line_bytes() {
    let mut out: Vec<u8> = Vec::new();
    let mut w = TermWriter::new(&mut out);
    paint_status(&mut w, 24, "saved sprite.ans").unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x1b[25;1H\x1b[0m\x1b[7msaved sprite.ans\x1b[0m"
    );
}
