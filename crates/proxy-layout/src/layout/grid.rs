//! Centering margins and cell-origin calculation.

use crate::Result;
use crate::options::SheetOptions;
use crate::types::{GridPosition, Rect};

/// Margins that center the full grid (cards plus interior gaps) on the page.
///
/// Returns `(margin_x, margin_y)` in millimeters. Never negative: a grid
/// that exceeds the page fails validation instead.
pub fn centering_margins(options: &SheetOptions) -> Result<(f32, f32)> {
    options.validate()?;
    let margin_x = (options.page_width_mm - options.grid_width_mm()) / 2.0;
    let margin_y = (options.page_height_mm - options.grid_height_mm()) / 2.0;
    Ok((margin_x, margin_y))
}

/// Bottom-left corner of a cell in millimeters.
///
/// Row 0 is the visually topmost row while y grows upward from the page
/// bottom, so the row index counts down from the top of the grid:
/// `y = page_height - margin_y - (row + 1) * card_height - row * gap_y`.
pub fn cell_origin(options: &SheetOptions, margins: (f32, f32), pos: GridPosition) -> (f32, f32) {
    let (margin_x, margin_y) = margins;
    let x = margin_x + pos.col as f32 * (options.card_width_mm + options.gap_x_mm);
    let y = options.page_height_mm
        - margin_y
        - (pos.row + 1) as f32 * options.card_height_mm
        - pos.row as f32 * options.gap_y_mm;
    (x, y)
}

/// Full cell bounds for a grid position.
pub fn cell_rect(options: &SheetOptions, margins: (f32, f32), pos: GridPosition) -> Rect {
    let (x, y) = cell_origin(options, margins, pos);
    Rect::new(x, y, options.card_width_mm, options.card_height_mm)
}
