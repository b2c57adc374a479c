//! Grid geometry and pagination.
//!
//! Everything here is pure arithmetic over [`crate::SheetOptions`]: margins
//! that center the grid, cell origins from grid positions, and the mapping
//! of a flat item sequence onto pages and cells.

mod grid;
mod placement;

pub use grid::{cell_origin, cell_rect, centering_margins};
pub use placement::{Placement, page_count, paginate, placement_for};
