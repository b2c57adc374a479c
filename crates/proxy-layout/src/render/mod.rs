//! Cut-guide and cell rendering.

mod marks;
mod page;

pub use marks::{crop_mark_ops, dashed_outline_ops, guide_ops};
pub use page::{CellImage, page_ops};
