//! Per-page assembly: cut guide plus the scaled card image for every cell.

use printpdf::{Mm, Op, XObjectId, XObjectTransform};

use super::marks::guide_ops;
use crate::constants::{IMAGE_DPI, mm_to_pt};
use crate::layout::cell_rect;
use crate::options::SheetOptions;
use crate::types::{GridPosition, GuideStyle, Rect};

/// A card image registered with the document, plus its pixel dimensions
#[derive(Debug, Clone)]
pub struct CellImage {
    pub xobject: XObjectId,
    pub width_px: usize,
    pub height_px: usize,
}

/// Ops for one full page. `cells` are in cell order (row-major from the top
/// left); a page holding fewer than `capacity` images simply draws fewer
/// cells.
///
/// The guide is emitted before the image in every cell. For crop marks the
/// two never overlap; for the dashed outline the image fills exactly the
/// same bounding box, so stroking the boundary first keeps it visible.
pub fn page_ops(
    cells: &[CellImage],
    options: &SheetOptions,
    margins: (f32, f32),
    style: GuideStyle,
) -> Vec<Op> {
    let mut ops = Vec::new();
    for (cell_index, image) in cells.iter().enumerate() {
        let pos = GridPosition::new(cell_index / options.columns, cell_index % options.columns);
        let rect = cell_rect(options, margins, pos);
        ops.extend(guide_ops(style, &rect));
        ops.push(image_op(image, &rect));
    }
    ops
}

/// Scale the image to exactly fill the cell, distorting the aspect ratio if
/// it differs. Images are placed at 72 dpi so one pixel maps to one point
/// and the factors are simply cell size over pixel count.
fn image_op(image: &CellImage, rect: &Rect) -> Op {
    let scale_x = mm_to_pt(rect.width) / image.width_px as f32;
    let scale_y = mm_to_pt(rect.height) / image.height_px as f32;
    Op::UseXobject {
        id: image.xobject.clone(),
        transform: XObjectTransform {
            translate_x: Some(Mm(rect.x).into_pt()),
            translate_y: Some(Mm(rect.y).into_pt()),
            rotate: None,
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            dpi: Some(IMAGE_DPI),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::centering_margins;

    fn cell_image() -> CellImage {
        CellImage {
            xobject: XObjectId::new(),
            width_px: 745,
            height_px: 1040,
        }
    }

    #[test]
    fn every_cell_gets_a_guide_and_an_image() {
        let options = SheetOptions::with_cut_gaps();
        let margins = centering_margins(&options).unwrap();
        let cells: Vec<_> = (0..4).map(|_| cell_image()).collect();

        let ops = page_ops(&cells, &options, margins, GuideStyle::CropMarks);
        let images = ops
            .iter()
            .filter(|op| matches!(op, Op::UseXobject { .. }))
            .count();
        let segments = ops
            .iter()
            .filter(|op| matches!(op, Op::DrawLine { .. }))
            .count();
        assert_eq!(images, 4);
        assert_eq!(segments, 4 * 8);
    }

    #[test]
    fn guides_precede_their_cell_image() {
        let options = SheetOptions::default();
        let margins = centering_margins(&options).unwrap();
        let cells = vec![cell_image()];

        let ops = page_ops(&cells, &options, margins, GuideStyle::DashedOutline);
        let outline_at = ops
            .iter()
            .position(|op| matches!(op, Op::DrawLine { .. }))
            .unwrap();
        let image_at = ops
            .iter()
            .position(|op| matches!(op, Op::UseXobject { .. }))
            .unwrap();
        assert!(outline_at < image_at);
    }

    #[test]
    fn images_are_scaled_to_the_cell() {
        let options = SheetOptions::default();
        let margins = centering_margins(&options).unwrap();
        let image = CellImage {
            xobject: XObjectId::new(),
            width_px: 745,
            height_px: 1040,
        };

        let ops = page_ops(std::slice::from_ref(&image), &options, margins, GuideStyle::CropMarks);
        let transform = ops
            .iter()
            .find_map(|op| match op {
                Op::UseXobject { transform, .. } => Some(transform.clone()),
                _ => None,
            })
            .unwrap();

        let expected_x = mm_to_pt(63.0) / 745.0;
        let expected_y = mm_to_pt(88.0) / 1040.0;
        assert!((transform.scale_x.unwrap() - expected_x).abs() < 1e-6);
        assert!((transform.scale_y.unwrap() - expected_y).abs() < 1e-6);
        assert_eq!(transform.dpi, Some(IMAGE_DPI));
    }
}
