//! Cut-guide marks: corner crop marks and dashed cell outlines.

use printpdf::{Color, Line, LineDashPattern, LinePoint, Mm, Op, Point, Pt, Rgb};

use crate::constants::{CROP_ARM_MM, DASH_OFF_PT, DASH_ON_PT, GUIDE_LINE_WIDTH_PT};
use crate::types::{GuideStyle, Rect};

/// Guide ops for one cell, including the thin stroke setup shared by both
/// styles.
pub fn guide_ops(style: GuideStyle, cell: &Rect) -> Vec<Op> {
    let mut ops = vec![
        Op::SetOutlineThickness {
            pt: Pt(GUIDE_LINE_WIDTH_PT),
        },
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                icc_profile: None,
            }),
        },
    ];
    match style {
        GuideStyle::CropMarks => ops.extend(crop_mark_ops(cell)),
        GuideStyle::DashedOutline => ops.extend(dashed_outline_ops(cell)),
    }
    ops
}

fn segment(x1: f32, y1: f32, x2: f32, y2: f32) -> Op {
    Op::DrawLine {
        line: Line {
            points: vec![
                LinePoint {
                    p: Point::new(Mm(x1), Mm(y1)),
                    bezier: false,
                },
                LinePoint {
                    p: Point::new(Mm(x2), Mm(y2)),
                    bezier: false,
                },
            ],
            is_closed: false,
        },
    }
}

/// Eight short solid segments, two per corner, each extending outward from
/// the cell and stopping exactly at the corner. None of them enter the cell
/// interior, so the card art never covers them.
pub fn crop_mark_ops(cell: &Rect) -> Vec<Op> {
    let arm = CROP_ARM_MM;
    let (left, bottom) = (cell.x, cell.y);
    let (right, top) = (cell.right(), cell.top());

    vec![
        // Bottom-left corner
        segment(left - arm, bottom, left, bottom),
        segment(left, bottom - arm, left, bottom),
        // Bottom-right corner
        segment(right, bottom, right + arm, bottom),
        segment(right, bottom - arm, right, bottom),
        // Top-left corner
        segment(left - arm, top, left, top),
        segment(left, top, left, top + arm),
        // Top-right corner
        segment(right, top, right + arm, top),
        segment(right, top, right, top + arm),
    ]
}

/// A dashed rectangle exactly on the cell boundary.
///
/// The dash pattern is reset to solid immediately afterwards so it cannot
/// leak into later drawing operations.
pub fn dashed_outline_ops(cell: &Rect) -> Vec<Op> {
    let corners = [
        (cell.x, cell.y),
        (cell.right(), cell.y),
        (cell.right(), cell.top()),
        (cell.x, cell.top()),
    ];
    let outline = Line {
        points: corners
            .iter()
            .map(|&(x, y)| LinePoint {
                p: Point::new(Mm(x), Mm(y)),
                bezier: false,
            })
            .collect(),
        is_closed: true,
    };

    vec![
        Op::SetLineDashPattern {
            dash: LineDashPattern {
                dash_1: Some(DASH_ON_PT),
                gap_1: Some(DASH_OFF_PT),
                ..Default::default()
            },
        },
        Op::DrawLine { line: outline },
        Op::SetLineDashPattern {
            dash: LineDashPattern::default(),
        },
    ]
}
