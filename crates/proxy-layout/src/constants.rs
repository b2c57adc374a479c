//! Shared constants for proxy sheet layout.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page and Card Dimensions
// =============================================================================

/// A4 page width in millimeters
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 page height in millimeters
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Standard trading-card width in millimeters
pub const CARD_WIDTH_MM: f32 = 63.0;

/// Standard trading-card height in millimeters
pub const CARD_HEIGHT_MM: f32 = 88.0;

/// Default grid rows per page
pub const GRID_ROWS: usize = 3;

/// Default grid columns per page
pub const GRID_COLUMNS: usize = 3;

// =============================================================================
// Cut Guides
// =============================================================================

/// Thin cutting gap between cells in millimeters
pub const CUT_GAP_MM: f32 = 0.5;

/// Length of each crop-mark arm in millimeters
pub const CROP_ARM_MM: f32 = 5.0;

/// Line width for cut guides (points)
pub const GUIDE_LINE_WIDTH_PT: f32 = 0.2;

/// Dash length for the dashed outline guide (points)
pub const DASH_ON_PT: i64 = 1;

/// Gap length for the dashed outline guide (points)
pub const DASH_OFF_PT: i64 = 2;

// =============================================================================
// Images
// =============================================================================

/// DPI at which card images are placed, chosen so one pixel equals one point
/// and the cell-filling scale factors are simply cell size over pixel count.
pub const IMAGE_DPI: f32 = 72.0;
