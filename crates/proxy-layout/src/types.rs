use printpdf::RawImage;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in millimeters, y measured up from the page bottom
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Cut-guide style, fixed for a whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuideStyle {
    /// Two short solid segments at each cell corner, extending outward
    #[default]
    CropMarks,
    /// A dashed rectangle on the cell boundary
    DashedOutline,
}

/// A decoded card image plus the name it was loaded under.
///
/// Images are decoded exactly once, at load time, and never mutated after;
/// printing several copies of a card repeats its index in the work-list
/// rather than cloning the pixels.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub name: String,
    pub image: RawImage,
}

impl CardImage {
    /// Decode an image from its raw file bytes.
    pub fn decode(name: impl Into<String>, bytes: &[u8]) -> crate::Result<Self> {
        let name = name.into();
        let mut warnings = Vec::new();
        let image = RawImage::decode_from_bytes(bytes, &mut warnings).map_err(|message| {
            crate::LayoutError::Image {
                name: name.clone(),
                message,
            }
        })?;
        Ok(Self { name, image })
    }

    pub fn width_px(&self) -> usize {
        self.image.width
    }

    pub fn height_px(&self) -> usize {
        self.image.height
    }
}
