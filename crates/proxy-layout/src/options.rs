use crate::constants::*;
use crate::{LayoutError, Result};

/// Fixed sheet layout configuration.
///
/// Centering margins are always derived from these dimensions, never set
/// directly; see [`crate::layout::centering_margins`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetOptions {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub card_width_mm: f32,
    pub card_height_mm: f32,
    pub rows: usize,
    pub columns: usize,
    /// Horizontal gap between columns
    pub gap_x_mm: f32,
    /// Vertical gap between rows
    pub gap_y_mm: f32,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            card_width_mm: CARD_WIDTH_MM,
            card_height_mm: CARD_HEIGHT_MM,
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
            gap_x_mm: 0.0,
            gap_y_mm: 0.0,
        }
    }
}

impl SheetOptions {
    /// Default A4 3×3 layout with the thin cutting gap between cells.
    pub fn with_cut_gaps() -> Self {
        Self {
            gap_x_mm: CUT_GAP_MM,
            gap_y_mm: CUT_GAP_MM,
            ..Default::default()
        }
    }

    /// Cards per page.
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Total width of the card grid including interior gaps.
    pub fn grid_width_mm(&self) -> f32 {
        self.columns as f32 * self.card_width_mm
            + self.columns.saturating_sub(1) as f32 * self.gap_x_mm
    }

    /// Total height of the card grid including interior gaps.
    pub fn grid_height_mm(&self) -> f32 {
        self.rows as f32 * self.card_height_mm
            + self.rows.saturating_sub(1) as f32 * self.gap_y_mm
    }

    /// Validate the options.
    ///
    /// A grid that does not fit on the page is a configuration error and is
    /// reported rather than clipped.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LayoutError::Config(
                "Grid needs at least one row and one column".to_string(),
            ));
        }

        if self.card_width_mm <= 0.0 || self.card_height_mm <= 0.0 {
            return Err(LayoutError::Config(
                "Card dimensions must be positive".to_string(),
            ));
        }

        if self.gap_x_mm < 0.0 || self.gap_y_mm < 0.0 {
            return Err(LayoutError::Config("Gaps must not be negative".to_string()));
        }

        if self.grid_width_mm() > self.page_width_mm {
            return Err(LayoutError::Config(format!(
                "Grid is {:.1}mm wide but the page is only {:.1}mm",
                self.grid_width_mm(),
                self.page_width_mm
            )));
        }

        if self.grid_height_mm() > self.page_height_mm {
            return Err(LayoutError::Config(format!(
                "Grid is {:.1}mm tall but the page is only {:.1}mm",
                self.grid_height_mm(),
                self.page_height_mm
            )));
        }

        Ok(())
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
