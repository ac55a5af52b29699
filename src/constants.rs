//! Sizing, color, and styling constants for the palette.

/// Default swatch diameter
pub const ITEM_DIAMETER: f64 = 36.0;

/// Default padding before and between swatches
pub const ITEM_PADDING: f64 = 14.0;

/// Default number of grid columns
pub const COLUMN_COUNT: usize = 4;

/// Default number of color swatches
pub const COLOR_COUNT: u32 = 3;

/// Upper bound on color swatches
pub const MAX_COLORS: u32 = 64;

/// Default stroke widths offered by the width swatches
pub const STROKE_WIDTHS: [f64; 4] = [4.0, 8.0, 16.0, 24.0];

/// Brush width before any width swatch is activated
pub const DEFAULT_BRUSH_WIDTH: f64 = 4.0;

/// Stroke width of the ring drawn around a selected swatch
pub const SELECTION_RING: f64 = 2.0;

/// Gap between a swatch and its selection ring
pub const SELECTION_GAP: f64 = 3.0;

/// Alpha multiplier for disabled swatches
pub const DISABLED_ALPHA: f64 = 0.3;
