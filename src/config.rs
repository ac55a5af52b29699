//! Layout and brush defaults supplied by the host.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{Error, Result};

/// Palette configuration.
///
/// Every field has a default, so a TOML document only needs the keys it
/// wants to change:
///
/// ```toml
/// item_diameter = 40.0
/// column_count = 5
/// stroke_widths = [2.0, 6.0, 12.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Diameter of each color swatch and side of each grid cell.
    pub item_diameter: f64,
    /// Space before the first cell and between cells.
    pub item_padding: f64,
    pub column_count: usize,
    /// Number of color swatches; tags run from 1 to this value. At most
    /// 64.
    pub color_count: u32,
    /// One width swatch per entry, in order.
    pub stroke_widths: Vec<f64>,
    /// Brush width until a width swatch is activated.
    pub default_width: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            item_diameter: constants::ITEM_DIAMETER,
            item_padding: constants::ITEM_PADDING,
            column_count: constants::COLUMN_COUNT,
            color_count: constants::COLOR_COUNT,
            stroke_widths: constants::STROKE_WIDTHS.to_vec(),
            default_width: constants::DEFAULT_BRUSH_WIDTH,
        }
    }
}

impl PaletteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_layout(self.item_diameter, self.item_padding, self.column_count)?;
        if self.color_count == 0 {
            return Err(Error::NoColors);
        }
        if self.color_count > constants::MAX_COLORS {
            return Err(Error::TooManyColors {
                count: self.color_count,
                max: constants::MAX_COLORS,
            });
        }
        if !is_positive(self.default_width) {
            return Err(Error::invalid_length("default width", self.default_width));
        }
        if let Some((index, &value)) = self
            .stroke_widths
            .iter()
            .enumerate()
            .find(|(_, w)| !is_positive(**w))
        {
            return Err(Error::InvalidStrokeWidth { index, value });
        }
        Ok(())
    }
}

pub(crate) fn validate_layout(diameter: f64, padding: f64, column_count: usize) -> Result<()> {
    if column_count == 0 {
        return Err(Error::ZeroColumns);
    }
    if !is_positive(diameter) {
        return Err(Error::invalid_length("item diameter", diameter));
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(Error::invalid_length("item padding", padding));
    }
    Ok(())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PaletteConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = PaletteConfig::from_toml_str("column_count = 5\nstroke_widths = [2.0, 6.0]")
            .unwrap();
        assert_eq!(config.column_count, 5);
        assert_eq!(config.stroke_widths, vec![2.0, 6.0]);
        assert_eq!(config.item_diameter, constants::ITEM_DIAMETER);
        assert_eq!(config.color_count, constants::COLOR_COUNT);
    }

    #[test]
    fn rejects_zero_columns() {
        let config = PaletteConfig {
            column_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ZeroColumns)));
    }

    #[test]
    fn rejects_bad_lengths() {
        let config = PaletteConfig {
            item_diameter: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidLength { field: "item diameter", .. })
        ));

        let config = PaletteConfig {
            item_padding: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidLength { field: "item padding", .. })
        ));
    }

    #[test]
    fn zero_padding_is_allowed() {
        let config = PaletteConfig {
            item_padding: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_stroke_width() {
        let config = PaletteConfig {
            stroke_widths: vec![2.0, 0.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidStrokeWidth { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_no_colors() {
        let config = PaletteConfig {
            color_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::NoColors)));
    }

    #[test]
    fn color_count_is_capped() {
        let at_max = PaletteConfig {
            color_count: constants::MAX_COLORS,
            ..Default::default()
        };
        assert!(at_max.validate().is_ok());

        for count in [constants::MAX_COLORS + 1, i32::MAX as u32 + 1, u32::MAX] {
            let config = PaletteConfig {
                color_count: count,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::TooManyColors { max: constants::MAX_COLORS, .. })
            ));
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            PaletteConfig::from_toml_str("column_count = \"four\""),
            Err(Error::Parse(_))
        ));
    }
}
