//! The brush value reported to the host.

use crate::color::SolidColor;
use crate::constants;

/// Current stroke color and stroke width.
///
/// Only the palette's activation handlers change a brush; hosts read it
/// through [`Palette::current_brush`](crate::Palette::current_brush).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: SolidColor,
    width: f64,
}

impl Brush {
    pub(crate) fn new(color: SolidColor, width: f64) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> SolidColor {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn set_color(&mut self, color: SolidColor) {
        self.color = color;
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.width = width;
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(SolidColor::BLACK, constants::DEFAULT_BRUSH_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_brush_is_black_at_default_width() {
        let brush = Brush::default();
        assert_eq!(brush.color(), SolidColor::BLACK);
        assert_eq!(brush.width(), constants::DEFAULT_BRUSH_WIDTH);
    }

    #[test]
    fn setters_touch_one_field() {
        let mut brush = Brush::default();
        brush.set_width(12.0);
        assert_eq!(brush.color(), SolidColor::BLACK);
        brush.set_color(SolidColor::RED);
        assert_eq!(brush.width(), 12.0);
        assert_eq!(brush.color(), SolidColor::RED);
    }
}
