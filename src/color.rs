//! SolidColor type — the color value carried by swatches and the brush.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range, with hex parsing/formatting
//! and the named colors the palette falls back to.

use floem::peniko::Color;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    pub const BLACK: Self = Self::from_rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::from_rgba(1.0, 1.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::from_rgba(1.0, 1.0, 0.0, 1.0);
    pub const RED: Self = Self::from_rgba(1.0, 0.0, 0.0, 1.0);
    /// Fully transparent. Selecting it leaves nothing to stroke with.
    pub const CLEAR: Self = Self::from_rgba(0.0, 0.0, 0.0, 0.0);

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Whether the color paints nothing.
    ///
    /// Any color with zero alpha counts, regardless of its RGB channels.
    pub fn is_clear(&self) -> bool {
        self.a <= 0.0
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl SolidColor {
    /// Create from f64 RGBA (all 0.0–1.0).
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`, 6 or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 6-char hex defaults to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&stripped[i..i + 2], 16)
                .ok()
                .map(|v| v as f64 / 255.0)
        };
        match stripped.len() {
            6 => Some(Self::from_rgba(channel(0)?, channel(2)?, channel(4)?, 1.0)),
            8 => Some(Self::from_rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    /// Format as uppercase RRGGBBAA hex (no `#` prefix).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        let a = (self.a * 255.0).round() as u8;
        format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    /// Same color with its alpha scaled by `factor`.
    pub(crate) fn faded(&self, factor: f64) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..*self
        }
    }

    pub(crate) fn to_paint(self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}
