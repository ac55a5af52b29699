//! Error types for palette configuration.

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a palette.
///
/// Misuse of the palette itself (foreign swatch ids, activation before
/// setup) panics instead; these variants only cover host-provided settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The grid has no columns.
    #[error("column count must be at least 1")]
    ZeroColumns,

    /// No color swatches were requested.
    #[error("palette needs at least one color swatch")]
    NoColors,

    /// More color swatches than the palette supports.
    #[error("palette supports at most {max} color swatches, got {count}")]
    TooManyColors { count: u32, max: u32 },

    /// A layout length is negative, zero where that is not allowed, or not finite.
    #[error("invalid {field}: {value}")]
    InvalidLength { field: &'static str, value: f64 },

    /// A stroke width is not a positive finite number.
    #[error("invalid stroke width {value} at position {index}")]
    InvalidStrokeWidth { index: usize, value: f64 },

    /// The configuration text could not be parsed.
    #[error("failed to parse palette config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_length(field: &'static str, value: f64) -> Self {
        Self::InvalidLength { field, value }
    }
}
