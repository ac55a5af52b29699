//! # floem-palette
//!
//! A brush palette widget for [Floem](https://github.com/lapce/floem).
//!
//! Offers a small grid of color swatches and a row of stroke-width swatches.
//! Picking a color recolors the width swatches (and disables them for a clear
//! color); picking a width sets the brush's stroke width. The host reads the
//! brush from the shared [`Palette`] and can observe color changes through a
//! [`PaletteDelegate`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use floem_palette::{Palette, PaletteConfig, palette_view};
//!
//! let palette = Rc::new(RefCell::new(Palette::new(PaletteConfig::default()).unwrap()));
//! // Use `palette_view(palette.clone())` in your Floem view tree, and
//! // `palette.borrow().current_brush()` when drawing.
//! ```

mod brush;
mod color;
mod color_source;
mod config;
mod constants;
mod error;
pub mod geometry;
mod palette;
mod palette_view;
mod selection;
mod swatch_view;

pub use brush::Brush;
pub use color::SolidColor;
pub use color_source::{ColorResolver, ColorSource};
pub use config::PaletteConfig;
pub use error::{Error, Result};
pub use palette::{ColorChange, Palette, PaletteDelegate};
pub use palette_view::palette_view;
pub use selection::{SelectionGroup, Swatch, SwatchId};
