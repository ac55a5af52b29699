//! The palette state machine: two selection groups sharing one brush.
//!
//! A palette starts uninitialized. [`Palette::setup`] builds the color
//! swatches from the [`ColorSource`], builds the width swatches from the
//! configured stroke widths and selects the first color. After that the only
//! transitions are swatch activations, each processed to completion before
//! the next one arrives.

use std::rc::{Rc, Weak};

use floem::kurbo::{Rect, Size, Vec2};

use crate::brush::Brush;
use crate::color::SolidColor;
use crate::color_source::ColorSource;
use crate::config::{self, PaletteConfig};
use crate::error::Result;
use crate::geometry;
use crate::selection::{SelectionGroup, Swatch, SwatchId};

/// Host observer and color provider. Both methods are optional.
pub trait PaletteDelegate {
    /// Called once after every color activation, including re-activating the
    /// selected color.
    fn did_change_brush_color(&self, _color: SolidColor) {}

    /// Custom color for the swatch with 1-based `tag`, or `None` for the
    /// default. Only consulted when the palette has no injected resolver.
    fn color_with_tag(&self, _tag: i32) -> Option<SolidColor> {
        None
    }
}

/// A color activation whose delegate notification has not been delivered.
///
/// Returned by [`Palette::select_color`] so the caller can release its borrow
/// of a shared palette before the delegate runs.
#[must_use = "the delegate is only notified by `notify()`"]
pub struct ColorChange {
    color: SolidColor,
    delegate: Option<Rc<dyn PaletteDelegate>>,
}

impl ColorChange {
    pub fn color(&self) -> SolidColor {
        self.color
    }

    /// Deliver `did_change_brush_color` if a live delegate was attached.
    pub fn notify(self) {
        if let Some(delegate) = self.delegate {
            delegate.did_change_brush_color(self.color);
        }
    }
}

/// Color and width picker state.
pub struct Palette {
    brush: Brush,
    colors: SelectionGroup,
    widths: SelectionGroup,
    config: PaletteConfig,
    source: ColorSource,
    /// Borrowed: the palette never keeps its delegate alive.
    delegate: Option<Weak<dyn PaletteDelegate>>,
    total_height: f64,
    ready: bool,
}

impl Palette {
    pub fn new(config: PaletteConfig) -> Result<Self> {
        Self::with_source(config, ColorSource::new())
    }

    /// Create a palette whose colors come from `resolver` (falling back to
    /// the built-in table when it returns `None`).
    pub fn with_resolver(
        config: PaletteConfig,
        resolver: impl Fn(i32) -> Option<SolidColor> + 'static,
    ) -> Result<Self> {
        Self::with_source(config, ColorSource::with_resolver(resolver))
    }

    fn with_source(config: PaletteConfig, source: ColorSource) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            brush: Brush::new(SolidColor::BLACK, config.default_width),
            colors: SelectionGroup::new(),
            widths: SelectionGroup::new(),
            config,
            source,
            delegate: None,
            total_height: 0.0,
            ready: false,
        })
    }

    /// Attach `delegate` without taking ownership of it.
    pub fn set_delegate<D: PaletteDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<dyn PaletteDelegate> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn delegate(&self) -> Option<Rc<dyn PaletteDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Build both swatch groups and select the first color.
    ///
    /// Meant to be called once. Calling it again rebuilds the groups from
    /// scratch, re-querying the color source, and invalidates earlier ids.
    pub fn setup(&mut self) {
        if self.ready {
            tracing::warn!(target: "floem_palette::palette", "setup() called again, rebuilding swatches");
        }

        let delegate = self.delegate();
        self.colors.clear();
        for tag in (1..=self.config.color_count).map(tag_of) {
            let color = self.source.resolve_with(tag, |tag| {
                delegate.as_ref().and_then(|d| d.color_with_tag(tag))
            });
            self.colors
                .add(Swatch::new(self.config.item_diameter, Some(color)));
        }

        let first = self.colors.first_item();
        self.colors.select(first);
        let color = self.color_of(first);
        self.brush.set_color(color);

        self.widths.clear();
        for &width in &self.config.stroke_widths {
            let mut swatch = Swatch::new(width, Some(color));
            swatch.set_enabled(!color.is_clear());
            self.widths.add(swatch);
        }

        self.recompute_height();
        self.ready = true;
        tracing::debug!(
            target: "floem_palette::palette",
            colors = self.colors.len(),
            widths = self.widths.len(),
            color = %color.to_hex(),
            "palette ready"
        );
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn current_brush(&self) -> Brush {
        self.brush
    }

    pub fn palette_height(&self) -> f64 {
        self.total_height
    }

    /// Preferred size inside a host of width `host_width`.
    pub fn intrinsic_size(&self, host_width: f64) -> Size {
        Size::new(host_width, self.total_height)
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    pub fn colors(&self) -> &SelectionGroup {
        &self.colors
    }

    pub fn widths(&self) -> &SelectionGroup {
        &self.widths
    }

    /// Change the grid geometry. Color swatches take the new diameter; width
    /// swatches keep theirs, since their diameter is the stroke width.
    ///
    /// A [`palette_view`](crate::palette_view) built earlier keeps its old
    /// layout; build a new one to pick up the change.
    pub fn set_layout(&mut self, diameter: f64, padding: f64, column_count: usize) -> Result<()> {
        config::validate_layout(diameter, padding, column_count)?;
        self.config.item_diameter = diameter;
        self.config.item_padding = padding;
        self.config.column_count = column_count;
        for swatch in self.colors.iter_mut() {
            swatch.set_diameter(diameter);
        }
        self.recompute_height();
        Ok(())
    }

    /// Handle activation of color swatch `id`, notifying the delegate.
    ///
    /// The delegate runs while `self` is mutably borrowed. When the palette
    /// sits in a `RefCell` the delegate may read, use
    /// [`select_color`](Self::select_color) and notify after the borrow ends.
    ///
    /// # Panics
    ///
    /// Before [`setup`](Self::setup), or if `id` is not a color swatch.
    pub fn activate_color(&mut self, id: SwatchId) {
        self.select_color(id).notify();
    }

    /// Apply a color activation and hand back the pending notification.
    ///
    /// # Panics
    ///
    /// Before [`setup`](Self::setup), or if `id` is not a color swatch.
    pub fn select_color(&mut self, id: SwatchId) -> ColorChange {
        self.expect_ready();
        self.colors.select(id);
        let color = self.color_of(id);
        self.brush.set_color(color);

        let enable = !color.is_clear();
        for swatch in self.widths.iter_mut() {
            swatch.set_color(color);
            swatch.set_enabled(enable);
        }
        tracing::debug!(
            target: "floem_palette::palette",
            index = id.index(),
            color = %color.to_hex(),
            widths_enabled = enable,
            "color activated"
        );

        ColorChange {
            color: self.brush.color(),
            delegate: self.delegate(),
        }
    }

    /// Handle activation of width swatch `id`. Disabled swatches are ignored.
    ///
    /// Width changes are not reported to the delegate.
    ///
    /// # Panics
    ///
    /// Before [`setup`](Self::setup), or if `id` is not a width swatch.
    pub fn activate_width(&mut self, id: SwatchId) {
        self.expect_ready();
        let swatch = self.widths.get(id);
        if !swatch.is_enabled() {
            tracing::debug!(target: "floem_palette::palette", index = id.index(), "ignoring disabled width swatch");
            return;
        }
        let width = swatch.diameter();
        self.widths.select(id);
        self.brush.set_width(width);
        tracing::debug!(target: "floem_palette::palette", index = id.index(), width, "width activated");
    }

    /// Cell of color swatch `id` within the palette.
    pub fn color_rect(&self, id: SwatchId) -> Rect {
        assert!(self.colors.contains(id), "not a color swatch: {id:?}");
        self.cell(id.index() + 1)
    }

    /// Cell of width swatch `id`, below the color section.
    pub fn width_rect(&self, id: SwatchId) -> Rect {
        assert!(self.widths.contains(id), "not a width swatch: {id:?}");
        self.cell(id.index() + 1) + Vec2::new(0.0, self.color_section_height())
    }

    fn cell(&self, index: usize) -> Rect {
        geometry::rect_for_index(
            index,
            self.config.item_diameter,
            self.config.item_padding,
            self.config.column_count,
        )
    }

    fn color_section_height(&self) -> f64 {
        geometry::section_height(
            self.colors.len(),
            self.config.item_diameter,
            self.config.item_padding,
            self.config.column_count,
        )
    }

    fn recompute_height(&mut self) {
        let widths = geometry::section_height(
            self.widths.len(),
            self.config.item_diameter,
            self.config.item_padding,
            self.config.column_count,
        );
        self.total_height = self.color_section_height() + widths;
        tracing::trace!(target: "floem_palette::palette", height = self.total_height, "palette height recomputed");
    }

    fn color_of(&self, id: SwatchId) -> SolidColor {
        self.colors.get(id).color().unwrap_or(SolidColor::CLEAR)
    }

    fn expect_ready(&self) {
        assert!(self.ready, "palette used before setup()");
    }
}

/// Color tags are bounded by `MAX_COLORS`, so they always fit.
fn tag_of(position: u32) -> i32 {
    i32::try_from(position).unwrap_or(i32::MAX)
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette")
            .field("brush", &self.brush)
            .field("colors", &self.colors)
            .field("widths", &self.widths)
            .field("config", &self.config)
            .field("total_height", &self.total_height)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}
