//! Circular swatch view: a filled disc with a selection ring.

use floem::kurbo::{Circle, Line, Point, Rect};
use floem::peniko::Color;

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::selection::Swatch;

pub(crate) struct SwatchView {
    id: ViewId,
    held: bool,
    swatch: Swatch,
    size: floem::taffy::prelude::Size<f32>,
    on_activate: Option<Box<dyn Fn()>>,
}

/// Creates a swatch view.
///
/// - `state`: returns the swatch to draw; re-run whenever the signals it reads change.
/// - `on_activate`: called on a completed click while the swatch is enabled.
pub(crate) fn swatch_view(
    state: impl Fn() -> Swatch + 'static,
    on_activate: impl Fn() + 'static,
) -> SwatchView {
    let id = ViewId::new();
    let initial = state();

    create_effect(move |_| {
        id.update_state(state());
    });

    SwatchView {
        id,
        held: false,
        swatch: initial,
        size: Default::default(),
        on_activate: Some(Box::new(on_activate)),
    }
    .style(|s| s.cursor(floem::style::CursorStyle::Pointer))
}

impl SwatchView {
    fn center(&self) -> Point {
        Point::new(self.size.width as f64 / 2.0, self.size.height as f64 / 2.0)
    }

    /// Radius of the disc, clamped so the selection ring stays inside the cell.
    fn radius(&self) -> f64 {
        let side = (self.size.width.min(self.size.height)) as f64;
        let max = side / 2.0 - constants::SELECTION_GAP - constants::SELECTION_RING;
        (self.swatch.diameter() / 2.0).min(max).max(1.0)
    }

    fn contains(&self, pos: Point) -> bool {
        let side = (self.size.width.min(self.size.height)) as f64;
        (pos - self.center()).hypot() <= side / 2.0
    }
}

impl View for SwatchView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(swatch) = state.downcast::<Swatch>() {
            self.swatch = *swatch;
            if !self.swatch.is_enabled() {
                self.held = false;
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if !self.swatch.is_enabled() || !self.contains(e.pos) {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                self.held = true;
                EventPropagation::Stop
            }
            Event::PointerUp(e) => {
                let was_held = std::mem::take(&mut self.held);
                if was_held && self.swatch.is_enabled() && self.contains(e.pos) {
                    if let Some(cb) = &self.on_activate {
                        cb();
                    }
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        if self.size.width == 0.0 || self.size.height == 0.0 {
            return;
        }
        let center = self.center();
        let radius = self.radius();
        let alpha = if self.swatch.is_enabled() {
            1.0
        } else {
            constants::DISABLED_ALPHA
        };
        let outline = Color::rgba(1.0, 1.0, 1.0, 0.6 * alpha);
        let disc = Circle::new(center, radius);

        match self.swatch.color() {
            Some(color) if !color.is_clear() => {
                cx.fill(&disc, color.faded(alpha).to_paint(), 0.0);
            }
            // Clear (or missing) color: hollow ring with a slash
            _ => {
                let offset = radius * std::f64::consts::FRAC_1_SQRT_2;
                let slash = Line::new(
                    (center.x - offset, center.y + offset),
                    (center.x + offset, center.y - offset),
                );
                cx.stroke(&slash, outline, &floem::kurbo::Stroke::new(1.5));
            }
        }
        cx.stroke(&disc, outline, &floem::kurbo::Stroke::new(1.0));

        if self.swatch.is_selected() {
            let ring = Circle::new(
                center,
                radius + constants::SELECTION_GAP + constants::SELECTION_RING / 2.0,
            );
            cx.stroke(
                &ring,
                Color::WHITE,
                &floem::kurbo::Stroke::new(constants::SELECTION_RING),
            );
        }
    }
}
