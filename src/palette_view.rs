//! Palette view: color swatches on top, width swatches below, laid out on
//! the palette's grid.

use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::Rect;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::views::stack_from_iter;

use crate::palette::Palette;
use crate::selection::SwatchId;
use crate::swatch_view::{SwatchView, swatch_view};

#[derive(Clone, Copy)]
enum Section {
    Colors,
    Widths,
}

/// Creates the palette view for a shared palette.
///
/// Runs [`Palette::setup`] if the host has not done so yet. The host keeps
/// its own handle to `palette` to read the brush; it must not hold a borrow
/// of it across UI event dispatch. Delegate notifications are delivered after
/// the view has released its borrow, so a delegate may read the palette.
///
/// The grid is laid out once, when the view is built: swatch cells and the
/// container height are taken from the palette at that point. After
/// [`Palette::set_layout`] or a repeated [`Palette::setup`], build a new view.
pub fn palette_view(palette: Rc<RefCell<Palette>>) -> impl IntoView {
    let (color_ids, width_ids, height) = {
        let mut p = palette.borrow_mut();
        if !p.is_ready() {
            p.setup();
        }
        (
            p.colors().ids().collect::<Vec<_>>(),
            p.widths().ids().collect::<Vec<_>>(),
            p.palette_height(),
        )
    };

    // Bumped after every activation so all swatches re-read their state.
    let revision = RwSignal::new(0_u64);

    let colors = color_ids
        .into_iter()
        .map(|id| section_swatch(&palette, revision, Section::Colors, id));
    let widths = width_ids
        .into_iter()
        .map(|id| section_swatch(&palette, revision, Section::Widths, id));

    stack_from_iter(colors.chain(widths)).style(move |s| {
        s.width_full()
            .height(height)
            .background(Color::rgb8(0, 0, 0))
    })
}

fn section_swatch(
    palette: &Rc<RefCell<Palette>>,
    revision: RwSignal<u64>,
    section: Section,
    id: SwatchId,
) -> SwatchView {
    let rect = match section {
        Section::Colors => palette.borrow().color_rect(id),
        Section::Widths => palette.borrow().width_rect(id),
    };

    let reader = palette.clone();
    let writer = palette.clone();
    swatch_view(
        move || {
            revision.get();
            let p = reader.borrow();
            match section {
                Section::Colors => p.colors().get(id).clone(),
                Section::Widths => p.widths().get(id).clone(),
            }
        },
        move || {
            match section {
                Section::Colors => {
                    let change = writer.borrow_mut().select_color(id);
                    revision.update(|r| *r += 1);
                    // The delegate may read the shared palette.
                    change.notify();
                }
                Section::Widths => {
                    writer.borrow_mut().activate_width(id);
                    revision.update(|r| *r += 1);
                }
            }
        },
    )
    .style(move |s| place(s, rect))
}

fn place(s: floem::style::Style, rect: Rect) -> floem::style::Style {
    s.absolute()
        .inset_left(rect.x0)
        .inset_top(rect.y0)
        .width(rect.width())
        .height(rect.height())
}
