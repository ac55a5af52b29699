//! Standalone demo: opens a window with the brush palette and logs changes.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_palette::{Palette, PaletteConfig, PaletteDelegate, SolidColor, palette_view};
use tracing_subscriber::EnvFilter;

struct Logger;

impl PaletteDelegate for Logger {
    fn did_change_brush_color(&self, color: SolidColor) {
        tracing::info!(color = %color.to_hex(), "brush color changed");
    }

    fn color_with_tag(&self, tag: i32) -> Option<SolidColor> {
        // Offer an eraser in place of the last default color.
        (tag == 3).then_some(SolidColor::CLEAR)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("floem_palette=debug".parse().unwrap()))
        .init();

    let config = PaletteConfig::from_toml_str("stroke_widths = [2.0, 6.0, 12.0, 20.0]").unwrap();
    let logger = Rc::new(Logger);
    let mut palette = Palette::new(config).unwrap();
    palette.set_delegate(&logger);
    palette.setup();
    let height = palette.palette_height();
    let palette = Rc::new(RefCell::new(palette));

    // `logger` stays alive in this frame for as long as the app runs.
    floem::Application::new()
        .window(
            move |_| {
                palette_view(palette.clone()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((240.0, height))
                    .title("floem-palette"),
            ),
        )
        .run();
}
