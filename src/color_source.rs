//! Tag → color resolution for the color swatches.

use crate::color::SolidColor;

/// Host-supplied lookup. Returning `None` means "use the default".
pub type ColorResolver = Box<dyn Fn(i32) -> Option<SolidColor>>;

/// Resolves 1-based swatch tags to colors.
///
/// The optional resolver is consulted on every call; nothing is cached, so a
/// resolver backed by external state is re-read each time the palette is set up.
#[derive(Default)]
pub struct ColorSource {
    resolver: Option<ColorResolver>,
}

impl ColorSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: impl Fn(i32) -> Option<SolidColor> + 'static) -> Self {
        Self {
            resolver: Some(Box::new(resolver)),
        }
    }

    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Resolve `tag`, asking the configured resolver first.
    pub fn resolve(&self, tag: i32) -> SolidColor {
        self.resolve_with(tag, |_| None)
    }

    /// Like [`resolve`](Self::resolve), but consults `host` when no resolver
    /// is configured.
    pub(crate) fn resolve_with(
        &self,
        tag: i32,
        host: impl FnOnce(i32) -> Option<SolidColor>,
    ) -> SolidColor {
        let custom = match &self.resolver {
            Some(resolver) => resolver(tag),
            None => host(tag),
        };
        custom.unwrap_or_else(|| Self::fallback(tag))
    }

    /// Built-in table. Total over all tags: unknown tags map to black.
    pub fn fallback(tag: i32) -> SolidColor {
        match tag {
            1 => SolidColor::BLACK,
            2 => SolidColor::YELLOW,
            3 => SolidColor::RED,
            _ => SolidColor::BLACK,
        }
    }
}

impl std::fmt::Debug for ColorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSource")
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn fallback_table() {
        let source = ColorSource::new();
        assert_eq!(source.resolve(1), SolidColor::BLACK);
        assert_eq!(source.resolve(2), SolidColor::YELLOW);
        assert_eq!(source.resolve(3), SolidColor::RED);
        for tag in [0, 4, -1, i32::MAX, i32::MIN] {
            assert_eq!(source.resolve(tag), SolidColor::BLACK);
        }
    }

    #[test]
    fn resolver_overrides_and_falls_back_on_none() {
        let source = ColorSource::with_resolver(|tag| (tag == 2).then_some(SolidColor::CLEAR));
        assert_eq!(source.resolve(1), SolidColor::BLACK);
        assert_eq!(source.resolve(2), SolidColor::CLEAR);
        assert_eq!(source.resolve(3), SolidColor::RED);
    }

    #[test]
    fn resolver_is_queried_every_time() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let source = ColorSource::with_resolver(move |_| {
            counter.set(counter.get() + 1);
            None
        });
        source.resolve(1);
        source.resolve(1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn host_hook_only_used_without_resolver() {
        let plain = ColorSource::new();
        assert_eq!(plain.resolve_with(1, |_| Some(SolidColor::WHITE)), SolidColor::WHITE);

        let custom = ColorSource::with_resolver(|_| None);
        assert_eq!(custom.resolve_with(1, |_| Some(SolidColor::WHITE)), SolidColor::BLACK);
    }
}
