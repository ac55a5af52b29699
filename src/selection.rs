//! Swatches and the exclusive selection groups that own them.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::SolidColor;

static NEXT_GROUP: AtomicU64 = AtomicU64::new(1);

/// Handle to a swatch inside the group that created it.
///
/// Handles are only meaningful for their own group; passing one to another
/// group is a programming error and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwatchId {
    group: u64,
    index: usize,
}

impl SwatchId {
    /// Zero-based position within the owning group.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A circular, selectable, enableable color swatch.
///
/// Swatches have no value equality; two swatches with the same color and
/// diameter are still different choices.
#[derive(Debug, Clone)]
pub struct Swatch {
    diameter: f64,
    color: Option<SolidColor>,
    selected: bool,
    enabled: bool,
}

impl Swatch {
    pub fn new(diameter: f64, color: Option<SolidColor>) -> Self {
        Self {
            diameter,
            color,
            selected: false,
            enabled: true,
        }
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn color(&self) -> Option<SolidColor> {
        self.color
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_diameter(&mut self, diameter: f64) {
        self.diameter = diameter;
    }

    pub(crate) fn set_color(&mut self, color: SolidColor) {
        self.color = Some(color);
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Mutually-exclusive selection over an ordered list of swatches.
///
/// At most one member is selected at any time. Selecting a member clears
/// every other member of the same group and never touches other groups.
#[derive(Debug)]
pub struct SelectionGroup {
    id: u64,
    items: Vec<Swatch>,
}

impl Default for SelectionGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionGroup {
    pub fn new() -> Self {
        Self {
            id: NEXT_GROUP.fetch_add(1, Ordering::Relaxed),
            items: Vec::new(),
        }
    }

    /// Append a swatch. The current selection is left alone, and the swatch
    /// is added unselected.
    pub fn add(&mut self, mut item: Swatch) -> SwatchId {
        item.selected = false;
        self.items.push(item);
        SwatchId {
            group: self.id,
            index: self.items.len() - 1,
        }
    }

    /// Select `id` and deselect every other member.
    ///
    /// Re-selecting the selected swatch runs the full pass as well.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this group.
    pub fn select(&mut self, id: SwatchId) {
        self.check(id);
        for (index, item) in self.items.iter_mut().enumerate() {
            item.selected = index == id.index;
        }
    }

    /// The first-added swatch.
    ///
    /// # Panics
    ///
    /// If the group is empty.
    pub fn first_item(&self) -> SwatchId {
        assert!(!self.items.is_empty(), "first_item() on an empty selection group");
        SwatchId {
            group: self.id,
            index: 0,
        }
    }

    /// # Panics
    ///
    /// If `id` was not issued by this group.
    pub fn get(&self, id: SwatchId) -> &Swatch {
        self.check(id);
        &self.items[id.index]
    }

    pub fn contains(&self, id: SwatchId) -> bool {
        id.group == self.id && id.index < self.items.len()
    }

    /// The selected swatch, if any.
    pub fn selected(&self) -> Option<SwatchId> {
        self.items
            .iter()
            .position(Swatch::is_selected)
            .map(|index| SwatchId {
                group: self.id,
                index,
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = SwatchId> + '_ {
        (0..self.items.len()).map(|index| SwatchId {
            group: self.id,
            index,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Swatch> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every member. Previously issued ids stop being valid.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.id = NEXT_GROUP.fetch_add(1, Ordering::Relaxed);
    }

    fn check(&self, id: SwatchId) {
        assert!(
            self.contains(id),
            "swatch {:?} is not a member of selection group {}",
            id,
            self.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(n: usize) -> (SelectionGroup, Vec<SwatchId>) {
        let mut group = SelectionGroup::new();
        let ids = (0..n)
            .map(|i| group.add(Swatch::new(10.0 + i as f64, Some(SolidColor::BLACK))))
            .collect();
        (group, ids)
    }

    fn selected_count(group: &SelectionGroup) -> usize {
        group.iter().filter(|s| s.is_selected()).count()
    }

    #[test]
    fn add_keeps_current_selection() {
        let (mut group, ids) = group_of(2);
        group.select(ids[1]);
        group.add(Swatch::new(4.0, None));
        assert_eq!(group.selected(), Some(ids[1]));
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn select_is_exclusive() {
        let (mut group, ids) = group_of(4);
        for &id in ids.iter().rev() {
            group.select(id);
            assert_eq!(selected_count(&group), 1);
            assert_eq!(group.selected(), Some(id));
            assert!(group.get(id).is_selected());
        }
    }

    #[test]
    fn reselect_is_idempotent() {
        let (mut group, ids) = group_of(3);
        group.select(ids[2]);
        group.select(ids[2]);
        assert_eq!(selected_count(&group), 1);
        assert_eq!(group.selected(), Some(ids[2]));
    }

    #[test]
    fn groups_do_not_interfere() {
        let (mut a, a_ids) = group_of(2);
        let (mut b, b_ids) = group_of(2);
        a.select(a_ids[0]);
        b.select(b_ids[1]);
        assert_eq!(a.selected(), Some(a_ids[0]));
        assert_eq!(b.selected(), Some(b_ids[1]));
        assert!(!a.contains(b_ids[0]));
    }

    #[test]
    fn first_item_is_first_added() {
        let (group, ids) = group_of(3);
        assert_eq!(group.first_item(), ids[0]);
        assert_eq!(group.get(group.first_item()).diameter(), 10.0);
    }

    #[test]
    #[should_panic(expected = "empty selection group")]
    fn first_item_on_empty_group_panics() {
        SelectionGroup::new().first_item();
    }

    #[test]
    #[should_panic(expected = "not a member")]
    fn selecting_a_foreign_swatch_panics() {
        let (mut a, _) = group_of(2);
        let (_, b_ids) = group_of(2);
        a.select(b_ids[0]);
    }

    #[test]
    fn rebuilt_groups_never_reuse_ids() {
        let mut group = SelectionGroup::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            group.clear();
            let id = group.add(Swatch::new(1.0, None));
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn clear_invalidates_old_ids() {
        let (mut group, ids) = group_of(2);
        group.clear();
        group.add(Swatch::new(1.0, None));
        assert!(!group.contains(ids[0]));
        assert_eq!(group.len(), 1);
    }
}
