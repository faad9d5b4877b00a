//! Tagging elements as measurable and collecting their bounds.

use alloc::vec::Vec;

use nami::Binding;
use waterui_measure_core::{MeasureId, Rect};

use crate::overlay::MeasureOverlayView;

/// Extension methods for tagging content and hosting the overlay.
///
/// Implemented for every type, so any view or widget value can opt in.
pub trait MeasureExt: Sized {
    /// Tags `self` as measurable, identified by the call site.
    ///
    /// Two calls on different source lines never collide; a call inside a
    /// loop yields the same identifier for every iteration, so use
    /// [`measurable_as`](Self::measurable_as) there.
    #[track_caller]
    fn measurable(self) -> Measurable<Self> {
        Measurable::new(self, MeasureId::caller())
    }

    /// Tags `self` as measurable under an explicit identifier.
    fn measurable_as(self, id: impl Into<MeasureId>) -> Measurable<Self> {
        Measurable::new(self, id.into())
    }

    /// Hosts the measure overlay over `self`, shown while `enabled` is `true`.
    fn measure_overlay(self, enabled: &Binding<bool>) -> MeasureOverlayView<Self> {
        MeasureOverlayView::new(self, enabled)
    }

    /// Hosts the measure overlay over `self`, always enabled.
    fn measure_overlay_always(self) -> MeasureOverlayView<Self> {
        MeasureOverlayView::always(self)
    }
}

impl<T> MeasureExt for T {}

/// Content tagged with a [`MeasureId`].
///
/// The tag does not change how the content looks or behaves; after layout the
/// host calls [`report`](Self::report) with the content's bounds in the
/// overlay's coordinate space.
#[derive(Debug, Clone)]
pub struct Measurable<V> {
    content: V,
    id: MeasureId,
}

impl<V> Measurable<V> {
    /// Tags `content` with `id`.
    pub const fn new(content: V, id: MeasureId) -> Self {
        Self { content, id }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &MeasureId {
        &self.id
    }

    /// Returns the tagged content.
    #[must_use]
    pub const fn content(&self) -> &V {
        &self.content
    }

    /// Unwraps the tagged content.
    pub fn into_inner(self) -> V {
        self.content
    }

    /// Records this element's laid-out bounds into `report`.
    pub fn report(&self, rect: Rect, report: &mut LayoutReport) {
        report.record(self.id.clone(), rect);
    }
}

/// Bounds observed during one layout pass, in traversal order.
///
/// Subtrees can build their own reports and [`merge`](Self::merge) them into
/// the parent's. When an identifier is recorded twice the later bounds win,
/// while the item keeps its first position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutReport {
    items: Vec<(MeasureId, Rect)>,
}

impl LayoutReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Records the bounds of one element.
    pub fn record(&mut self, id: MeasureId, rect: Rect) {
        self.items.push((id, rect));
    }

    /// Appends every observation of `other` after the current ones.
    pub fn merge(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    /// Number of recorded observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the observations in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &(MeasureId, Rect)> {
        self.items.iter()
    }

    /// Consumes the report, returning the observations.
    #[must_use]
    pub fn into_items(self) -> Vec<(MeasureId, Rect)> {
        self.items
    }
}

impl IntoIterator for LayoutReport {
    type Item = (MeasureId, Rect);
    type IntoIter = alloc::vec::IntoIter<(MeasureId, Rect)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<(MeasureId, Rect)> for LayoutReport {
    fn from_iter<I: IntoIterator<Item = (MeasureId, Rect)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_sites_get_distinct_ids() {
        let first = ().measurable();
        let second = ().measurable();

        assert_ne!(first.id(), second.id());
        assert!(first.id().to_string().contains("measurable.rs"));
    }

    #[test]
    fn same_call_site_shares_id() {
        let ids: Vec<MeasureId> = (0..3).map(|_| ().measurable().id().clone()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn explicit_ids_are_kept() {
        let tagged = 42_u8.measurable_as("answer");
        assert_eq!(tagged.id(), &MeasureId::named("answer"));
        assert_eq!(*tagged.content(), 42);
        assert_eq!(tagged.into_inner(), 42);
    }

    #[test]
    fn subtree_reports_merge_in_order() {
        let mut parent = LayoutReport::new();
        "a".measurable_as("a").report(Rect::from_xywh(0.0, 0.0, 10.0, 10.0), &mut parent);

        let mut child = LayoutReport::new();
        "b".measurable_as("b").report(Rect::from_xywh(20.0, 0.0, 10.0, 10.0), &mut child);
        "c".measurable_as("c").report(Rect::from_xywh(40.0, 0.0, 10.0, 10.0), &mut child);

        parent.merge(child);
        let ids: Vec<String> = parent.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn repeated_ids_keep_every_observation() {
        let tagged = "card".measurable_as("card");
        let mut report = LayoutReport::new();
        tagged.report(Rect::from_xywh(0.0, 0.0, 10.0, 10.0), &mut report);
        tagged.report(Rect::from_xywh(5.0, 5.0, 10.0, 10.0), &mut report);

        let items = report.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], (MeasureId::named("card"), Rect::from_xywh(5.0, 5.0, 10.0, 10.0)));
    }
}
