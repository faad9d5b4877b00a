//! Resolving a tap to a measurable item.

use alloc::vec::Vec;
use core::hash::Hash;

use waterui_measure_core::{Point, Rect, Registry};

/// Returns the innermost registered item under `point`.
///
/// Among all items containing the point, the first (in registry order) that
/// contains none of the others wins, so tapping a child inside its parent
/// picks the child. If every candidate contains another one (identical
/// rectangles), the first candidate wins.
#[must_use]
pub fn hit_test<Id: Eq + Hash>(registry: &Registry<Id>, point: Point) -> Option<&Id> {
    let hits: Vec<(&Id, &Rect)> = registry
        .iter()
        .filter(|(_, rect)| rect.contains_point(point))
        .collect();

    hits.iter()
        .find(|(id, rect)| {
            !hits
                .iter()
                .any(|(other_id, other)| other_id != id && rect.contains(other))
        })
        .or_else(|| hits.first())
        .map(|(id, _)| *id)
}
