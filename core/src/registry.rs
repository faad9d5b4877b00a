//! The live mapping from measurable identifiers to their on-screen bounds.

use core::hash::Hash;

use indexmap::IndexMap;

use crate::geometry::Rect;

/// Current bounds of every measurable item on screen.
///
/// The registry is rebuilt wholesale from each layout report; it never keeps
/// entries from an earlier report. Iteration follows the order in which
/// identifiers were first observed in the latest report, which is the order
/// hit testing uses to break ties.
#[derive(Clone, Debug)]
pub struct Registry<Id> {
    items: IndexMap<Id, Rect>,
}

impl<Id> Default for Registry<Id> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<Id: Eq + Hash> Registry<Id> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole registry with a fresh layout report.
    ///
    /// When an identifier is reported more than once, the last rectangle wins.
    pub fn rebuild(&mut self, observations: impl IntoIterator<Item = (Id, Rect)>) {
        self.items.clear();
        self.items.extend(observations);
    }

    /// Returns the bounds registered for `id`.
    #[must_use]
    pub fn get(&self, id: &Id) -> Option<&Rect> {
        self.items.get(id)
    }

    /// Whether `id` is currently on screen.
    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.items.contains_key(id)
    }
}

impl<Id> Registry<Id> {
    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates registered items in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &Rect)> {
        self.items.iter()
    }
}

impl<Id: Eq + Hash> FromIterator<(Id, Rect)> for Registry<Id> {
    fn from_iter<T: IntoIterator<Item = (Id, Rect)>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.rebuild(iter);
        registry
    }
}
