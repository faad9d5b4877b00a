//! Tap-driven selection of at most two measurable items.

use alloc::vec::Vec;

/// Maximum number of identifiers a [`Selection`] holds.
pub const CAPACITY: usize = 2;

/// Ordered selection of up to two identifiers, oldest first.
///
/// Selecting a third identifier evicts the oldest one, so the selection always
/// describes the two most recent choices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<Id> {
    items: Vec<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> Selection<Id> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of selected identifiers (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the selected identifiers, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.items.iter()
    }

    /// Returns the selected pair in selection order, if exactly two are selected.
    #[must_use]
    pub fn pair(&self) -> Option<(&Id, &Id)> {
        match self.items.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<Id: PartialEq> Selection<Id> {
    /// Whether `id` is currently selected.
    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.items.contains(id)
    }

    /// Deselects `id` if it is selected, otherwise selects it.
    ///
    /// Returns `true` when `id` ends up selected.
    pub fn toggle(&mut self, id: Id) -> bool {
        if let Some(index) = self.items.iter().position(|item| *item == id) {
            self.items.remove(index);
            return false;
        }
        if self.items.len() >= CAPACITY {
            self.items.remove(0);
        }
        self.items.push(id);
        true
    }
}
