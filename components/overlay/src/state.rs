//! Overlay state for one screen.

use alloc::vec::Vec;
use core::{fmt::Debug, hash::Hash};

use tracing::{debug, trace};
use waterui_measure_core::{Measurement, Point, Rect, Registry, Selection};

use crate::{
    command::DrawCommand, hit::hit_test, render, style::OverlayStyle, text::TextMeasure,
};

/// Registry, selection and enabled flag for one overlay instance.
///
/// All mutation happens on the host's UI thread in response to layout reports,
/// taps and toggles; nothing here is shared across overlays.
#[derive(Debug, Clone)]
pub struct MeasureOverlay<Id> {
    registry: Registry<Id>,
    selection: Selection<Id>,
    enabled: bool,
    style: OverlayStyle,
}

impl<Id> Default for MeasureOverlay<Id> {
    fn default() -> Self {
        Self {
            registry: Registry::default(),
            selection: Selection::new(),
            enabled: false,
            style: OverlayStyle::default(),
        }
    }
}

impl<Id> MeasureOverlay<Id>
where
    Id: Eq + Hash + Clone + Debug,
{
    /// Creates an overlay, initially enabled or not.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Replaces the drawing style.
    #[must_use]
    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the registry with the latest layout report.
    ///
    /// Runs whether or not the overlay is enabled, so bounds are current the
    /// moment it is switched on.
    pub fn update_layout(&mut self, observations: impl IntoIterator<Item = (Id, Rect)>) {
        self.registry.rebuild(observations);
        trace!(items = self.registry.len(), "measure registry rebuilt");
    }

    /// Switches the overlay on or off. Switching it off clears the selection.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.selection.clear();
        }
        debug!(enabled, "measure overlay toggled");
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handles a tap at `point`, toggling the innermost item under it.
    ///
    /// Returns the toggled identifier, or `None` when the overlay is off or
    /// nothing measurable was hit.
    pub fn tap(&mut self, point: Point) -> Option<Id> {
        if !self.enabled {
            return None;
        }
        let Some(id) = hit_test(&self.registry, point).cloned() else {
            trace!(x = point.x, y = point.y, "tap missed every measurable item");
            return None;
        };
        let selected = self.selection.toggle(id.clone());
        debug!(?id, selected, "measure selection changed");
        Some(id)
    }

    /// Measures the current pair, if any.
    #[must_use]
    pub fn measurement(&self) -> Option<Measurement> {
        render::resolve_pair(&self.registry, &self.selection)
    }

    /// Renders the overlay. Produces nothing while the overlay is off.
    pub fn render<T: TextMeasure + ?Sized>(&self, text: &T) -> Vec<DrawCommand> {
        if !self.enabled {
            return Vec::new();
        }
        render::render(&self.registry, &self.selection, &self.style, text)
    }

    /// Clears the selection without changing the enabled state.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

impl<Id> MeasureOverlay<Id> {
    /// The current registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry<Id> {
        &self.registry
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection<Id> {
        &self.selection
    }

    /// The drawing style.
    #[must_use]
    pub const fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Replaces the drawing style in place.
    pub fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }
}
