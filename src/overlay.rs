//! Hosting the measure overlay above some content.

use alloc::{rc::Rc, vec::Vec};
use core::{cell::RefCell, fmt};

use nami::{Binding, Signal, watcher::BoxWatcherGuard};
use tracing::debug;
use waterui_measure_core::{MeasureId, Measurement, Point};
use waterui_measure_overlay::{DrawCommand, MeasureOverlay, OverlayStyle, TextMeasure};

use crate::measurable::LayoutReport;

/// Whether the overlay can be shown in this build.
///
/// The overlay is a development aid: release builds keep it inert unless the
/// `always-on` feature is enabled.
pub const ACTIVE: bool = cfg!(debug_assertions) || cfg!(feature = "always-on");

/// Content with the measure overlay drawn above it.
///
/// The host drives the view through three calls per frame: [`layout`] with
/// the bounds of every tagged descendant, [`tap`] for each pointer tap that
/// lands on the overlay, and [`draw`] to obtain the commands to paint above
/// the content. While the overlay is disabled, taps fall through and nothing
/// is drawn.
///
/// [`layout`]: Self::layout
/// [`tap`]: Self::tap
/// [`draw`]: Self::draw
pub struct MeasureOverlayView<V> {
    content: V,
    state: Rc<RefCell<MeasureOverlay<MeasureId>>>,
    _guard: Option<BoxWatcherGuard>,
}

impl<V> fmt::Debug for MeasureOverlayView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasureOverlayView")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<V> MeasureOverlayView<V> {
    /// Hosts the overlay over `content`, following `enabled`.
    ///
    /// Turning `enabled` off clears the current selection.
    pub fn new(content: V, enabled: &Binding<bool>) -> Self {
        let state = Rc::new(RefCell::new(MeasureOverlay::new(ACTIVE && enabled.get())));

        let guard = ACTIVE.then(|| {
            let weak = Rc::downgrade(&state);
            enabled.watch(move |context| {
                let value = context.into_value();
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().set_enabled(value);
                }
            })
        });

        if !ACTIVE {
            debug!("measure overlay inactive in this build");
        }

        Self {
            content,
            state,
            _guard: guard,
        }
    }

    /// Hosts the overlay over `content`, permanently enabled.
    pub fn always(content: V) -> Self {
        Self {
            content,
            state: Rc::new(RefCell::new(MeasureOverlay::new(ACTIVE))),
            _guard: None,
        }
    }

    /// Replaces the drawing style.
    #[must_use]
    pub fn with_style(self, style: OverlayStyle) -> Self {
        self.state.borrow_mut().set_style(style);
        self
    }

    /// Returns the hosted content.
    #[must_use]
    pub const fn content(&self) -> &V {
        &self.content
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.borrow().is_enabled()
    }

    /// Applies the bounds reported by the latest layout pass.
    pub fn layout(&self, report: LayoutReport) {
        self.state.borrow_mut().update_layout(report);
    }

    /// Handles a tap on the overlay.
    ///
    /// Returns the toggled item, or `None` when the tap should fall through
    /// to the content.
    pub fn tap(&self, point: Point) -> Option<MeasureId> {
        self.state.borrow_mut().tap(point)
    }

    /// Returns the measurement between the two selected items, if any.
    #[must_use]
    pub fn measurement(&self) -> Option<Measurement> {
        self.state.borrow().measurement()
    }

    /// Produces the drawing commands for the current frame.
    pub fn draw<T: TextMeasure + ?Sized>(&self, text: &T) -> Vec<DrawCommand> {
        self.state.borrow().render(text)
    }
}
