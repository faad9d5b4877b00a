#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod config;
pub mod logging;
mod measurable;
mod overlay;

pub use config::{ConfigError, MeasureConfig};
pub use measurable::{LayoutReport, MeasureExt, Measurable};
pub use overlay::{ACTIVE, MeasureOverlayView};

#[doc(inline)]
pub use waterui_measure_color::{Color, Srgb};
#[doc(inline)]
pub use waterui_measure_core::{
    Containment, Edge, EdgeGap, Gap, Inset, MeasureId, Measurement, Point, Rect, Segment, Size,
};
#[doc(inline)]
pub use waterui_measure_overlay::{
    DrawCommand, FontWeight, Label, LabelFont, MonospaceEstimate, OverlayStyle, Surface,
    TextMeasure, format_distance, replay,
};

pub mod prelude {
    //! Commonly used items for tagging views and hosting the overlay.
    //!
    //! ```rust
    //! use waterui_measure::prelude::*;
    //!
    //! let card = "card".measurable();
    //! let mut report = LayoutReport::new();
    //! card.report(Rect::from_xywh(0.0, 0.0, 80.0, 80.0), &mut report);
    //! assert_eq!(report.len(), 1);
    //! ```
    pub use super::{
        LayoutReport, MeasureExt, MeasureId, MeasureOverlayView, Measurable, Point, Rect,
        Size,
    };
}
