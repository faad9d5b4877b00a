#![doc = "Overlay rendering for the `WaterUI` measure tool."]
//!
//! The overlay draws a highlight box around every measurable item, lets the
//! developer tap two of them and annotates the distance between them. Drawing
//! is expressed as a list of [`DrawCommand`]s produced by the pure [`render`]
//! function, so the host decides when to redraw and onto which surface (see
//! [`Surface`] and [`replay`]).
//!
//! [`MeasureOverlay`] bundles the registry, the selection and the enabled flag
//! for one screen and is what hosts normally hold on to.

extern crate alloc;

pub mod command;
pub mod hit;
pub mod render;
pub mod state;
pub mod style;
pub mod surface;
pub mod text;

pub use command::{DrawCommand, Label, OverlayContext};
pub use hit::hit_test;
pub use render::{format_distance, render, resolve_pair};
pub use state::MeasureOverlay;
pub use style::{LabelFont, OverlayStyle};
pub use surface::{Surface, replay};
pub use text::{FontWeight, MonospaceEstimate, TextMeasure};

pub use waterui_measure_color::{Color, Srgb};
pub use waterui_measure_core::{
    MeasureId, Measurement, Point, Rect, Registry, Segment, Selection, Size,
};
