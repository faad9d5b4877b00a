#![no_std]
//! Measurement engine for the `WaterUI` measure overlay.
//!
//! This crate holds the logic behind the overlay, free of any UI framework:
//!
//! - [`geometry`]: points, sizes, rectangles and line segments,
//! - [`measure`]: sibling gaps and parent/child insets between two rectangles,
//! - [`selection`]: the two-item selection driven by taps,
//! - [`registry`]: the latest identifier-to-bounds mapping reported by layout,
//! - [`id`]: call-site derived identifiers for measurable views.
//!
//! Nothing here can fail. Geometry is total over every input, including
//! zero-sized and inverted rectangles.

extern crate alloc;

pub mod geometry;
pub mod id;
pub mod measure;
pub mod registry;
pub mod selection;

pub use geometry::{Point, Rect, Segment, Size};
pub use id::MeasureId;
pub use measure::{Containment, Edge, EdgeGap, Gap, Inset, Measurement, classify};
pub use registry::Registry;
pub use selection::Selection;

#[cfg(test)]
mod tests;
