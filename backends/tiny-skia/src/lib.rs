//! CPU rasterization of measure overlay frames.
//!
//! [`TinySkiaSurface`] implements the overlay's [`Surface`] trait on top of a
//! `tiny-skia` pixmap, which is handy for headless previews, snapshots and
//! hosts that composite a CPU buffer over their own content.
//!
//! [`Surface`]: waterui_measure_overlay::Surface

mod cpu;

pub use cpu::TinySkiaSurface;
