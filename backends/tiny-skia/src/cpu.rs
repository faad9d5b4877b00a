//! CPU surface built on top of `tiny-skia`.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::trace;
use waterui_measure_color::Color;
use waterui_measure_core::{Rect, Segment};
use waterui_measure_overlay::{DrawCommand, Label, Surface, replay};

/// Overlay surface that rasterizes into a `tiny-skia` pixmap.
pub struct TinySkiaSurface {
    pixmap: Pixmap,
    clear_color: tiny_skia::Color,
}

impl core::fmt::Debug for TinySkiaSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TinySkiaSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl TinySkiaSurface {
    /// Creates a transparent surface of the given size (logical pixels).
    ///
    /// Returns `None` when either dimension is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        Some(Self {
            pixmap,
            clear_color: tiny_skia::Color::TRANSPARENT,
        })
    }

    /// Returns the pixmap width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns the pixmap height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns a reference to the backing pixmap for presenting or copying.
    #[must_use]
    pub const fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Sets the color used by [`clear`](Self::clear).
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = to_tiny(color);
    }

    /// Fills the whole pixmap with the clear color.
    pub fn clear(&mut self) {
        self.pixmap.fill(self.clear_color);
    }

    /// Clears the pixmap and draws `commands` into it.
    pub fn draw_frame(&mut self, commands: &[DrawCommand]) {
        self.clear();
        replay(commands, self);
        trace!(commands = commands.len(), "overlay frame rasterized");
    }

    fn fill(&mut self, path: &tiny_skia::Path, color: Color) {
        self.pixmap.fill_path(
            path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, path: &tiny_skia::Path, color: Color, width: f32) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }
}

impl Surface for TinySkiaSurface {
    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        if let Some(rect) = to_tiny_rect(rect) {
            self.pixmap
                .fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    fn stroke_rect(&mut self, rect: &Rect, color: Color, width: f32) {
        if let Some(rect) = to_tiny_rect(rect) {
            self.stroke(&PathBuilder::from_rect(rect), color, width);
        }
    }

    fn stroke_line(&mut self, line: &Segment, color: Color, width: f32) {
        let mut builder = PathBuilder::new();
        builder.move_to(line.start.x, line.start.y);
        builder.line_to(line.end.x, line.end.y);
        if let Some(path) = builder.finish() {
            self.stroke(&path, color, width);
        }
    }

    fn draw_label(&mut self, label: &Label) {
        if let Some(path) = rounded_rect(&label.background, label.corner_radius) {
            self.fill(&path, label.background_color);
        }
        // TODO(text-rendering): rasterize `label.text` with cosmic-text once a
        // font source is wired in; only the background is drawn for now.
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_tiny(color));
    paint.anti_alias = true;
    paint
}

fn to_tiny(color: Color) -> tiny_skia::Color {
    let srgb = color.srgb();
    tiny_skia::Color::from_rgba(
        srgb.red.clamp(0.0, 1.0),
        srgb.green.clamp(0.0, 1.0),
        srgb.blue.clamp(0.0, 1.0),
        color.opacity().clamp(0.0, 1.0),
    )
    .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn to_tiny_rect(rect: &Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.min_x(), rect.min_y(), rect.width(), rect.height())
}

fn rounded_rect(rect: &Rect, radius: f32) -> Option<tiny_skia::Path> {
    let bounds = to_tiny_rect(rect)?;
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(bounds));
    }

    let (left, top, right, bottom) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
    let mut builder = PathBuilder::new();
    builder.move_to(left + r, top);
    builder.line_to(right - r, top);
    builder.quad_to(right, top, right, top + r);
    builder.line_to(right, bottom - r);
    builder.quad_to(right, bottom, right - r, bottom);
    builder.line_to(left + r, bottom);
    builder.quad_to(left, bottom, left, bottom - r);
    builder.line_to(left, top + r);
    builder.quad_to(left, top, left + r, top);
    builder.close();
    builder.finish()
}

#[cfg(test)]
mod tests {
    use waterui_measure_core::{Point, Size};
    use waterui_measure_overlay::{LabelFont, MeasureOverlay};

    use super::*;

    fn fixed_text(_text: &str, _font: &LabelFont, _bounds: Size) -> Size {
        Size::new(20.0, 10.0)
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(TinySkiaSurface::new(0, 10).is_none());
        assert!(TinySkiaSurface::new(10, 10).is_some());
    }

    #[test]
    fn selected_item_is_tinted() {
        let mut overlay = MeasureOverlay::new(true);
        overlay.update_layout([("box", Rect::from_xywh(10.0, 10.0, 40.0, 40.0))]);
        overlay.tap(Point::new(20.0, 20.0));

        let mut surface = TinySkiaSurface::new(64, 64).unwrap();
        surface.draw_frame(&overlay.render(&fixed_text));

        let inside = surface.pixmap().pixel(30, 30).unwrap();
        assert!(inside.alpha() > 0);
        assert!(inside.blue() > inside.red());

        let outside = surface.pixmap().pixel(60, 60).unwrap();
        assert_eq!(outside.alpha(), 0);
    }

    #[test]
    fn measurement_line_and_label_are_painted() {
        let mut overlay = MeasureOverlay::new(true);
        overlay.update_layout([
            ("a", Rect::from_xywh(0.0, 0.0, 80.0, 80.0)),
            ("b", Rect::from_xywh(140.0, 0.0, 100.0, 60.0)),
        ]);
        overlay.tap(Point::new(10.0, 10.0));
        overlay.tap(Point::new(150.0, 10.0));

        let mut surface = TinySkiaSurface::new(256, 128).unwrap();
        surface.draw_frame(&overlay.render(&fixed_text));

        // Label background sits centered on the line at (110, 30).
        let label = surface.pixmap().pixel(110, 30).unwrap();
        assert_eq!(label.alpha(), 255);
        assert!(label.red() > label.blue());

        // Line between the label and the left edge.
        let line = surface.pixmap().pixel(88, 30).unwrap();
        assert!(line.alpha() > 0);
    }

    #[test]
    fn clear_resets_pixels() {
        let mut surface = TinySkiaSurface::new(8, 8).unwrap();
        surface.fill_rect(&Rect::from_xywh(0.0, 0.0, 8.0, 8.0), Color::red());
        surface.set_clear_color(Color::white().with_opacity(0.0));
        surface.clear();
        assert_eq!(surface.pixmap().pixel(4, 4).unwrap().alpha(), 0);
    }
}
