//! Recorded drawing commands and the context that records them.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Debug};

use waterui_measure_color::Color;
use waterui_measure_core::{Point, Rect, Segment};

use crate::{
    style::{LabelFont, OverlayStyle},
    text::TextMeasure,
};

/// A text label drawn on a rounded, filled background.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text to draw.
    pub text: String,
    /// Center of the text.
    pub anchor: Point,
    /// Background box, already padded around the measured text.
    pub background: Rect,
    /// Corner radius of the background.
    pub corner_radius: f32,
    /// Text color.
    pub text_color: Color,
    /// Background color.
    pub background_color: Color,
    /// Font the text was measured with.
    pub font: LabelFont,
}

/// Primitive drawing operations emitted by the overlay renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle.
    FillRect {
        /// Rectangle to fill (logical pixels).
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Outline a rectangle.
    StrokeRect {
        /// Rectangle to outline (logical pixels).
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f32,
    },
    /// Stroke a straight line.
    Line {
        /// Line to stroke.
        line: Segment,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f32,
    },
    /// Draw a label with its background.
    Label(Label),
}

/// Records overlay drawing for one frame.
///
/// Renderer code talks to the context in terms of measurement lines and labels;
/// the context applies the [`OverlayStyle`], asks the [`TextMeasure`]
/// collaborator for label sizes and collects the resulting commands.
pub struct OverlayContext<'a, T: ?Sized> {
    style: &'a OverlayStyle,
    text: &'a T,
    commands: Vec<DrawCommand>,
}

impl<T: ?Sized> Debug for OverlayContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayContext")
            .field("command_count", &self.commands.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T: TextMeasure + ?Sized> OverlayContext<'a, T> {
    /// Creates an empty context drawing with `style` and measuring with `text`.
    pub const fn new(style: &'a OverlayStyle, text: &'a T) -> Self {
        Self {
            style,
            text,
            commands: Vec::new(),
        }
    }

    /// Returns the style this context draws with.
    #[must_use]
    pub const fn style(&self) -> &OverlayStyle {
        self.style
    }

    /// Fills `rect` with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Outlines `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    /// Strokes a straight line.
    pub fn stroke_line(&mut self, line: Segment, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { line, color, width });
    }

    /// Draws `text` centered on `anchor` over a `background`-colored box.
    pub fn label(&mut self, text: String, anchor: Point, background: Color) {
        let style = self.style;
        let measured = self
            .text
            .measure(&text, &style.label_font, style.label_bounds());
        let padding = style.label_padding;
        let frame = Rect::from_xywh(
            anchor.x - measured.width / 2.0 - padding,
            anchor.y - measured.height / 2.0 - padding / 2.0,
            padding.mul_add(2.0, measured.width),
            measured.height + padding,
        );
        self.commands.push(DrawCommand::Label(Label {
            text,
            anchor,
            background: frame,
            corner_radius: style.label_corner_radius,
            text_color: style.label_text_color,
            background_color: background,
            font: style.label_font.clone(),
        }));
    }

    /// Draws a measurement: the line, a cap across each end and a label at
    /// the midpoint moved by `label_offset`.
    pub fn measure_line(&mut self, line: Segment, text: String, color: Color, label_offset: Point) {
        let width = self.style.line_width;
        self.stroke_line(line, color, width);

        let horizontal = line.is_horizontal();
        self.cap(line.start, horizontal, color);
        self.cap(line.end, horizontal, color);

        let mid = line.midpoint();
        self.label(text, mid.offset(label_offset.x, label_offset.y), color);
    }

    fn cap(&mut self, at: Point, across_horizontal: bool, color: Color) {
        let half = self.style.cap_length / 2.0;
        let cap = if across_horizontal {
            Segment::new(at.offset(0.0, -half), at.offset(0.0, half))
        } else {
            Segment::new(at.offset(-half, 0.0), at.offset(half, 0.0))
        };
        self.stroke_line(cap, color, self.style.line_width);
    }

    /// Consumes the context, returning the recorded drawing commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}
