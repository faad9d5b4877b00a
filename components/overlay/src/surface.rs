//! Replaying recorded commands onto a host drawing surface.

use waterui_measure_color::Color;
use waterui_measure_core::{Rect, Segment};

use crate::command::{DrawCommand, Label};

/// A drawing surface supplied by the host.
pub trait Surface {
    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    /// Outlines `rect`.
    fn stroke_rect(&mut self, rect: &Rect, color: Color, width: f32);
    /// Strokes a straight line.
    fn stroke_line(&mut self, line: &Segment, color: Color, width: f32);
    /// Draws a label's background and text.
    fn draw_label(&mut self, label: &Label);
}

/// Issues every command to `surface`, in order.
pub fn replay<S: Surface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        match command {
            DrawCommand::FillRect { rect, color } => surface.fill_rect(rect, *color),
            DrawCommand::StrokeRect { rect, color, width } => {
                surface.stroke_rect(rect, *color, *width);
            }
            DrawCommand::Line { line, color, width } => surface.stroke_line(line, *color, *width),
            DrawCommand::Label(label) => surface.draw_label(label),
        }
    }
}
