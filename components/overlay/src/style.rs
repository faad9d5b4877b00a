//! Visual configuration of the overlay.

use waterui_measure_color::Color;
use waterui_measure_core::Size;

use crate::text::FontWeight;

/// Font used for distance labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelFont {
    /// Font size in logical pixels.
    pub size: f32,
    /// Font weight.
    pub weight: FontWeight,
    /// Whether a monospaced face should be used.
    pub monospaced: bool,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            size: 11.0,
            weight: FontWeight::Medium,
            monospaced: true,
        }
    }
}

/// Colors, stroke widths and label metrics for the overlay.
///
/// Every field has a default, so configuration files only need to name the
/// values they change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayStyle {
    /// Color of item highlight boxes. Its own opacity is ignored.
    pub highlight: Color,
    /// Outline opacity of unselected items.
    pub idle_stroke_opacity: f32,
    /// Outline width of unselected items.
    pub idle_stroke_width: f32,
    /// Outline width of selected items (drawn fully opaque).
    pub selected_stroke_width: f32,
    /// Fill opacity of selected items.
    pub selected_fill_opacity: f32,
    /// Line and label color between sibling items.
    pub sibling_color: Color,
    /// Line and label color between a parent and its child.
    pub containment_color: Color,
    /// Label text color.
    pub label_text_color: Color,
    /// Width of measurement lines and their end caps.
    pub line_width: f32,
    /// Length of the end caps drawn across each measurement line.
    pub cap_length: f32,
    /// How far labels move apart when both sibling gaps are drawn.
    pub label_offset: f32,
    /// Label font.
    pub label_font: LabelFont,
    /// Horizontal padding around label text; half of it is used vertically.
    pub label_padding: f32,
    /// Corner radius of the label background.
    pub label_corner_radius: f32,
    /// Largest width a label may be measured in.
    pub label_max_width: f32,
    /// Largest height a label may be measured in.
    pub label_max_height: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            highlight: Color::blue(),
            idle_stroke_opacity: 0.5,
            idle_stroke_width: 1.0,
            selected_stroke_width: 2.0,
            selected_fill_opacity: 0.3,
            sibling_color: Color::red(),
            containment_color: Color::orange(),
            label_text_color: Color::white(),
            line_width: 1.0,
            cap_length: 6.0,
            label_offset: 12.0,
            label_font: LabelFont::default(),
            label_padding: 4.0,
            label_corner_radius: 3.0,
            label_max_width: 100.0,
            label_max_height: 30.0,
        }
    }
}

impl OverlayStyle {
    /// The box labels are measured within.
    #[must_use]
    pub const fn label_bounds(&self) -> Size {
        Size::new(self.label_max_width, self.label_max_height)
    }
}
