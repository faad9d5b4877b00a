//! Text measurement for distance labels.
//!
//! Measuring glyphs needs a font stack, which belongs to the host. The overlay
//! only asks for the size of a label through [`TextMeasure`] and positions the
//! label background from the answer.

use waterui_measure_core::Size;

use crate::style::LabelFont;

/// Font weight for label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontWeight {
    /// Light weight (300).
    Light,
    /// Normal weight (400).
    Normal,
    /// Medium weight (500).
    #[default]
    Medium,
    /// Semi-bold weight (600).
    SemiBold,
    /// Bold weight (700).
    Bold,
}

impl FontWeight {
    /// Returns the numeric value of the font weight.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }
}

/// Measures label text for the overlay.
pub trait TextMeasure {
    /// Returns the size `text` occupies when set in `font`, laid out within `bounds`.
    fn measure(&self, text: &str, font: &LabelFont, bounds: Size) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &LabelFont, Size) -> Size,
{
    fn measure(&self, text: &str, font: &LabelFont, bounds: Size) -> Size {
        self(text, font, bounds)
    }
}

/// Approximates a monospaced font without touching real font data.
///
/// Every character advances by `advance` times the font size and lines are
/// `line_height` times the font size. Good enough for tests and headless
/// previews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceEstimate {
    /// Glyph advance as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
}

impl Default for MonospaceEstimate {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasure for MonospaceEstimate {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, font: &LabelFont, bounds: Size) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(
            (chars * self.advance * font.size).min(bounds.width),
            (self.line_height * font.size).min(bounds.height),
        )
    }
}
