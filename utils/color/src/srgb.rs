use core::str::FromStr;

use crate::{
    Color, HexColorError,
    parse::{parse_hex_color, parse_hex_color_runtime},
};

/// Represents a color in the sRGB color space.
///
/// Component values are gamma-encoded and range from 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
}

impl Srgb {
    /// Material blue, used for item highlights.
    pub const BLUE: Self = Self::from_hex("#2196F3");
    /// Material red, used for sibling gap lines.
    pub const RED: Self = Self::from_hex("#F44336");
    /// Material orange, used for parent/child inset lines.
    pub const ORANGE: Self = Self::from_hex("#FF9800");
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");

    /// Creates a new sRGB color from red, green, and blue components.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Creates a new sRGB color from 8-bit red, green, and blue components.
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Creates a new sRGB color from a hexadecimal color string.
    ///
    /// Intended for constants; panics when `hex` is malformed.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let (red, green, blue) = parse_hex_color(hex);
        Self::new_u8(red, green, blue)
    }

    /// Attempts to create a new sRGB color from a hexadecimal string without panicking.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly six hexadecimal digits
    /// or contains invalid characters.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let (red, green, blue) = parse_hex_color_runtime(hex)?;
        Ok(Self::new_u8(red, green, blue))
    }

    /// Returns the components quantized to 8 bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_u8(&self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.red), quantize(self.green), quantize(self.blue)]
    }

    /// Formats the color as `#RRGGBB`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Creates a color with the specified opacity applied.
    #[must_use]
    pub const fn with_opacity(self, opacity: f32) -> Color {
        Color::new(self).with_opacity(opacity)
    }
}

impl From<(u8, u8, u8)> for Srgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new_u8(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new_u8(value[0], value[1], value[2])
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}
