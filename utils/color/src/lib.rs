//! # Color Module
//!
//! Flat sRGB colors with an opacity channel, which is all the measure overlay
//! paints with. Colors can be written as constants (`Srgb::from_hex` is a
//! `const fn`) or parsed at runtime from configuration strings.
//!
//! With the `serde` feature a [`Color`] deserializes from either a bare
//! `"#RRGGBB"` string or a `{ "hex": "#RRGGBB", "opacity": 0.5 }` table.

mod parse;
mod srgb;
pub use srgb::Srgb;

use core::fmt::{self, Display};

/// An sRGB color with opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    srgb: Srgb,
    opacity: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Srgb::BLACK)
    }
}

impl Color {
    /// Creates an opaque color.
    #[must_use]
    pub const fn new(srgb: Srgb) -> Self {
        Self { srgb, opacity: 1.0 }
    }

    /// Returns the same color with `opacity` (0.0 = transparent, 1.0 = opaque).
    #[must_use]
    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self {
            srgb: self.srgb,
            opacity,
        }
    }

    /// Highlight blue.
    #[must_use]
    pub const fn blue() -> Self {
        Self::new(Srgb::BLUE)
    }

    /// Sibling-gap red.
    #[must_use]
    pub const fn red() -> Self {
        Self::new(Srgb::RED)
    }

    /// Containment orange.
    #[must_use]
    pub const fn orange() -> Self {
        Self::new(Srgb::ORANGE)
    }

    /// Plain white.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(Srgb::WHITE)
    }

    /// The color components without opacity.
    #[must_use]
    pub const fn srgb(&self) -> Srgb {
        self.srgb
    }

    /// Opacity in `0.0..=1.0`.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Parses a `#RRGGBB` string into an opaque color.
    ///
    /// # Errors
    ///
    /// Returns an error if `hex` is not six hexadecimal digits.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        Srgb::try_from_hex(hex).map(Self::new)
    }
}

impl From<Srgb> for Color {
    fn from(srgb: Srgb) -> Self {
        Self::new(srgb)
    }
}

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// The provided string does not have the expected 6 hexadecimal digits.
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    InvalidDigit(usize),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("expected exactly 6 hexadecimal digits"),
            Self::InvalidDigit(index) => {
                write!(f, "invalid hexadecimal digit at byte index {index}")
            }
        }
    }
}

impl std::error::Error for HexColorError {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    use crate::Color;

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Hex(String),
        WithOpacity { hex: String, opacity: f32 },
    }

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let hex = self.srgb().to_hex();
            // Exact comparison: opacity is only ever assigned, never computed.
            #[allow(clippy::float_cmp)]
            let repr = if self.opacity() == 1.0 {
                Repr::Hex(hex)
            } else {
                Repr::WithOpacity {
                    hex,
                    opacity: self.opacity(),
                }
            };
            repr.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let (hex, opacity) = match Repr::deserialize(deserializer)? {
                Repr::Hex(hex) => (hex, 1.0),
                Repr::WithOpacity { hex, opacity } => (hex, opacity),
            };
            if !(0.0..=1.0).contains(&opacity) {
                return Err(D::Error::custom(format!(
                    "opacity {opacity} is outside 0.0..=1.0"
                )));
            }
            Self::try_from_hex(&hex)
                .map(|color| color.with_opacity(opacity))
                .map_err(D::Error::custom)
        }
    }
}
