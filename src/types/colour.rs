//! Colour type and hex conversion.

use std::fmt;

/// An RGBA colour as delivered by the design API: four channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Create a new colour from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Check if the colour is fully opaque.
    ///
    /// Only an alpha of exactly 1 (or above) counts; 0.999 still gets an
    /// alpha byte even though it rounds to `ff`.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_bytes(self) -> [u8; 4] {
        [
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b),
            channel_byte(self.a),
        ]
    }

    /// Format as a lower-case hex string.
    ///
    /// Opaque colours use `#rrggbb`, translucent ones `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_bytes();
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

/// Scale a `[0, 1]` channel to a byte, rounding half away from zero.
fn channel_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
