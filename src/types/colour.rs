//! Colour type and token formats.

use std::fmt;

/// An RGB colour value used as a tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#RGB` or `#RRGGBB` hex colour.
    ///
    /// Short form digits are repeated, so `#fa0` is `#ffaa00`.
    /// Returns `None` for anything else, including a missing `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let mut digits = hex.chars().filter_map(|c| c.to_digit(16)).map(|d| d as u8);
                let r = digits.next()?;
                let g = digits.next()?;
                let b = digits.next()?;
                Some(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse an `R-G-B` literal such as `10-20-30`.
    ///
    /// Each component must be a decimal integer in 0..=255.
    pub fn from_rgb_literal(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        let [r, g, b] = parts.as_slice() else {
            return None;
        };
        Some(Self::rgb(component(r)?, component(g)?, component(b)?))
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Check if tinting with this colour leaves pixels unchanged.
    pub fn is_identity(self) -> bool {
        self == Self::WHITE
    }
}

impl From<[u8; 3]> for Colour {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn component(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
