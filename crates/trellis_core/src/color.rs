//! 8-bit RGBA color.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGBA color, one byte per channel.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    #[serde(default = "opaque")]
    pub a: u8,
}

const fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Solid white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from RGBA values.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Color::rgb(250, 10, 128), Color::rgba(250, 10, 128, 255));
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn test_alpha_defaults_to_opaque() {
        let c: Color = toml::from_str("r = 1\ng = 2\nb = 3").unwrap();
        assert_eq!(c, Color::rgb(1, 2, 3));
    }
}
