//! 8-bit RGB color value
//!
//! This module provides:
//! - The [`Color`] triple every blend operation consumes and produces
//! - Text parsing (`#rgb`, `#rrggbb`, `rgb(r, g, b)`)
//! - `#rrggbb` rendering

mod hex;
mod parse;

pub use hex::{HexStyle, to_hex, to_hex_padded, to_hex_with};
pub use parse::parse_color;

use std::ops::Index;

use bytemuck::{Pod, Zeroable};

/// RGB color with 8-bit channels
///
/// Laid out as three consecutive bytes, so a packed RGB8 buffer can be viewed
/// as `&[Color]` with [`bytemuck::cast_slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// Red component (0 to 255)
    pub r: u8,
    /// Green component (0 to 255)
    pub g: u8,
    /// Blue component (0 to 255)
    pub b: u8,
}

impl Color {
    /// Create a new color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from an `[r, g, b]` array
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Store already-rounded channel values, saturating into 0..=255.
    ///
    /// NaN stores as 0.
    #[inline]
    pub fn from_f64_channels(channels: [f64; 3]) -> Self {
        Self {
            r: channels[0] as u8,
            g: channels[1] as u8,
            b: channels[2] as u8,
        }
    }

    /// Channels as floats, for arithmetic
    #[inline]
    pub(crate) fn to_f64_channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Parse a color from text. See [`parse_color`].
    pub fn parse(s: &str) -> Result<Self, crate::ParseColorError> {
        parse_color(s)
    }

    /// Black color
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl Index<usize> for Color {
    type Output = u8;

    /// Channel 0 is red, 1 green, 2 blue.
    fn index(&self, index: usize) -> &u8 {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("color channel index out of range: {index}"),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Round half up, the rounding every blend operation applies per channel.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
