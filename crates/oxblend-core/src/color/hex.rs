//! `#rrggbb` rendering

use super::Color;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// How channels are zero-padded when rendering hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HexStyle {
    /// Pad only channels whose decimal value is below 10.
    ///
    /// Channels 10 to 15 render as a single digit, so the output can be
    /// shorter than seven characters and does not parse back.
    #[default]
    Legacy,
    /// Always two digits per channel
    Padded,
}

/// Render a color as lowercase `#rrggbb` using the given padding style.
pub fn to_hex_with(color: Color, style: HexStyle) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    for channel in color.to_array() {
        let pad = match style {
            HexStyle::Legacy => channel < 10,
            HexStyle::Padded => channel < 16,
        };
        if pad {
            out.push('0');
        }
        if channel >= 16 {
            out.push(DIGITS[usize::from(channel >> 4)] as char);
        }
        out.push(DIGITS[usize::from(channel & 0xf)] as char);
    }
    out
}

/// Render a color as `#rrggbb` with [`HexStyle::Legacy`] padding.
pub fn to_hex(color: Color) -> String {
    to_hex_with(color, HexStyle::Legacy)
}

/// Render a color as `#rrggbb` with two digits for every channel.
pub fn to_hex_padded(color: Color) -> String {
    to_hex_with(color, HexStyle::Padded)
}

impl Color {
    /// See [`to_hex`].
    pub fn to_hex(&self) -> String {
        to_hex(*self)
    }

    /// See [`to_hex_padded`].
    pub fn to_hex_padded(&self) -> String {
        to_hex_padded(*self)
    }
}

impl std::fmt::LowerHex for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
