//! Color text parsing
//!
//! Accepted forms:
//! - `#rgb` and `#rrggbb` (the `#` is optional, digits in either case)
//! - `rgb(r, g, b)` with integer components 0 to 255

use std::str::FromStr;

use super::Color;
use crate::error::ParseColorError;

fn nibble(c: char) -> Result<u8, ParseColorError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseColorError::InvalidHex(c))
}

fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    let digits: Vec<char> = hex.chars().collect();
    match digits[..] {
        [r, g, b] => {
            // #rgb expands each digit: 0xf -> 0xff
            Ok(Color::new(nibble(r)? * 17, nibble(g)? * 17, nibble(b)? * 17))
        }
        [r1, r0, g1, g0, b1, b0] => {
            let byte = |hi: char, lo: char| -> Result<u8, ParseColorError> {
                Ok((nibble(hi)? << 4) | nibble(lo)?)
            };
            Ok(Color::new(byte(r1, r0)?, byte(g1, g0)?, byte(b1, b0)?))
        }
        _ => Err(ParseColorError::InvalidLength(digits.len())),
    }
}

fn parse_rgb_function(args: &str) -> Result<Color, ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseColorError::InvalidFunc);
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: i64 = part.parse().map_err(|_| ParseColorError::InvalidFunc)?;
        *slot = u8::try_from(value).map_err(|_| ParseColorError::OutOfRange)?;
    }
    Ok(Color::from_array(channels))
}

/// Parse a color from `#rgb`, `#rrggbb` or `rgb(r, g, b)` text.
pub fn parse_color(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    let lower = s.to_ascii_lowercase();
    let result = if let Some(args) = lower.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
        parse_rgb_function(args)
    } else {
        parse_hex(s.strip_prefix('#').unwrap_or(s).trim())
    };

    if let Err(err) = &result {
        log::trace!("rejected color text {s:?}: {err}");
    }
    result
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_hex() {
        assert_eq!(parse_color("#c86432"), Ok(Color::new(200, 100, 50)));
        assert_eq!(parse_color("C86432"), Ok(Color::new(200, 100, 50)));
        assert_eq!(parse_color("  #FFffFF "), Ok(Color::WHITE));
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(parse_color("#f80"), Ok(Color::new(255, 136, 0)));
        assert_eq!(parse_color("#000"), Ok(Color::BLACK));
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(parse_color("rgb(200, 100, 50)"), Ok(Color::new(200, 100, 50)));
        assert_eq!(parse_color("RGB(0,0,255)"), Ok(Color::new(0, 0, 255)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_color(""), Err(ParseColorError::Empty));
        assert_eq!(parse_color("   "), Err(ParseColorError::Empty));
        assert_eq!(parse_color("#a0000"), Err(ParseColorError::InvalidLength(5)));
        assert_eq!(parse_color("#gg0000"), Err(ParseColorError::InvalidHex('g')));
        assert_eq!(parse_color("rgb(1, 2)"), Err(ParseColorError::InvalidFunc));
        assert_eq!(parse_color("rgb(1, x, 2)"), Err(ParseColorError::InvalidFunc));
        assert_eq!(parse_color("rgb(256, 0, 0)"), Err(ParseColorError::OutOfRange));
    }

    #[test]
    fn test_non_ascii_digits_are_reported_whole() {
        assert_eq!(parse_color("#ééé"), Err(ParseColorError::InvalidHex('é')));
        assert_eq!(parse_color("#12345é"), Err(ParseColorError::InvalidHex('é')));
        // Length counts characters, not bytes
        assert_eq!(parse_color("#éé"), Err(ParseColorError::InvalidLength(2)));
    }

    #[test]
    fn test_rgb_components_outside_u8_are_out_of_range() {
        assert_eq!(parse_color("rgb(70000, 0, 0)"), Err(ParseColorError::OutOfRange));
        assert_eq!(parse_color("rgb(-1, 0, 0)"), Err(ParseColorError::OutOfRange));
        assert_eq!(parse_color("rgb(0, 0, 1.5)"), Err(ParseColorError::InvalidFunc));
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: Color = "#102030".parse().unwrap();
        let b = Color::try_from("rgb(16, 32, 48)").unwrap();
        assert_eq!(a, b);
    }
}
