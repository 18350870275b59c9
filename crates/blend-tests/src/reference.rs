//! Reference formulas
//!
//! Unrounded floating-point versions of the blend formulas, and palette's
//! hex codec as an independent implementation to compare against.

use std::str::FromStr;

use oxblend_core::Color;
use palette::Srgb;

/// Unrounded multiply of two channels
pub fn multiply_exact(top: f64, bottom: f64) -> f64 {
    top * bottom / 255.0
}

/// Unrounded screen of two channels
pub fn screen_exact(top: f64, bottom: f64) -> f64 {
    255.0 - (255.0 - top) * (255.0 - bottom) / 255.0
}

/// Unrounded overlay of two channels
pub fn overlay_exact(top: f64, bottom: f64) -> f64 {
    if top < 127.5 {
        2.0 * top * bottom / 255.0
    } else {
        255.0 - 2.0 * (255.0 - top) * (255.0 - bottom) / 255.0
    }
}

/// Render `#rrggbb` through palette
pub fn palette_hex(color: Color) -> String {
    format!("#{:x}", Srgb::new(color.r, color.g, color.b))
}

/// Parse hex through palette
pub fn palette_parse(hex: &str) -> Option<Color> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color::new(rgb.red, rgb.green, rgb.blue))
}

/// Multiply through palette's normalized float components
pub fn palette_multiply(base: Color, top: Color) -> Color {
    let a = Srgb::new(base.r, base.g, base.b).into_format::<f32>();
    let b = Srgb::new(top.r, top.g, top.b).into_format::<f32>();
    let out = Srgb::new(a.red * b.red, a.green * b.green, a.blue * b.blue).into_format::<u8>();
    Color::new(out.red, out.green, out.blue)
}

/// Per-channel difference statistics between two color sets
#[derive(Debug, Clone, Default)]
pub struct ChannelDiffStats {
    /// Largest absolute channel difference
    pub max: u8,
    /// Mean absolute channel difference
    pub mean: f64,
    /// Number of channel pairs that differ
    pub differing: usize,
    /// Number of channels compared
    pub count: usize,
}

impl ChannelDiffStats {
    /// Identical outputs
    pub fn is_exact(&self) -> bool {
        self.max == 0
    }

    /// Off by at most one step anywhere
    pub fn within_one(&self) -> bool {
        self.max <= 1
    }
}

/// Compare two color sets channel by channel
pub fn compare_colors(a: &[Color], b: &[Color]) -> ChannelDiffStats {
    assert_eq!(a.len(), b.len(), "color sets differ in length");

    let mut stats = ChannelDiffStats::default();
    let mut total = 0u64;
    for (x, y) in a.iter().zip(b) {
        for (cx, cy) in x.to_array().into_iter().zip(y.to_array()) {
            let diff = cx.abs_diff(cy);
            stats.max = stats.max.max(diff);
            total += diff as u64;
            if diff != 0 {
                stats.differing += 1;
            }
            stats.count += 1;
        }
    }
    if stats.count > 0 {
        stats.mean = total as f64 / stats.count as f64;
    }
    stats
}
