//! Test pattern generation
//!
//! Deterministic color sets and RGB8 buffers for property checks.

use oxblend_core::Color;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Gray ramp 0-255
    Grayscale,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Values around the overlay midpoint (126..=129 per channel)
    Midpoint,
    /// Channels in the unpadded hex range 10-15
    HexQuirk,
    /// Random colors with seed
    Random(u64),
}

/// Generate the colors of a pattern.
///
/// `count` only applies to [`TestPattern::Random`]; the other patterns have a
/// fixed size.
pub fn generate_colors(pattern: TestPattern, count: usize) -> Vec<Color> {
    match pattern {
        TestPattern::Grayscale => (0..=255u8).map(|v| Color::new(v, v, v)).collect(),
        TestPattern::ColorCube => {
            let mut colors = Vec::with_capacity(8);
            for r in [0, 255] {
                for g in [0, 255] {
                    for b in [0, 255] {
                        colors.push(Color::new(r, g, b));
                    }
                }
            }
            colors
        }
        TestPattern::Midpoint => {
            let range = 126..=129u8;
            let mut colors = Vec::with_capacity(64);
            for r in range.clone() {
                for g in range.clone() {
                    for b in range.clone() {
                        colors.push(Color::new(r, g, b));
                    }
                }
            }
            colors
        }
        TestPattern::HexQuirk => (10..=15u8)
            .map(|v| Color::new(v, 255 - v, 16 + v))
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Color::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
    }
}

/// Generate a packed RGB8 buffer from a pattern
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<u8> {
    let colors = generate_colors(pattern, count);
    flatten(&colors)
}

fn flatten(colors: &[Color]) -> Vec<u8> {
    colors.iter().flat_map(|c| c.to_array()).collect()
}

/// Random percentages in [0, 1] with seed
pub fn random_percentages(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0.0..=1.0)).collect()
}
