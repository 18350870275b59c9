//! Sphere normal coloring
//!
//! Maps a pixel inside a `size × size` square onto the unit hemisphere that
//! fills it and encodes the surface normal as a color: x to red, y to green,
//! depth to blue, each remapped from [-1, 1] with `floor(v * 128 + 127)`.
//! Points whose normal falls outside the hemisphere get a flat sentinel.

use crate::color::Color;
use crate::error::{Error, Result};

/// Color returned for points outside the projected sphere
pub const OUTSIDE_SPHERE: Color = Color::new(127, 127, 255);

/// Encode the sphere normal under point `(x, y)` of a square of side `size`.
///
/// Returns [`OUTSIDE_SPHERE`] when the point misses the sphere, including
/// when the depth term is the square root of a negative number.
pub fn sphere_normal_color(x: f64, y: f64, size: f64) -> Color {
    sphere_normal_color_or(x, y, size, OUTSIDE_SPHERE)
}

/// [`sphere_normal_color`] with a caller-chosen color for points off the sphere.
pub fn sphere_normal_color_or(x: f64, y: f64, size: f64, outside: Color) -> Color {
    let half = size / 2.0;
    let w = x / half - 1.0 + 1.0 / size;
    let h = y / half - 1.0 + 1.0 / size;
    let d = (1.0 - w * w - h * h).sqrt();

    // NaN is never contained, so a negative radicand lands here too
    let unit = -1.0..=1.0;
    if unit.contains(&w) && unit.contains(&h) && unit.contains(&d) {
        Color::from_f64_channels([encode(w), encode(h), encode(d)])
    } else {
        outside
    }
}

/// Truncating remap from [-1, 1] to the channel range. Unlike the blend
/// operations this floors instead of rounding.
#[inline]
fn encode(v: f64) -> f64 {
    (v * 128.0 + 127.0).floor()
}

/// Render a `size × size` normal map in row-major order.
pub fn normal_map(size: u32) -> Vec<Color> {
    normal_map_or(size, OUTSIDE_SPHERE)
}

pub(crate) fn normal_map_or(size: u32, outside: Color) -> Vec<Color> {
    let side = size as usize;
    log::debug!("rendering {size}x{size} normal map");

    let extent = size as f64;
    let mut pixels = Vec::with_capacity(side * side);
    for y in 0..size {
        for x in 0..size {
            pixels.push(sphere_normal_color_or(x as f64, y as f64, extent, outside));
        }
    }
    pixels
}

/// Render a `size × size` normal map into a packed RGB8 buffer.
///
/// `dst` must hold exactly `size * size * 3` bytes.
pub fn normal_map_rgb8(size: u32, dst: &mut [u8]) -> Result<()> {
    let side = size as usize;
    let expected = side
        .checked_mul(side)
        .and_then(|n| n.checked_mul(3))
        .ok_or(Error::SizeOverflow { size })?;
    if dst.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: dst.len(),
        });
    }

    let pixels = normal_map(size);
    dst.copy_from_slice(bytemuck::cast_slice(&pixels));
    Ok(())
}
