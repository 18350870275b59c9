//! Blending over packed RGB8 buffers
//!
//! Buffers are tightly packed `r, g, b` bytes with no row padding. They are
//! viewed as `&[Color]` without copying, and each pixel goes through the same
//! scalar operation as the single-color API, so results are bit-identical.
//!
//! Kernels are compiled for several instruction sets with `multiversion` and
//! dispatched at runtime.

use multiversion::multiversion;

use crate::blend::{self, BlendMode};
use crate::color::Color;
use crate::error::{Error, Result};

fn pixels(buf: &[u8]) -> Result<&[Color]> {
    if buf.len() % 3 != 0 {
        return Err(Error::BufferLayout { len: buf.len() });
    }
    Ok(bytemuck::cast_slice(buf))
}

fn pixels_mut(buf: &mut [u8]) -> Result<&mut [Color]> {
    if buf.len() % 3 != 0 {
        return Err(Error::BufferLayout { len: buf.len() });
    }
    Ok(bytemuck::cast_slice_mut(buf))
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::BufferSize { expected, actual })
    }
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn map_pixels<F>(src: &[Color], dst: &mut [Color], blend_fn: F)
where
    F: Fn(Color) -> Color,
{
    for (out, &px) in dst.iter_mut().zip(src) {
        *out = blend_fn(px);
    }
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn zip_pixels<F>(base: &[Color], top: &[Color], dst: &mut [Color], blend_fn: F)
where
    F: Fn(Color, Color) -> Color,
{
    for ((out, &b), &t) in dst.iter_mut().zip(base).zip(top) {
        *out = blend_fn(b, t);
    }
}

fn map_rgb8(src: &[u8], dst: &mut [u8], blend_fn: impl Fn(Color) -> Color) -> Result<()> {
    let src_px = pixels(src)?;
    check_len(src.len(), dst.len())?;
    let dst_px = pixels_mut(dst)?;
    map_pixels(src_px, dst_px, blend_fn);
    Ok(())
}

/// Blend every pixel of `src` with a single `layer` color.
///
/// `dst` must be the same length as `src`.
pub fn blend_rgb8(mode: BlendMode, src: &[u8], layer: Color, dst: &mut [u8]) -> Result<()> {
    log::debug!("{mode} {} pixels with {layer}", src.len() / 3);
    map_rgb8(src, dst, |px| mode.apply(px, &[layer]))
}

/// Blend two images pixel by pixel: `dst[i] = mode(base[i], top[i])`.
pub fn blend_rgb8_layers(mode: BlendMode, base: &[u8], top: &[u8], dst: &mut [u8]) -> Result<()> {
    let base_px = pixels(base)?;
    check_len(base.len(), top.len())?;
    check_len(base.len(), dst.len())?;
    let top_px = pixels(top)?;
    let dst_px = pixels_mut(dst)?;

    log::debug!("{mode} {} pixel pairs", base_px.len());
    zip_pixels(base_px, top_px, dst_px, |b, t| mode.apply(b, &[t]));
    Ok(())
}

/// [`blend::dim`] applied to every pixel
pub fn dim_rgb8(src: &[u8], color: Color, percentage: f64, dst: &mut [u8]) -> Result<()> {
    log::debug!("dim {} pixels by {color} at {percentage}", src.len() / 3);
    map_rgb8(src, dst, |px| blend::dim(px, color, percentage))
}

/// [`blend::light`] applied to every pixel
pub fn light_rgb8(
    src: &[u8],
    color: Color,
    percentage: f64,
    reflex: f64,
    dst: &mut [u8],
) -> Result<()> {
    log::debug!("light {} pixels by {color} at {percentage}, reflex {reflex}", src.len() / 3);
    map_rgb8(src, dst, |px| blend::light(px, color, percentage, reflex))
}

/// [`blend::shine`] applied to every pixel
pub fn shine_rgb8(
    src: &[u8],
    color: Color,
    percentage: f64,
    reflex: f64,
    dst: &mut [u8],
) -> Result<()> {
    log::debug!("shine {} pixels by {color} at {percentage}, reflex {reflex}", src.len() / 3);
    map_rgb8(src, dst, |px| blend::shine(px, color, percentage, reflex))
}
