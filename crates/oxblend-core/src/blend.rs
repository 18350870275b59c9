//! Blend arithmetic on 8-bit RGB colors
//!
//! Every operation takes a base color and returns a new one; nothing is
//! mutated. Channels are computed independently and identically, then rounded
//! half up. Results outside 0..=255 saturate when the output color is built.
//!
//! [`multiply`], [`screen`] and [`overlay`] fold a sequence of colors into the
//! base from left to right: each color is blended into the running result,
//! not into the original base.
//!
//! [`light`] and [`shine`] have guards that silently leave channels unchanged:
//! a `reflex` that is not strictly positive disables both, and [`shine`] also
//! does nothing unless `percentage` exceeds [`SHINE_THRESHOLD`].

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, round_half_up};
use crate::error::UnknownBlendMode;

/// `shine` only engages when the percentage is strictly above this value.
pub const SHINE_THRESHOLD: f64 = 0.60;

fn fold(base: Color, colors: &[Color], blend: impl Fn(f64, f64) -> f64) -> Color {
    let mut rgb = base.to_f64_channels();
    for color in colors {
        let layer = color.to_f64_channels();
        for (top, bottom) in rgb.iter_mut().zip(layer) {
            *top = blend(*top, bottom);
        }
    }
    Color::from_f64_channels(rgb)
}

fn per_channel(base: Color, color: Color, f: impl Fn(f64, f64) -> f64) -> Color {
    let b = base.to_f64_channels();
    let c = color.to_f64_channels();
    Color::from_f64_channels([f(b[0], c[0]), f(b[1], c[1]), f(b[2], c[2])])
}

/// Multiply each color into the base: `round(top * bottom / 255)`.
///
/// Multiplying by white is the identity.
pub fn multiply(base: Color, colors: &[Color]) -> Color {
    fold(base, colors, |top, bottom| round_half_up(top * bottom / 255.0))
}

/// Screen each color into the base: `round(255 - (255 - top) * (255 - bottom) / 255)`.
///
/// Screening with black is the identity.
pub fn screen(base: Color, colors: &[Color]) -> Color {
    fold(base, colors, |top, bottom| {
        round_half_up(255.0 - ((255.0 - top) * (255.0 - bottom)) / 255.0)
    })
}

/// Overlay each color into the base.
///
/// Per channel, a running value below half intensity gets a doubled
/// multiply, otherwise a doubled screen. The branch is re-evaluated for every
/// channel and every folded color.
pub fn overlay(base: Color, colors: &[Color]) -> Color {
    fold(base, colors, |top, bottom| {
        if top / 255.0 < 0.5 {
            round_half_up(2.0 * top * bottom / 255.0)
        } else {
            round_half_up(255.0 - 2.0 * (255.0 - top) * (255.0 - bottom) / 255.0)
        }
    })
}

/// Darken the base by `color * (1 - percentage)`, saturating at 0.
pub fn dim(base: Color, color: Color, percentage: f64) -> Color {
    per_channel(base, color, |b, c| round_half_up(b - c * (1.0 - percentage)))
}

/// Lighten the base by `color * percentage - color / (2 * reflex)`, saturating at 255.
///
/// Returns the base unchanged when `reflex <= 0`.
pub fn light(base: Color, color: Color, percentage: f64, reflex: f64) -> Color {
    per_channel(base, color, |b, c| {
        if reflex > 0.0 {
            round_half_up(b + c * percentage - c / (2.0 * reflex))
        } else {
            b
        }
    })
}

/// Add a highlight of `color * percentage * (reflex / 10)`, saturating at 255.
///
/// Returns the base unchanged unless `percentage > 0.60` and `reflex > 0`.
/// Channels where `color` is 0 are left unchanged.
pub fn shine(base: Color, color: Color, percentage: f64, reflex: f64) -> Color {
    shine_above(base, color, percentage, reflex, SHINE_THRESHOLD)
}

pub(crate) fn shine_above(
    base: Color,
    color: Color,
    percentage: f64,
    reflex: f64,
    threshold: f64,
) -> Color {
    let engaged = percentage > threshold;
    if !engaged {
        return base;
    }
    per_channel(base, color, |b, c| {
        // A black channel adds nothing, even when the gain is unbounded
        if reflex > 0.0 && c != 0.0 {
            round_half_up(b + c * percentage * (reflex / 10.0))
        } else {
            b
        }
    })
}

impl Color {
    /// See [`multiply`].
    pub fn multiply(&self, colors: &[Color]) -> Color {
        multiply(*self, colors)
    }

    /// See [`screen`].
    pub fn screen(&self, colors: &[Color]) -> Color {
        screen(*self, colors)
    }

    /// See [`overlay`].
    pub fn overlay(&self, colors: &[Color]) -> Color {
        overlay(*self, colors)
    }

    /// See [`dim`].
    pub fn dim(&self, color: Color, percentage: f64) -> Color {
        dim(*self, color, percentage)
    }

    /// See [`light`].
    pub fn light(&self, color: Color, percentage: f64, reflex: f64) -> Color {
        light(*self, color, percentage, reflex)
    }

    /// See [`shine`].
    pub fn shine(&self, color: Color, percentage: f64, reflex: f64) -> Color {
        shine(*self, color, percentage, reflex)
    }
}

/// The folding blend modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlendMode {
    Multiply,
    Screen,
    Overlay,
}

impl BlendMode {
    /// All modes in display order
    pub const ALL: [BlendMode; 3] = [Self::Multiply, Self::Screen, Self::Overlay];

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
        }
    }

    /// Fold `colors` into `base` with this mode
    pub fn apply(self, base: Color, colors: &[Color]) -> Color {
        match self {
            Self::Multiply => multiply(base, colors),
            Self::Screen => screen(base, colors),
            Self::Overlay => overlay(base, colors),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = UnknownBlendMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBlendMode(s.to_owned()))
    }
}
