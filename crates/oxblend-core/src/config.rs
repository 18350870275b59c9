//! Tunable constants
//!
//! The free functions use fixed reference values. [`Blender`] applies the
//! same operations with a [`BlendConfig`] so those values can be changed.

use crate::blend::{self, SHINE_THRESHOLD};
use crate::color::{Color, HexStyle, to_hex_with};
use crate::normal::{self, OUTSIDE_SPHERE};

/// Options for [`Blender`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlendConfig {
    /// `shine` engages only when the percentage is strictly above this
    pub shine_threshold: f64,
    /// Padding used by [`Blender::to_hex`]
    pub hex_style: HexStyle,
    /// Color for points off the sphere in the normal mapping
    pub outside_color: Color,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            shine_threshold: SHINE_THRESHOLD,
            hex_style: HexStyle::Legacy,
            outside_color: OUTSIDE_SPHERE,
        }
    }
}

impl BlendConfig {
    /// Set the shine threshold
    pub fn with_shine_threshold(mut self, threshold: f64) -> Self {
        self.shine_threshold = threshold;
        self
    }

    /// Set the hex padding style
    pub fn with_hex_style(mut self, style: HexStyle) -> Self {
        self.hex_style = style;
        self
    }

    /// Set the color used outside the sphere
    pub fn with_outside_color(mut self, color: Color) -> Self {
        self.outside_color = color;
        self
    }
}

/// Applies blend operations under a [`BlendConfig`]
///
/// `Blender::default()` behaves exactly like the free functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Blender {
    config: BlendConfig,
}

impl Blender {
    pub fn new(config: BlendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// [`blend::shine`] with the configured threshold
    pub fn shine(&self, base: Color, color: Color, percentage: f64, reflex: f64) -> Color {
        blend::shine_above(base, color, percentage, reflex, self.config.shine_threshold)
    }

    /// Render hex with the configured padding style
    pub fn to_hex(&self, color: Color) -> String {
        to_hex_with(color, self.config.hex_style)
    }

    /// [`normal::sphere_normal_color`] with the configured outside color
    pub fn sphere_normal_color(&self, x: f64, y: f64, size: f64) -> Color {
        normal::sphere_normal_color_or(x, y, size, self.config.outside_color)
    }

    /// [`normal::normal_map`] with the configured outside color
    pub fn normal_map(&self, size: u32) -> Vec<Color> {
        normal::normal_map_or(size, self.config.outside_color)
    }
}
