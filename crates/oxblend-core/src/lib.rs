//! # oxblend - per-channel blend arithmetic for 8-bit RGB
//!
//! Photographic blend modes (multiply, screen, overlay), lighting helpers
//! (dim, light, shine), hex rendering, and a sphere normal-map helper, all as
//! pure functions over a plain [`Color`] value.
//!
//! ## Quick Start
//!
//! ```
//! use oxblend_core::{Color, multiply, screen, sphere_normal_color};
//!
//! let base = Color::new(200, 100, 50);
//!
//! // Multiplying by white and screening with black leave the base alone
//! assert_eq!(multiply(base, &[Color::WHITE]), base);
//! assert_eq!(base.screen(&[Color::BLACK]), base);
//!
//! // Colors fold left to right
//! let layered = base.multiply(&[Color::new(128, 128, 128), "#ff8000".parse().unwrap()]);
//! assert_eq!(layered, Color::new(100, 25, 0));
//! assert_eq!(layered.to_hex(), "#641900");
//!
//! // Outside the sphere the normal map is a flat sky blue
//! assert_eq!(sphere_normal_color(0.0, 0.0, 64.0), Color::new(127, 127, 255));
//! ```
//!
//! ## Guards
//!
//! `light` and `shine` do nothing when `reflex <= 0`, and `shine` does nothing
//! unless `percentage > 0.60`. These are silent no-ops, not errors.
//!
//! ## Hex padding
//!
//! [`to_hex`] pads a channel only when its decimal value is below 10, so
//! channels 10 to 15 come out as a single digit. Use [`to_hex_padded`] for
//! strict `#rrggbb`.

pub mod batch;
pub mod blend;
pub mod color;
pub mod config;
pub mod error;
pub mod normal;

pub use blend::{BlendMode, SHINE_THRESHOLD, dim, light, multiply, overlay, screen, shine};
pub use color::{Color, HexStyle, parse_color, to_hex, to_hex_padded, to_hex_with};
pub use config::{BlendConfig, Blender};
pub use error::{Error, ParseColorError, Result, UnknownBlendMode};
pub use normal::{
    OUTSIDE_SPHERE, normal_map, normal_map_rgb8, sphere_normal_color, sphere_normal_color_or,
};

/// Version of oxblend
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
