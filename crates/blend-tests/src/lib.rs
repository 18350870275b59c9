//! # blend-tests
//!
//! Property and parity testing for oxblend.
//!
//! This crate provides:
//! - Deterministic color patterns and RGB8 buffers
//! - Unrounded reference formulas and palette's hex codec for comparison
//! - A JSON corpus of hand-checked scenarios
//!
//! ## Test Categories
//!
//! 1. **Blend properties**: identities, dualities, guard behavior
//! 2. **Hex parity**: rendering and parsing against palette
//! 3. **Sphere normals**: center, corners, symmetry
//! 4. **Scenarios**: the bundled corpus
//! 5. **Exhaustive sweeps**: every channel pair
//! 6. **Batch parity**: buffer kernels against the scalar API

pub mod corpus;
pub mod patterns;
pub mod reference;

pub use corpus::{Expected, Operation, Scenario, bundled_scenarios, load_scenarios};
pub use reference::{ChannelDiffStats, compare_colors};
