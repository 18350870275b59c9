//! Scenario corpus
//!
//! Hand-checked input/output pairs stored as JSON under `data/`.

use std::path::{Path, PathBuf};

use anyhow::{Context, ensure};
use oxblend_core::{BlendMode, Color};
use serde::Deserialize;

/// One recorded operation and its expected result
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Human readable name, used in failure messages
    pub name: String,
    /// Operation to run
    pub op: Operation,
    /// Expected output
    pub expected: Expected,
}

/// An operation with its arguments
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    Fold {
        mode: BlendMode,
        base: [u8; 3],
        colors: Vec<[u8; 3]>,
    },
    Dim {
        base: [u8; 3],
        color: [u8; 3],
        percentage: f64,
    },
    Light {
        base: [u8; 3],
        color: [u8; 3],
        percentage: f64,
        reflex: f64,
    },
    Shine {
        base: [u8; 3],
        color: [u8; 3],
        percentage: f64,
        reflex: f64,
    },
    ToHex {
        color: [u8; 3],
    },
    SphereNormal {
        x: f64,
        y: f64,
        size: f64,
    },
}

/// Expected result: a color triple or a hex string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    Color([u8; 3]),
    Hex(String),
}

impl Operation {
    /// Run the operation through oxblend
    pub fn run(&self) -> Expected {
        match self {
            Operation::Fold { mode, base, colors } => {
                let colors: Vec<Color> = colors.iter().copied().map(Color::from).collect();
                Expected::Color(mode.apply(Color::from(*base), &colors).to_array())
            }
            Operation::Dim {
                base,
                color,
                percentage,
            } => Expected::Color(
                oxblend_core::dim((*base).into(), (*color).into(), *percentage).to_array(),
            ),
            Operation::Light {
                base,
                color,
                percentage,
                reflex,
            } => Expected::Color(
                oxblend_core::light((*base).into(), (*color).into(), *percentage, *reflex)
                    .to_array(),
            ),
            Operation::Shine {
                base,
                color,
                percentage,
                reflex,
            } => Expected::Color(
                oxblend_core::shine((*base).into(), (*color).into(), *percentage, *reflex)
                    .to_array(),
            ),
            Operation::ToHex { color } => Expected::Hex(oxblend_core::to_hex((*color).into())),
            Operation::SphereNormal { x, y, size } => {
                Expected::Color(oxblend_core::sphere_normal_color(*x, *y, *size).to_array())
            }
        }
    }
}

/// Default location of the corpus data
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load scenarios from a JSON file
pub fn load_scenarios(path: impl AsRef<Path>) -> anyhow::Result<Vec<Scenario>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    let scenarios: Vec<Scenario> = serde_json::from_str(&text)
        .with_context(|| format!("parsing scenario file {}", path.display()))?;
    ensure!(!scenarios.is_empty(), "no scenarios in {}", path.display());
    Ok(scenarios)
}

/// Load the bundled `data/scenarios.json`
pub fn bundled_scenarios() -> anyhow::Result<Vec<Scenario>> {
    load_scenarios(data_dir().join("scenarios.json"))
}
