//! Fill Strategy Module
//! Per-variant decision: transparent outline, flat color, or gradient fade.

use crate::spark::gradient::GradientId;
use serde::{Deserialize, Deserializer, Serialize};

/// Display variant of the whole chart.
///
/// Closed set; fixed for the duration of a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Outline only, transparent fill.
    Line,
    /// Flat fill in the category's resolved color.
    Solid,
    /// Fill references the category's gradient (vertical fade).
    #[default]
    Gradient,
}

impl Variant {
    /// Parse a variant name. Unrecognized names degrade to `Line`
    /// (transparent fill) — a styling concern is never a hard failure.
    pub fn parse(name: &str) -> Variant {
        match name {
            "solid" => Variant::Solid,
            "gradient" => Variant::Gradient,
            _ => Variant::Line,
        }
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Variant::parse(&name))
    }
}

/// How one layer's area is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Transparent,
    /// Flat fill with a concrete display color.
    Solid(String),
    /// Reference to a gradient definition by id.
    Gradient(GradientId),
}

/// Select the fill for one category given the chart variant.
pub fn fill_for(variant: Variant, color: &str, gradient_id: &str) -> Fill {
    match variant {
        Variant::Line => Fill::Transparent,
        Variant::Solid => Fill::Solid(color.to_string()),
        Variant::Gradient => Fill::Gradient(gradient_id.to_string()),
    }
}
