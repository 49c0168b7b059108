//! Style Module
//! Pass-through styling knobs forwarded to the host container.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Container styling parameters.
///
/// Opacity knobs are plain numeric fields; translating them into whatever
/// styling mechanism the host uses (CSS variables, paint attributes) is the
/// rendering layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkStyle {
    /// Overall series fill opacity, applied on top of the fill or gradient.
    pub fill_opacity: f64,
    /// Opacity of the top gradient stop.
    pub gradient_start_opacity: f64,
    /// Opacity of the bottom gradient stop.
    pub gradient_end_opacity: f64,
    /// Container width hint, px.
    pub width: f64,
    /// Container height hint, px.
    pub height: f64,
    /// Arbitrary parameters forwarded verbatim to the host container.
    pub extra: BTreeMap<String, String>,
}

impl Default for SparkStyle {
    fn default() -> Self {
        SparkStyle {
            fill_opacity: 0.2,
            gradient_start_opacity: 0.8,
            gradient_end_opacity: 0.0,
            width: 112.0,
            height: 48.0,
            extra: BTreeMap::new(),
        }
    }
}
