//! Theme module - color-token lookup
//! Maps semantic color tokens (e.g. "primary", "emerald") to display colors.

mod palette;

pub use palette::DEFAULT_PALETTE;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown color token: {0}")]
    UnknownToken(String),
}

/// Lookup table from color token to concrete display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    colors: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_PALETTE
            .iter()
            .map(|&(token, color)| (token.to_string(), color.to_string()))
            .collect()
    }
}

impl Theme {
    /// An empty theme with no token entries.
    pub fn empty() -> Self {
        Theme {
            colors: BTreeMap::new(),
        }
    }

    /// Add or replace a token entry.
    pub fn set(&mut self, token: &str, color: &str) {
        self.colors.insert(token.to_string(), color.to_string());
    }

    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    /// Permissive resolution used on the render path: a token with no theme
    /// entry is treated as a literal color value and passed through as-is.
    pub fn resolve_or_literal(&self, token: &str) -> String {
        match self.resolve(token) {
            Some(color) => color.to_string(),
            None => token.to_string(),
        }
    }

    /// Strict resolution for callers that validate a token list up front.
    pub fn try_resolve(&self, token: &str) -> Result<&str, ThemeError> {
        self.resolve(token)
            .ok_or_else(|| ThemeError::UnknownToken(token.to_string()))
    }
}

impl FromIterator<(String, String)> for Theme {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Theme {
            colors: iter.into_iter().collect(),
        }
    }
}
