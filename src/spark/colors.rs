//! Color Resolver Module
//! Assigns each plotted category a concrete display color.

use crate::theme::Theme;
use serde::Serialize;

/// Token list applied when the caller supplies none.
pub const DEFAULT_COLOR_TOKENS: &[&str] = &["primary", "gray"];

/// Resolved colors for the active category list.
///
/// Holds exactly one entry per category, in the caller's order. Built once
/// per render as a pure function of (categories, tokens, theme).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryColorMap {
    entries: Vec<(String, String)>,
}

impl CategoryColorMap {
    pub fn color_of(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(cat, _)| cat == category)
            .map(|(_, color)| color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(cat, color)| (cat.as_str(), color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a color per category from the requested token list.
///
/// Category `i` receives token `i % tokens.len()` — the token list cycles
/// from the start when there are more categories than tokens. Tokens with
/// no theme entry pass through as literal color values.
pub fn resolve_category_colors(
    categories: &[String],
    tokens: &[String],
    theme: &Theme,
) -> CategoryColorMap {
    let fallback: Vec<String>;
    let tokens = if tokens.is_empty() {
        fallback = DEFAULT_COLOR_TOKENS.iter().map(|t| t.to_string()).collect();
        &fallback
    } else {
        tokens
    };

    let entries = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let token = &tokens[i % tokens.len()];
            (category.clone(), theme.resolve_or_literal(token))
        })
        .collect();

    CategoryColorMap { entries }
}
