//! Built-in Palette Module
//! Default color-token table used by `Theme::default()`.

/// Default token -> display color table.
///
/// `primary` and `gray` back the default token list of the chart; the rest
/// is the standard chart palette available to callers by name.
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("primary", "#3b82f6"),
    ("gray", "#6b7280"),
    ("slate", "#64748b"),
    ("red", "#ef4444"),
    ("orange", "#f97316"),
    ("amber", "#f59e0b"),
    ("yellow", "#eab308"),
    ("lime", "#84cc16"),
    ("green", "#22c55e"),
    ("emerald", "#10b981"),
    ("teal", "#14b8a6"),
    ("cyan", "#06b6d4"),
    ("sky", "#0ea5e9"),
    ("blue", "#3b82f6"),
    ("indigo", "#6366f1"),
    ("violet", "#8b5cf6"),
    ("purple", "#a855f7"),
    ("fuchsia", "#d946ef"),
    ("pink", "#ec4899"),
    ("rose", "#f43f5e"),
];
