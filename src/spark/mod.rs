//! Spark module - sparkline composition core

mod chart;
mod colors;
mod fill;
mod gradient;
mod style;

pub use chart::{
    assemble, Animation, ChartSpec, CurveType, GradientDef, LayerSpec, SparkAreaChart,
    SparkAreaChartProps, ValueAxisSpec, DEFAULT_CATEGORY,
};
#[allow(deprecated)]
pub use chart::SparkChart;
pub use colors::{resolve_category_colors, CategoryColorMap, DEFAULT_COLOR_TOKENS};
pub use fill::{fill_for, Fill, Variant};
pub use gradient::{gradient_id, GradientId, InstanceId};
pub use style::SparkStyle;
