//! sparkarea - compact axis-less area chart ("sparkline") core
//!
//! Turns an array of labeled numeric samples into a declarative chart
//! description: per-category colors resolved from theme tokens, one gradient
//! definition per category, a suppressed auto-ranging value axis, and one
//! area layer per category. Actual drawing, responsive sizing, and host
//! materialization belong to an external rendering engine that consumes the
//! serialized [`ChartSpec`].
//!
//! ```
//! use sparkarea::{Sample, SparkAreaChart, SparkAreaChartProps};
//!
//! let props = SparkAreaChartProps {
//!     data: vec![
//!         Sample::new().with_text("month", "Jan").with_number("value", 4.0),
//!         Sample::new().with_text("month", "Feb").with_number("value", 7.5),
//!         Sample::new().with_text("month", "Mar").with_number("value", 6.0),
//!     ],
//!     ..Default::default()
//! };
//!
//! let chart = SparkAreaChart::new(props);
//! let spec = chart.spec();
//! assert_eq!(spec.layers.len(), 1);
//! assert_eq!(spec.value_axis.domain, Some((4.0, 7.5)));
//! ```

pub mod data;
pub mod spark;
pub mod theme;

pub use data::{FieldValue, Sample};
pub use spark::{
    Animation, ChartSpec, CurveType, Fill, GradientDef, LayerSpec, SparkAreaChart,
    SparkAreaChartProps, SparkStyle, ValueAxisSpec, Variant,
};
#[allow(deprecated)]
pub use spark::SparkChart;
pub use theme::{Theme, ThemeError};
