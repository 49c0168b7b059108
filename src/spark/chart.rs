//! Chart Assembly Module
//! Composes colors, gradients, and fills into the declarative chart
//! description handed to the external rendering engine.

use crate::data::Sample;
use crate::spark::colors::{resolve_category_colors, DEFAULT_COLOR_TOKENS};
use crate::spark::fill::{fill_for, Fill, Variant};
use crate::spark::gradient::{gradient_id, GradientId, InstanceId};
use crate::spark::style::SparkStyle;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Category plotted when the caller supplies none.
pub const DEFAULT_CATEGORY: &str = "value";

// All layers of a stacked chart share this group id.
const STACK_GROUP: &str = "spark";

/// Curve interpolation, passed through to the renderer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    Linear,
    Monotone,
    Step,
    Natural,
}

/// Entry animation parameters for one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub enabled: bool,
    pub duration_ms: u64,
}

/// One gradient definition: a vertical fade between two stops of the
/// category's resolved color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientDef {
    pub id: GradientId,
    pub color: String,
    pub start_opacity: f64,
    pub end_opacity: f64,
}

/// The suppressed value axis that makes the chart a "spark": no ticks, no
/// labels, no axis line, zero width — only the auto-fit domain survives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxisSpec {
    pub width: f64,
    pub show_ticks: bool,
    pub show_tick_labels: bool,
    pub show_axis_line: bool,
    /// Observed (min, max) of the plotted data, never clipped to zero.
    /// `None` when no numeric point exists.
    pub domain: Option<(f64, f64)>,
}

/// Render description for one category's area layer.
///
/// Built fresh on every render pass, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub category: String,
    pub color: String,
    pub fill: Fill,
    pub stroke_width: f64,
    pub curve_type: Option<CurveType>,
    pub connect_nulls: bool,
    /// Shared across all layers when stacking; absent otherwise.
    pub stack_group: Option<String>,
    pub animation: Animation,
}

/// Complete declarative chart description for the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub gradients: Vec<GradientDef>,
    pub value_axis: ValueAxisSpec,
    pub layers: Vec<LayerSpec>,
    /// Input samples, unmodified and in original order.
    pub samples: Vec<Sample>,
    pub style: SparkStyle,
}

impl ChartSpec {
    /// Serialize for handing across the renderer boundary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Public configuration surface of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkAreaChartProps {
    pub data: Vec<Sample>,
    pub categories: Vec<String>,
    pub colors: Vec<String>,
    pub curve_type: Option<CurveType>,
    pub stroke_width: f64,
    pub variant: Variant,
    pub show_animation: bool,
    pub animation_duration: u64,
    pub connect_nulls: bool,
    pub stack: bool,
    pub style: SparkStyle,
}

impl Default for SparkAreaChartProps {
    fn default() -> Self {
        SparkAreaChartProps {
            data: Vec::new(),
            categories: vec![DEFAULT_CATEGORY.to_string()],
            colors: DEFAULT_COLOR_TOKENS.iter().map(|t| t.to_string()).collect(),
            curve_type: None,
            stroke_width: 1.0,
            variant: Variant::default(),
            show_animation: false,
            animation_duration: 500,
            connect_nulls: true,
            stack: false,
            style: SparkStyle::default(),
        }
    }
}

/// A mounted sparkline widget.
///
/// Construction is the mount point: it acquires the instance id that keeps
/// gradient ids stable across re-renders and distinct across sibling charts.
/// The id is released when the widget is dropped.
#[derive(Debug)]
pub struct SparkAreaChart {
    instance: InstanceId,
    props: SparkAreaChartProps,
    theme: Theme,
}

impl SparkAreaChart {
    pub fn new(props: SparkAreaChartProps) -> Self {
        Self::with_theme(props, Theme::default())
    }

    pub fn with_theme(props: SparkAreaChartProps, theme: Theme) -> Self {
        let instance = InstanceId::allocate();
        debug!(%instance, "mounted spark area chart");
        SparkAreaChart {
            instance,
            props,
            theme,
        }
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn props(&self) -> &SparkAreaChartProps {
        &self.props
    }

    /// Replace the configuration. The next `spec()` call recomputes the
    /// chart from scratch; gradient ids stay stable.
    pub fn set_props(&mut self, props: SparkAreaChartProps) {
        self.props = props;
    }

    /// Compute the chart description from the current props and theme.
    pub fn spec(&self) -> ChartSpec {
        assemble(self.instance, &self.props, &self.theme)
    }
}

/// Former name of [`SparkAreaChart`]; fully interchangeable.
#[deprecated(note = "renamed to SparkAreaChart")]
pub type SparkChart = SparkAreaChart;

/// Assemble the chart description for one render pass.
///
/// Pure over its inputs: no sorting, filtering, or aggregation of samples,
/// no caching, no side effects beyond logging.
pub fn assemble(instance: InstanceId, props: &SparkAreaChartProps, theme: &Theme) -> ChartSpec {
    let colors = resolve_category_colors(&props.categories, &props.colors, theme);

    // One gradient per category even when the current variant ignores them,
    // so toggling the variant without a remount cannot orphan a fill.
    let gradients: Vec<GradientDef> = colors
        .iter()
        .map(|(category, color)| GradientDef {
            id: gradient_id(instance, category),
            color: color.to_string(),
            start_opacity: props.style.gradient_start_opacity,
            end_opacity: props.style.gradient_end_opacity,
        })
        .collect();

    let value_axis = ValueAxisSpec {
        width: 0.0,
        show_ticks: false,
        show_tick_labels: false,
        show_axis_line: false,
        domain: observed_domain(&props.data, &props.categories),
    };

    let stack_group = props.stack.then(|| STACK_GROUP.to_string());
    let animation = Animation {
        enabled: props.show_animation,
        duration_ms: props.animation_duration,
    };

    let layers: Vec<LayerSpec> = colors
        .iter()
        .map(|(category, color)| LayerSpec {
            category: category.to_string(),
            color: color.to_string(),
            fill: fill_for(props.variant, color, &gradient_id(instance, category)),
            stroke_width: props.stroke_width,
            curve_type: props.curve_type,
            connect_nulls: props.connect_nulls,
            stack_group: stack_group.clone(),
            animation,
        })
        .collect();

    debug!(
        %instance,
        layers = layers.len(),
        samples = props.data.len(),
        "assembled chart spec"
    );

    ChartSpec {
        gradients,
        value_axis,
        layers,
        samples: props.data.clone(),
        style: props.style.clone(),
    }
}

/// Observed (min, max) across all plotted categories, ignoring text, null,
/// and non-finite values. `None` when nothing is plottable.
fn observed_domain(samples: &[Sample], categories: &[String]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for sample in samples {
        for category in categories {
            if let Some(v) = sample.number(category) {
                if v.is_finite() {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
    }

    (min <= max).then_some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn value_samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .map(|&v| Sample::new().with_number("value", v))
            .collect()
    }

    #[test]
    fn props_defaults_match_the_public_surface() {
        let props = SparkAreaChartProps::default();
        assert!(props.data.is_empty());
        assert_eq!(props.categories, vec!["value"]);
        assert_eq!(props.colors, vec!["primary", "gray"]);
        assert_eq!(props.curve_type, None);
        assert_eq!(props.stroke_width, 1.0);
        assert_eq!(props.variant, Variant::Gradient);
        assert!(!props.show_animation);
        assert_eq!(props.animation_duration, 500);
        assert!(props.connect_nulls);
        assert!(!props.stack);
    }

    #[test]
    fn empty_categories_yield_zero_layers_and_gradients() {
        let chart = SparkAreaChart::new(SparkAreaChartProps {
            data: value_samples(&[1.0, 2.0, 3.0]),
            categories: Vec::new(),
            ..Default::default()
        });

        let spec = chart.spec();
        assert!(spec.layers.is_empty());
        assert!(spec.gradients.is_empty());
        // samples still pass through untouched
        assert_eq!(spec.samples.len(), 3);
    }

    #[test]
    fn empty_samples_are_a_valid_empty_plot() {
        let spec = SparkAreaChart::new(SparkAreaChartProps::default()).spec();
        assert!(spec.samples.is_empty());
        assert_eq!(spec.layers.len(), 1);
        assert_eq!(spec.value_axis.domain, None);
    }

    #[test]
    fn value_axis_is_fully_suppressed() {
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            data: value_samples(&[1.0, 2.0]),
            ..Default::default()
        })
        .spec();

        let axis = &spec.value_axis;
        assert_eq!(axis.width, 0.0);
        assert!(!axis.show_ticks);
        assert!(!axis.show_tick_labels);
        assert!(!axis.show_axis_line);
    }

    #[test]
    fn domain_fits_observed_data_and_is_not_clipped_to_zero() {
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            data: value_samples(&[5.0, 9.0, 7.0]),
            ..Default::default()
        })
        .spec();
        assert_eq!(spec.value_axis.domain, Some((5.0, 9.0)));

        let negative = SparkAreaChart::new(SparkAreaChartProps {
            data: value_samples(&[-4.0, -1.5]),
            ..Default::default()
        })
        .spec();
        assert_eq!(negative.value_axis.domain, Some((-4.0, -1.5)));
    }

    #[test]
    fn domain_spans_all_plotted_categories() {
        let data = vec![
            Sample::new().with_number("a", 2.0).with_number("b", 10.0),
            Sample::new().with_number("a", 1.0).with_number("b", 4.0),
        ];
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            data,
            categories: cats(&["a", "b"]),
            ..Default::default()
        })
        .spec();
        assert_eq!(spec.value_axis.domain, Some((1.0, 10.0)));
    }

    #[test]
    fn stacking_shares_one_group_across_all_layers() {
        let props = SparkAreaChartProps {
            data: value_samples(&[1.0]),
            categories: cats(&["a", "b", "c"]),
            stack: true,
            ..Default::default()
        };
        let spec = SparkAreaChart::new(props).spec();

        let groups: Vec<&Option<String>> =
            spec.layers.iter().map(|l| &l.stack_group).collect();
        assert_eq!(spec.layers.len(), 3);
        assert!(groups.iter().all(|g| g.is_some()));
        assert!(groups.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn unstacked_layers_carry_no_group() {
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            categories: cats(&["a", "b"]),
            ..Default::default()
        })
        .spec();
        assert!(spec.layers.iter().all(|l| l.stack_group.is_none()));
    }

    #[test]
    fn null_samples_pass_through_with_connect_nulls() {
        let data = vec![
            Sample::new().with_number("value", 1.0),
            Sample::new().with_null("value"),
            Sample::new().with_number("value", 3.0),
        ];
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            data: data.clone(),
            ..Default::default()
        })
        .spec();

        // no filtering of the null-bearing sample
        assert_eq!(spec.samples, data);
        assert!(spec.layers[0].connect_nulls);
        assert_eq!(spec.value_axis.domain, Some((1.0, 3.0)));
    }

    #[test]
    fn gradients_are_emitted_even_for_the_line_variant() {
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            categories: cats(&["a", "b"]),
            variant: Variant::Line,
            ..Default::default()
        })
        .spec();

        assert_eq!(spec.gradients.len(), 2);
        assert!(spec.layers.iter().all(|l| l.fill == Fill::Transparent));
    }

    #[test]
    fn gradient_defs_read_both_opacity_knobs_symmetrically() {
        let style = SparkStyle {
            gradient_start_opacity: 0.6,
            gradient_end_opacity: 0.1,
            ..Default::default()
        };
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            style,
            ..Default::default()
        })
        .spec();

        assert_eq!(spec.gradients[0].start_opacity, 0.6);
        assert_eq!(spec.gradients[0].end_opacity, 0.1);
    }

    #[test]
    fn gradient_fill_references_the_matching_definition() {
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            categories: cats(&["a", "b"]),
            ..Default::default()
        })
        .spec();

        for (layer, def) in spec.layers.iter().zip(&spec.gradients) {
            assert_eq!(layer.fill, Fill::Gradient(def.id.clone()));
        }
    }

    #[test]
    fn gradient_ids_survive_prop_changes_without_remount() {
        let mut chart = SparkAreaChart::new(SparkAreaChartProps::default());
        let before = chart.spec().gradients[0].id.clone();

        chart.set_props(SparkAreaChartProps {
            variant: Variant::Solid,
            stroke_width: 2.0,
            ..Default::default()
        });
        let after = chart.spec().gradients[0].id.clone();
        assert_eq!(before, after);
    }

    #[test]
    fn sibling_charts_never_share_gradient_ids() {
        let first = SparkAreaChart::new(SparkAreaChartProps::default()).spec();
        let second = SparkAreaChart::new(SparkAreaChartProps::default()).spec();
        assert_ne!(first.gradients[0].id, second.gradients[0].id);
    }

    #[test]
    fn pass_through_props_reach_the_layers() {
        let spec = SparkAreaChart::new(SparkAreaChartProps {
            curve_type: Some(CurveType::Monotone),
            stroke_width: 2.5,
            show_animation: true,
            animation_duration: 900,
            connect_nulls: false,
            ..Default::default()
        })
        .spec();

        let layer = &spec.layers[0];
        assert_eq!(layer.curve_type, Some(CurveType::Monotone));
        assert_eq!(layer.stroke_width, 2.5);
        assert!(layer.animation.enabled);
        assert_eq!(layer.animation.duration_ms, 900);
        assert!(!layer.connect_nulls);
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_alias_is_interchangeable() {
        let chart: SparkChart = SparkChart::new(SparkAreaChartProps::default());
        assert_eq!(chart.spec().layers.len(), 1);
    }
}
