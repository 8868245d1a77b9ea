// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use tradeoff_path::RenderFrame;

/// Text for the low end, the middle, and the high end of one axis.
///
/// When deserialized, entries left out of a triple are blank.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AxisLabels {
    /// Label at the minimum end.
    pub low: String,
    /// Label in the middle (or at the origin for the vector chart).
    pub mid: String,
    /// Label at the maximum end.
    pub high: String,
}

impl AxisLabels {
    /// Creates a label triple.
    #[must_use]
    pub fn new(low: impl Into<String>, mid: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: low.into(),
            mid: mid.into(),
            high: high.into(),
        }
    }
}

/// Geometry and text used by both chart layouts.
///
/// Lengths are in render pixels; offsets are added to a label's `y` before
/// rotation, so negative values lift labels above their line or dot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ChartConfig {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Padding around the inner canvas.
    pub padding: f64,
    /// Viewport padding of the vector chart, relative to the data extent.
    pub padding_fraction: f64,
    /// Grid line positions as fractions of the viewport range.
    pub grid_fractions: Vec<f64>,
    /// Distance of rotated axis labels from the left edge, and of bottom
    /// axis labels from the bottom edge.
    pub axis_label_inset: f64,
    /// Distance of axis titles from the left and bottom edges.
    pub axis_title_inset: f64,
    /// Label offset for category segments.
    pub segment_label_offset: f64,
    /// Label offset for the aggregate segment.
    pub aggregate_label_offset: f64,
    /// Offset of option-name labels above their endpoint markers.
    pub endpoint_label_offset: f64,
    /// Offset of option labels above the active row's dots.
    pub active_label_offset: f64,
    /// Dot radius on vector-chart segments.
    pub marker_radius: f64,
    /// Radius of the origin and aggregate markers.
    pub endpoint_radius: f64,
    /// Dot radius of placed, inactive rows on the placement chart.
    pub placed_radius: f64,
    /// Dot radius of the active row on the placement chart.
    pub active_radius: f64,
    /// Opacity of segments and inactive rows.
    pub dimmed_opacity: f64,
    /// Label of the aggregate segment.
    pub aggregate_label: String,
    /// Text shown instead of the vector chart while no row is placed.
    pub empty_message: String,
    /// Vector chart, horizontal axis.
    pub vector_x_labels: AxisLabels,
    /// Vector chart, vertical axis.
    pub vector_y_labels: AxisLabels,
    /// Placement chart, horizontal axis.
    pub placement_x_labels: AxisLabels,
    /// Placement chart, vertical axis.
    pub placement_y_labels: AxisLabels,
    /// Placement chart, horizontal axis title.
    pub placement_x_title: String,
    /// Placement chart, vertical axis title.
    pub placement_y_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            padding: 60.0,
            padding_fraction: 0.2,
            grid_fractions: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            axis_label_inset: 20.0,
            axis_title_inset: 5.0,
            segment_label_offset: -8.0,
            aggregate_label_offset: -12.0,
            endpoint_label_offset: -12.0,
            active_label_offset: -15.0,
            marker_radius: 4.0,
            endpoint_radius: 6.0,
            placed_radius: 6.0,
            active_radius: 8.0,
            dimmed_opacity: 0.5,
            aggregate_label: String::from("Aggregate"),
            empty_message: String::from(
                "Place at least one category on the chart to see the vector addition",
            ),
            vector_x_labels: AxisLabels::new("Less Valuable", "Equal", "More Valuable"),
            vector_y_labels: AxisLabels::new("Less Joy", "Equal", "More Joy"),
            placement_x_labels: AxisLabels::new("Not Valuable", "Neutral", "Very Valuable"),
            placement_y_labels: AxisLabels::new("Ugh", "Neutral", "Sparks Joy"),
            placement_x_title: String::from("\u{2190} Value \u{2192}"),
            placement_y_title: String::from("Joy \u{2192}"),
        }
    }
}

impl ChartConfig {
    /// The render frame described by `width`, `height` and `padding`.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(self.width, self.height, self.padding)
    }
}
