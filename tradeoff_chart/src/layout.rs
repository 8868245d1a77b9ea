// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;

use kurbo::{Point, Rect};
use tradeoff_decision::{Decision, Dot, RowId};
use tradeoff_path::{Accumulation, Projection, Viewport};

use crate::config::{AxisLabels, ChartConfig};
use crate::scene::{Layer, MarkClass, Rotation, Scene};

/// Rotation in degrees that keeps text along `start -> end` readable.
///
/// The screen-space direction angle is folded into `[-90, 90]` so labels
/// never render upside down.
#[must_use]
pub fn label_angle(start: Point, end: Point) -> f64 {
    let angle = (end - start).atan2().to_degrees();
    if angle > 90.0 {
        angle - 180.0
    } else if angle < -90.0 {
        angle + 180.0
    } else {
        angle
    }
}

/// Layout of the vector-addition chart for a decision with placed rows.
#[derive(Clone, Debug)]
pub struct VectorChartLayout {
    /// The accumulated path, keyed by row.
    pub path: Accumulation<RowId>,
    /// Data-to-render mapping fitted around the path.
    pub projection: Projection,
    /// Drawable marks.
    pub scene: Scene,
}

/// Result of [`layout_vector_chart`].
#[derive(Clone, Debug)]
pub enum VectorChart {
    /// No row is placed yet; show an empty state instead of a chart.
    Empty,
    /// The chart was laid out.
    Laid(VectorChartLayout),
}

impl VectorChart {
    /// Returns `true` when there was nothing to lay out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the scene, if laid out.
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Self::Empty => None,
            Self::Laid(layout) => Some(&layout.scene),
        }
    }
}

/// Scene shown in place of the vector chart while no row is placed: the
/// configured instruction centered on an otherwise blank surface.
#[must_use]
pub fn layout_empty_state(config: &ChartConfig) -> Scene {
    let mut layer = Layer::new();
    layer.label(
        config.frame().inner_rect().center(),
        config.empty_message.as_str(),
        None,
        MarkClass::InstructionText,
    );
    Scene {
        width: config.width,
        height: config.height,
        layers: vec![layer],
    }
}

/// Lays out the vector-addition chart.
///
/// Each placed row becomes one faded segment, chained head-to-tail from the
/// origin in row order. The aggregate segment runs from the origin (labelled
/// with option A's name) to the sum of all rows (labelled with option B's
/// name). Grid lines sit at `grid_fractions` of the fitted viewport and the
/// axes cross at the data origin.
#[must_use]
pub fn layout_vector_chart(decision: &Decision, config: &ChartConfig) -> VectorChart {
    let path = decision.accumulate();
    if path.is_empty() {
        return VectorChart::Empty;
    }
    let projection = Projection::new(path.viewport(config.padding_fraction), config.frame());
    let inner = projection.frame().inner_rect();
    let origin = projection.to_view(Point::ORIGIN);
    let aggregate = projection.to_view(path.aggregate_end());

    let mut base = Layer::new();
    for value in projection.viewport().grid_values(&config.grid_fractions) {
        let x = projection.to_view(Point::new(value.x, 0.0)).x;
        let y = projection.to_view(Point::new(0.0, value.y)).y;
        base.line(Point::new(x, inner.y0), Point::new(x, inner.y1), MarkClass::GridLine);
        base.line(Point::new(inner.x0, y), Point::new(inner.x1, y), MarkClass::GridLine);
    }
    base.line(
        Point::new(origin.x, inner.y0),
        Point::new(origin.x, inner.y1),
        MarkClass::AxisLine,
    );
    base.line(
        Point::new(inner.x0, origin.y),
        Point::new(inner.x1, origin.y),
        MarkClass::AxisLine,
    );
    push_y_axis_labels(
        &mut base,
        config,
        &config.vector_y_labels,
        [inner.y1, origin.y, inner.y0],
    );
    push_x_axis_labels(
        &mut base,
        config,
        &config.vector_x_labels,
        [inner.x0, origin.x, inner.x1],
    );

    let mut layers = vec![base];
    for pos in path.positions() {
        let category = decision
            .row(pos.key)
            .map_or("", |row| row.category.as_str());
        let start = projection.to_view(pos.start);
        let end = projection.to_view(pos.end);
        let mut layer = Layer::faded(config.dimmed_opacity);
        push_segment(
            &mut layer,
            start,
            end,
            category,
            config.segment_label_offset,
            MarkClass::ConnectingLine,
            MarkClass::CategoryLabel,
        );
        layer.dot(start, config.marker_radius, MarkClass::DotA);
        layer.dot(end, config.marker_radius, MarkClass::DotB);
        layers.push(layer);
    }

    let mut top = Layer::new();
    push_segment(
        &mut top,
        origin,
        aggregate,
        config.aggregate_label.as_str(),
        config.aggregate_label_offset,
        MarkClass::AggregateLine,
        MarkClass::AggregateLabel,
    );
    top.dot(origin, config.endpoint_radius, MarkClass::DotA);
    top.dot(aggregate, config.endpoint_radius, MarkClass::DotB);
    top.label(
        Point::new(origin.x, origin.y + config.endpoint_label_offset),
        decision.option_a_name(),
        None,
        MarkClass::EndpointLabel,
    );
    top.label(
        Point::new(aggregate.x, aggregate.y + config.endpoint_label_offset),
        decision.option_b_name(),
        None,
        MarkClass::EndpointLabel,
    );
    layers.push(top);

    VectorChart::Laid(VectorChartLayout {
        path,
        projection,
        scene: Scene {
            width: config.width,
            height: config.height,
            layers,
        },
    })
}

/// Lays out the placement chart: the normalized `[0, 1]^2` chart on which
/// each row's two dots are positioned.
///
/// Placed rows other than the active one are faded. The active row is drawn
/// last with larger dots, each labelled with its option text. Unplaced rows
/// are not drawn.
#[must_use]
pub fn layout_placement_chart(decision: &Decision, config: &ChartConfig) -> Scene {
    let projection = Projection::unit(config.frame());
    let inner = projection.frame().inner_rect();
    let center = inner.center();

    let mut base = Layer::new();
    for value in Viewport::UNIT.grid_values(&config.grid_fractions) {
        let p = projection.to_view(value);
        base.line(Point::new(inner.x0, p.y), Point::new(inner.x1, p.y), MarkClass::GridLine);
        base.line(Point::new(p.x, inner.y0), Point::new(p.x, inner.y1), MarkClass::GridLine);
    }
    base.line(
        Point::new(inner.x0, inner.y0),
        Point::new(inner.x0, inner.y1),
        MarkClass::AxisLine,
    );
    base.line(
        Point::new(inner.x0, inner.y1),
        Point::new(inner.x1, inner.y1),
        MarkClass::AxisLine,
    );
    push_y_axis_labels(
        &mut base,
        config,
        &config.placement_y_labels,
        [inner.y1, center.y, inner.y0],
    );
    push_axis_titles(&mut base, config, inner);
    push_x_axis_labels(
        &mut base,
        config,
        &config.placement_x_labels,
        [inner.x0, center.x, inner.x1],
    );

    let active = decision.active_row_id();
    let mut layers = vec![base];
    for row in decision.rows().iter().filter(|r| Some(r.id) != active) {
        let Some(placement) = row.placement else {
            continue;
        };
        let a = projection.to_view(placement.a);
        let b = projection.to_view(placement.b);
        let mut layer = Layer::faded(config.dimmed_opacity);
        push_segment(
            &mut layer,
            a,
            b,
            row.category.as_str(),
            config.segment_label_offset,
            MarkClass::ConnectingLine,
            MarkClass::CategoryLabel,
        );
        layer.dot(a, config.placed_radius, MarkClass::DotA);
        layer.dot(b, config.placed_radius, MarkClass::DotB);
        layers.push(layer);
    }

    if let Some(row) = decision.active_row()
        && let Some(placement) = row.placement
    {
        let a = projection.to_view(placement.a);
        let b = projection.to_view(placement.b);
        let mut layer = Layer::new();
        push_segment(
            &mut layer,
            a,
            b,
            row.category.as_str(),
            config.segment_label_offset,
            MarkClass::ConnectingLine,
            MarkClass::CategoryLabel,
        );
        for (dot, at, class) in [
            (Dot::A, a, MarkClass::ActiveDotA),
            (Dot::B, b, MarkClass::ActiveDotB),
        ] {
            layer.dot(at, config.active_radius, class);
            layer.label(
                Point::new(at.x, at.y + config.active_label_offset),
                row.dot_label(dot),
                None,
                MarkClass::EndpointLabel,
            );
        }
        layers.push(layer);
    }

    Scene {
        width: config.width,
        height: config.height,
        layers,
    }
}

/// Line from `start` to `end` with `text` at its midpoint, rotated to follow it.
fn push_segment(
    layer: &mut Layer,
    start: Point,
    end: Point,
    text: &str,
    label_offset: f64,
    line_class: MarkClass,
    label_class: MarkClass,
) {
    layer.line(start, end, line_class);
    let mid = start.midpoint(end);
    layer.label(
        Point::new(mid.x, mid.y + label_offset),
        text,
        Some(Rotation {
            degrees: label_angle(start, end),
            pivot: mid,
        }),
        label_class,
    );
}

/// Vertical axis labels at `ys` (low, mid, high), rotated to read bottom-up.
fn push_y_axis_labels(layer: &mut Layer, config: &ChartConfig, labels: &AxisLabels, ys: [f64; 3]) {
    let x = config.axis_label_inset;
    for (text, y) in [&labels.low, &labels.mid, &labels.high].into_iter().zip(ys) {
        let at = Point::new(x, y);
        layer.label(
            at,
            text.as_str(),
            Some(Rotation {
                degrees: -90.0,
                pivot: at,
            }),
            MarkClass::AxisLabel,
        );
    }
}

fn push_x_axis_labels(layer: &mut Layer, config: &ChartConfig, labels: &AxisLabels, xs: [f64; 3]) {
    let y = config.height - config.axis_label_inset;
    for (text, x) in [&labels.low, &labels.mid, &labels.high].into_iter().zip(xs) {
        layer.label(Point::new(x, y), text.as_str(), None, MarkClass::AxisLabel);
    }
}

fn push_axis_titles(layer: &mut Layer, config: &ChartConfig, inner: Rect) {
    let center = inner.center();
    let y_title = Point::new(config.axis_title_inset, center.y);
    layer.label(
        y_title,
        config.placement_y_title.as_str(),
        Some(Rotation {
            degrees: -90.0,
            pivot: y_title,
        }),
        MarkClass::AxisTitle,
    );
    layer.label(
        Point::new(center.x, config.height - config.axis_title_inset),
        config.placement_x_title.as_str(),
        None,
        MarkClass::AxisTitle,
    );
}
