// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tradeoff Chart: headless layout and SVG export for decision charts.
//!
//! Two charts are laid out from a [`tradeoff_decision::Decision`]:
//! - The **placement chart** ([`layout_placement_chart`]): the normalized
//!   `[0, 1]^2` chart where each row's option dots are positioned. X is
//!   value, Y is joy.
//! - The **vector-addition chart** ([`layout_vector_chart`]): every placed
//!   row's A-to-B change chained head-to-tail from the origin, auto-fitted
//!   into a square viewport, plus the aggregate from the origin to the sum.
//!
//! Layout produces a [`Scene`]: layers of lines, dots and labels in render
//! coordinates, each tagged with a [`MarkClass`]. [`to_svg`] writes a scene
//! as an SVG document; other hosts can walk [`Scene::marks`] and draw with
//! their own backend.
//!
//! Sizes, offsets and axis text come from [`ChartConfig`]. With the `serde`
//! feature it can be deserialized; missing fields take their defaults.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use tradeoff_chart::{ChartConfig, layout_vector_chart, to_svg};
//! use tradeoff_decision::{Decision, RowId};
//!
//! let decision = Decision::starter()
//!     .place_row(RowId(0), Point::new(0.4, 0.5), Point::new(0.8, 0.6));
//!
//! let chart = layout_vector_chart(&decision, &ChartConfig::default());
//! let svg = to_svg(chart.scene().expect("one row is placed"));
//! assert!(svg.contains("aggregate-line"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod layout;
mod scene;
mod svg;

pub use config::{AxisLabels, ChartConfig};
pub use layout::{
    VectorChart, VectorChartLayout, label_angle, layout_empty_state, layout_placement_chart,
    layout_vector_chart,
};
pub use scene::{Layer, Mark, MarkClass, Rotation, Scene};
pub use svg::to_svg;
