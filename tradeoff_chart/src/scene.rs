// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

/// Semantic role of a mark; becomes the SVG `class` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkClass {
    /// Background grid line.
    GridLine,
    /// Axis line.
    AxisLine,
    /// Text along an axis.
    AxisLabel,
    /// Axis title.
    AxisTitle,
    /// Line between a row's two options.
    ConnectingLine,
    /// Line from the origin to the aggregate endpoint.
    AggregateLine,
    /// Option A dot.
    DotA,
    /// Option B dot.
    DotB,
    /// Draggable option A dot of the active row.
    ActiveDotA,
    /// Draggable option B dot of the active row.
    ActiveDotB,
    /// Category text along a segment.
    CategoryLabel,
    /// Text along the aggregate segment.
    AggregateLabel,
    /// Option name above an endpoint.
    EndpointLabel,
    /// Instruction shown in place of an empty chart.
    InstructionText,
}

impl MarkClass {
    /// The class attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GridLine => "grid-line",
            Self::AxisLine => "axis-line",
            Self::AxisLabel => "axis-label",
            Self::AxisTitle => "axis-title",
            Self::ConnectingLine => "connecting-line",
            Self::AggregateLine => "connecting-line aggregate-line",
            Self::DotA => "dot option-a",
            Self::DotB => "dot option-b",
            Self::ActiveDotA => "dot option-a active",
            Self::ActiveDotB => "dot option-b active",
            Self::CategoryLabel => "category-label",
            Self::AggregateLabel => "category-label aggregate-label",
            Self::EndpointLabel => "endpoint-label",
            Self::InstructionText => "instruction-text",
        }
    }
}

/// Rotation of a label, in degrees, about `pivot`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Clockwise angle in degrees (render space, Y down).
    pub degrees: f64,
    /// Point the label rotates about.
    pub pivot: Point,
}

/// One drawable element, in render coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    /// A straight line.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Role.
        class: MarkClass,
    },
    /// A filled circle.
    Dot {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Role.
        class: MarkClass,
    },
    /// Horizontally centered text.
    Label {
        /// Anchor point (middle of the baseline) before rotation.
        position: Point,
        /// Text content.
        text: String,
        /// Optional rotation.
        rotation: Option<Rotation>,
        /// Role.
        class: MarkClass,
    },
}

impl Mark {
    /// Returns the mark's class.
    #[must_use]
    pub fn class(&self) -> MarkClass {
        match self {
            Self::Line { class, .. } | Self::Dot { class, .. } | Self::Label { class, .. } => {
                *class
            }
        }
    }
}

/// A group of marks drawn together, optionally faded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    /// Group opacity; `None` draws fully opaque.
    pub opacity: Option<f64>,
    /// Marks in paint order.
    pub marks: Vec<Mark>,
}

impl Layer {
    /// Creates an opaque, empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty layer drawn at `opacity`.
    #[must_use]
    pub fn faded(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            marks: Vec::new(),
        }
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, class: MarkClass) {
        self.marks.push(Mark::Line { from, to, class });
    }

    pub(crate) fn dot(&mut self, center: Point, radius: f64, class: MarkClass) {
        self.marks.push(Mark::Dot {
            center,
            radius,
            class,
        });
    }

    pub(crate) fn label(
        &mut self,
        position: Point,
        text: impl Into<String>,
        rotation: Option<Rotation>,
        class: MarkClass,
    ) {
        self.marks.push(Mark::Label {
            position,
            text: text.into(),
            rotation,
            class,
        });
    }
}

/// A laid-out chart: render size plus layers in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Layers, back to front.
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Iterates over all marks, back to front.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.layers.iter().flat_map(|l| l.marks.iter())
    }

    /// Iterates over marks with the given class.
    pub fn marks_of(&self, class: MarkClass) -> impl Iterator<Item = &Mark> {
        self.marks().filter(move |m| m.class() == class)
    }
}
