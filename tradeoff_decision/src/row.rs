// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use kurbo::Point;
use tradeoff_path::Vector;

/// Identifier of a [`ComparisonRow`] within one [`crate::Decision`].
///
/// Ids are allocated in increasing order and never reused, even after the
/// row is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// One of the two draggable dots of a row: option A or option B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dot {
    /// The dot for the first option.
    A,
    /// The dot for the second option.
    B,
}

/// Where a row's two options sit on the normalized `[0, 1]^2` chart.
///
/// X is "how valuable", Y is "how it feels"; both in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Position of option A.
    pub a: Point,
    /// Position of option B.
    pub b: Point,
}

impl Placement {
    /// Where a dot starts before the user moves it.
    pub const CENTER: Point = Point::new(0.5, 0.5);

    /// Both dots at [`Placement::CENTER`].
    pub const CENTERED: Self = Self {
        a: Self::CENTER,
        b: Self::CENTER,
    };

    /// Creates a placement, clamping both points into the unit square.
    #[must_use]
    pub fn clamped(a: Point, b: Point) -> Self {
        Self {
            a: clamp_unit(a),
            b: clamp_unit(b),
        }
    }

    /// Returns the position of `dot`.
    #[must_use]
    pub fn get(&self, dot: Dot) -> Point {
        match dot {
            Dot::A => self.a,
            Dot::B => self.b,
        }
    }

    /// Returns a copy with `dot` moved to `pos` (clamped into the unit square).
    #[must_use]
    pub fn with(self, dot: Dot, pos: Point) -> Self {
        let pos = clamp_unit(pos);
        match dot {
            Dot::A => Self { a: pos, ..self },
            Dot::B => Self { b: pos, ..self },
        }
    }

    /// Returns `true` if both points are finite and inside the unit square.
    #[must_use]
    pub fn is_in_unit_square(&self) -> bool {
        in_unit(self.a) && in_unit(self.b)
    }
}

pub(crate) fn in_unit(p: Point) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}

// NaN coordinates collapse to 0 here; `max`/`min` pick the non-NaN side.
fn clamp_unit(p: Point) -> Point {
    Point::new(p.x.max(0.0).min(1.0), p.y.max(0.0).min(1.0))
}

/// One category compared between the two options.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    /// Stable identifier.
    pub id: RowId,
    /// Category label, for example `"Salary"`.
    pub category: String,
    /// Free-form description of option A in this category.
    pub option_a: String,
    /// Free-form description of option B in this category.
    pub option_b: String,
    /// Chart placement, `None` until the row has been placed.
    pub placement: Option<Placement>,
}

impl ComparisonRow {
    /// Creates an unplaced row.
    #[must_use]
    pub fn new(
        id: RowId,
        category: impl Into<String>,
        option_a: impl Into<String>,
        option_b: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            option_a: option_a.into(),
            option_b: option_b.into(),
            placement: None,
        }
    }

    /// Returns `true` once the row has a chart placement.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Returns the change from option A to option B, if placed.
    #[must_use]
    pub fn vector(&self) -> Option<Vector<RowId>> {
        self.placement
            .map(|p| Vector::between(self.id, p.a, p.b))
    }

    /// Label to show next to a dot; falls back to `"A"`/`"B"` when the option text is empty.
    #[must_use]
    pub fn dot_label(&self, dot: Dot) -> &str {
        match dot {
            Dot::A if self.option_a.is_empty() => "A",
            Dot::A => self.option_a.as_str(),
            Dot::B if self.option_b.is_empty() => "B",
            Dot::B => self.option_b.as_str(),
        }
    }
}

/// Partial update of a row's text fields; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowUpdate {
    /// New category label.
    pub category: Option<String>,
    /// New option A text.
    pub option_a: Option<String>,
    /// New option B text.
    pub option_b: Option<String>,
}

impl RowUpdate {
    /// Sets the category label.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the option A text.
    #[must_use]
    pub fn option_a(mut self, text: impl Into<String>) -> Self {
        self.option_a = Some(text.into());
        self
    }

    /// Sets the option B text.
    #[must_use]
    pub fn option_b(mut self, text: impl Into<String>) -> Self {
        self.option_b = Some(text.into());
        self
    }

    pub(crate) fn apply(self, row: &mut ComparisonRow) {
        if let Some(category) = self.category {
            row.category = category;
        }
        if let Some(text) = self.option_a {
            row.option_a = text;
        }
        if let Some(text) = self.option_b {
            row.option_b = text;
        }
    }
}
