// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter;

use kurbo::{Point, Rect};

use crate::accumulate::CumulativePosition;

/// Square, padded window over data space.
///
/// `max_x - min_x == max_y - min_y == range` for every viewport produced by
/// [`compute_viewport`], so angles and magnitudes are not distorted when the
/// viewport is mapped onto a square canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge in data space.
    pub min_x: f64,
    /// Right edge in data space.
    pub max_x: f64,
    /// Bottom edge in data space.
    pub min_y: f64,
    /// Top edge in data space.
    pub max_y: f64,
    /// Side length shared by both axes.
    pub range: f64,
}

impl Viewport {
    /// Side length used when every fitted point coincides.
    pub const MIN_RANGE: f64 = 1.0;

    /// The fixed `[0, 1] x [0, 1]` window of a normalized chart.
    pub const UNIT: Self = Self {
        min_x: 0.0,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 1.0,
        range: 1.0,
    };

    /// Creates a square viewport with its minimum corner at `min`.
    #[must_use]
    pub fn square(min: Point, range: f64) -> Self {
        Self {
            min_x: min.x,
            max_x: min.x + range,
            min_y: min.y,
            max_y: min.y + range,
            range,
        }
    }

    /// Creates a square viewport of side `range` centered on `center`.
    #[must_use]
    pub fn centered(center: Point, range: f64) -> Self {
        let half = range / 2.0;
        Self::square(Point::new(center.x - half, center.y - half), range)
    }

    /// Fits a square viewport around `points`.
    ///
    /// Each axis is first padded outward by `padding_fraction` of its own
    /// extent on both ends. The narrower padded axis is then widened
    /// symmetrically to match the wider one. If the result has no extent at
    /// all, a square of `min_range` centered on the points is used instead.
    ///
    /// No point is implied: with an empty iterator the fit is around the
    /// origin. A NaN coordinate anywhere makes every field NaN.
    #[must_use]
    pub fn fit_points<I>(points: I, padding_fraction: f64, min_range: f64) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next().unwrap_or(Point::ORIGIN);
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        let mut saw_nan = first.is_nan();
        for p in points {
            // `min`/`max` skip NaN operands.
            saw_nan |= p.is_nan();
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        if saw_nan {
            return Self::square(Point::new(f64::NAN, f64::NAN), f64::NAN);
        }

        let pad_x = (max_x - min_x) * padding_fraction;
        let pad_y = (max_y - min_y) * padding_fraction;
        let (min_x, max_x) = (min_x - pad_x, max_x + pad_x);
        let (min_y, max_y) = (min_y - pad_y, max_y + pad_y);

        let width = max_x - min_x;
        let height = max_y - min_y;
        let range = width.max(height);

        if range <= 0.0 {
            let center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
            return Self::centered(center, min_range);
        }

        let grow_x = (range - width) / 2.0;
        let grow_y = (range - height) / 2.0;
        Self {
            min_x: min_x - grow_x,
            max_x: max_x + grow_x,
            min_y: min_y - grow_y,
            max_y: max_y + grow_y,
            range,
        }
    }

    /// Returns the viewport as a data-space rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Returns the center of the viewport in data space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.range / 2.0,
            self.min_y + self.range / 2.0,
        )
    }

    /// Returns `true` if the viewport cannot be projected (zero or negative range).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.range <= 0.0
    }

    /// Returns data-space coordinates at the given fractions of the range.
    ///
    /// For each fraction `t` this yields `(min_x + t * range, min_y + t * range)`;
    /// the `x` component positions a vertical grid line and the `y`
    /// component a horizontal one.
    pub fn grid_values<'a>(&self, fractions: &'a [f64]) -> impl Iterator<Item = Point> + use<'a> {
        let Self {
            min_x,
            min_y,
            range,
            ..
        } = *self;
        fractions
            .iter()
            .map(move |t| Point::new(min_x + t * range, min_y + t * range))
    }
}

/// Computes the square, padded viewport around accumulated positions.
///
/// The origin is always part of the fit, alongside every position's start
/// and end. `padding_fraction` is relative to each axis' extent (`0.2` adds
/// 20% on each side). Coincident input falls back to
/// [`Viewport::MIN_RANGE`]; see [`compute_viewport_with_min_range`] to pick a
/// different span.
#[must_use]
pub fn compute_viewport<K>(positions: &[CumulativePosition<K>], padding_fraction: f64) -> Viewport {
    compute_viewport_with_min_range(positions, padding_fraction, Viewport::MIN_RANGE)
}

/// Like [`compute_viewport`], with an explicit fallback span for coincident input.
#[must_use]
pub fn compute_viewport_with_min_range<K>(
    positions: &[CumulativePosition<K>],
    padding_fraction: f64,
    min_range: f64,
) -> Viewport {
    let points = iter::once(Point::ORIGIN).chain(
        positions
            .iter()
            .flat_map(|p| [p.start, p.end]),
    );
    Viewport::fit_points(points, padding_fraction, min_range)
}
