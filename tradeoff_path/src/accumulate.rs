// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::viewport::{Viewport, compute_viewport};

/// A 2D change for one comparison category.
///
/// `key` identifies the category (a label, a row id, ...). `delta` is the
/// change from one option to the other in data space.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<K> {
    /// Category identifier.
    pub key: K,
    /// Change in data space.
    pub delta: Vec2,
}

impl<K> Vector<K> {
    /// Creates a vector from an explicit delta.
    #[must_use]
    pub fn new(key: K, delta: Vec2) -> Self {
        Self { key, delta }
    }

    /// Creates the vector pointing from endpoint `a` to endpoint `b`.
    ///
    /// Endpoints are typically in normalized `[0, 1] x [0, 1]` space.
    #[must_use]
    pub fn between(key: K, a: Point, b: Point) -> Self {
        Self { key, delta: b - a }
    }
}

/// Where one vector sits on the accumulated path.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativePosition<K> {
    /// Category identifier, carried over from the input [`Vector`].
    pub key: K,
    /// Running sum of all previous deltas.
    pub start: Point,
    /// `start` plus this vector's delta.
    pub end: Point,
}

impl<K> CumulativePosition<K> {
    /// Returns the delta covered by this position.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    /// Returns the midpoint between `start` and `end`.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Result of [`accumulate`]: the head-to-tail path plus its final endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulation<K> {
    positions: Vec<CumulativePosition<K>>,
    aggregate_end: Point,
}

impl<K> Accumulation<K> {
    /// Returns the positions in input order.
    #[must_use]
    pub fn positions(&self) -> &[CumulativePosition<K>] {
        &self.positions
    }

    /// Consumes the accumulation, returning the positions.
    #[must_use]
    pub fn into_positions(self) -> Vec<CumulativePosition<K>> {
        self.positions
    }

    /// Returns the sum of all deltas (the net difference between the options).
    ///
    /// This is the origin when there are no vectors.
    #[must_use]
    pub fn aggregate_end(&self) -> Point {
        self.aggregate_end
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` when no vectors were accumulated.
    ///
    /// Callers should show an empty state instead of projecting; this is
    /// distinct from a path made of zero-length vectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Computes the square, padded viewport around this path.
    ///
    /// Shorthand for [`compute_viewport`] over [`Accumulation::positions`].
    #[must_use]
    pub fn viewport(&self, padding_fraction: f64) -> Viewport {
        compute_viewport(&self.positions, padding_fraction)
    }
}

/// Lays the vectors out head-to-tail starting at the origin.
///
/// Input order is traversal order; nothing is sorted. Each output position
/// starts where the previous one ended, and the first starts at `(0, 0)`.
#[must_use]
pub fn accumulate<K, I>(vectors: I) -> Accumulation<K>
where
    I: IntoIterator<Item = Vector<K>>,
{
    let vectors = vectors.into_iter();
    let mut positions = Vec::with_capacity(vectors.size_hint().0);
    let mut cursor = Point::ORIGIN;
    for Vector { key, delta } in vectors {
        let start = cursor;
        cursor += delta;
        positions.push(CumulativePosition {
            key,
            start,
            end: cursor,
        });
    }
    Accumulation {
        positions,
        aggregate_end: cursor,
    }
}
