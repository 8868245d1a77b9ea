// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tradeoff Path: vector accumulation and square auto-fit projection.
//!
//! This crate turns an ordered list of per-category 2D change vectors into a
//! connected path and maps that path onto a fixed-size render surface. It
//! focuses on:
//! - Accumulating deltas head-to-tail from the origin ([`accumulate`]).
//! - Deriving a square, padded data-space window around the path
//!   ([`compute_viewport`]).
//! - Mapping data-space points into render (pixel) space with a Y-up
//!   convention ([`project`], [`Projection`]).
//!
//! It does **not** draw anything. Callers are expected to:
//! - Derive each [`Vector`] from their own model (for example two option
//!   endpoints on a normalized chart, see [`Vector::between`]).
//! - Pick a [`RenderFrame`] (canvas size and padding).
//! - Draw lines, markers and labels at the returned coordinates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use tradeoff_path::{Projection, RenderFrame, Vector, accumulate};
//!
//! let path = accumulate([
//!     Vector::new("Salary", Vec2::new(1.0, 1.0)),
//!     Vector::new("Commute", Vec2::new(-1.0, 1.0)),
//! ]);
//! assert_eq!(path.aggregate_end(), Point::new(0.0, 2.0));
//!
//! let viewport = path.viewport(0.2);
//! let projection = Projection::new(viewport, RenderFrame::new(600.0, 600.0, 60.0));
//! let origin = projection.to_view(Point::ORIGIN);
//! assert!(origin.x > 60.0 && origin.x < 540.0);
//! ```
//!
//! ## Degenerate input
//!
//! - An empty vector list produces an empty [`Accumulation`]; callers should
//!   treat [`Accumulation::is_empty`] as "nothing to render yet".
//! - When every point coincides, [`compute_viewport`] falls back to a square
//!   of [`Viewport::MIN_RANGE`] centered on that point, so projection stays
//!   well defined.
//! - A hand-built [`Viewport`] with a zero range projects every point to the
//!   center of the inner canvas.
//! - Non-finite deltas are not guarded against; they propagate as NaN.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod accumulate;
mod projection;
mod viewport;

pub use accumulate::{Accumulation, CumulativePosition, Vector, accumulate};
pub use projection::{Projection, RenderFrame, project};
pub use viewport::{Viewport, compute_viewport, compute_viewport_with_min_range};
