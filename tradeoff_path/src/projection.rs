// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use crate::viewport::Viewport;

/// Fixed-size render surface with uniform padding.
///
/// The inner canvas is the surface minus `padding` on every side; data is
/// mapped onto the inner canvas only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Padding on each side in pixels.
    pub padding: f64,
}

impl RenderFrame {
    /// Creates a render frame.
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width of the inner canvas.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height of the inner canvas.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// The inner canvas in render coordinates.
    #[must_use]
    pub fn inner_rect(&self) -> Rect {
        Rect::new(
            self.padding,
            self.padding,
            self.width - self.padding,
            self.height - self.padding,
        )
    }
}

impl Default for RenderFrame {
    /// A 600x600 surface with 60px padding.
    fn default() -> Self {
        Self::new(600.0, 600.0, 60.0)
    }
}

/// Maps data-space points onto a [`RenderFrame`] through a [`Viewport`].
///
/// X grows to the right in both spaces. Y is inverted: larger data `y` maps
/// to a smaller render `y`, so "up" in data space is up on screen.
///
/// A degenerate viewport (zero range) maps every point to the center of the
/// inner canvas and has no inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    viewport: Viewport,
    frame: RenderFrame,
}

impl Projection {
    /// Creates a projection of `viewport` onto `frame`.
    #[must_use]
    pub fn new(viewport: Viewport, frame: RenderFrame) -> Self {
        Self { viewport, frame }
    }

    /// The normalized `[0, 1]^2` chart projected onto `frame`.
    #[must_use]
    pub fn unit(frame: RenderFrame) -> Self {
        Self::new(Viewport::UNIT, frame)
    }

    /// Returns the data-space viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the render frame.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        self.frame
    }

    /// Converts a data-space point into render coordinates.
    #[must_use]
    pub fn to_view(&self, pt: Point) -> Point {
        let vp = &self.viewport;
        let frame = &self.frame;
        if vp.is_degenerate() {
            return frame.inner_rect().center();
        }
        let inner_w = frame.inner_width();
        let inner_h = frame.inner_height();
        Point::new(
            frame.padding + (pt.x - vp.min_x) / vp.range * inner_w,
            frame.padding + inner_h - (pt.y - vp.min_y) / vp.range * inner_h,
        )
    }

    /// Converts a render-space point back into data space.
    ///
    /// Returns `None` when the viewport is degenerate or the inner canvas has
    /// no area.
    #[must_use]
    pub fn to_data(&self, pt: Point) -> Option<Point> {
        let vp = &self.viewport;
        let frame = &self.frame;
        let inner_w = frame.inner_width();
        let inner_h = frame.inner_height();
        if vp.is_degenerate() || inner_w <= 0.0 || inner_h <= 0.0 {
            return None;
        }
        Some(Point::new(
            vp.min_x + (pt.x - frame.padding) / inner_w * vp.range,
            vp.min_y + (frame.padding + inner_h - pt.y) / inner_h * vp.range,
        ))
    }

    /// Like [`Projection::to_data`], clamping the result into the viewport.
    ///
    /// Used for drag handling where the pointer may leave the inner canvas.
    #[must_use]
    pub fn to_data_clamped(&self, pt: Point) -> Option<Point> {
        let vp = &self.viewport;
        // `max`/`min` rather than `clamp`: NaN bounds must not panic.
        self.to_data(pt).map(|p| {
            Point::new(
                p.x.max(vp.min_x).min(vp.min_x + vp.range),
                p.y.max(vp.min_y).min(vp.min_y + vp.range),
            )
        })
    }

    /// Returns the data-to-render mapping as an affine transform.
    ///
    /// For a degenerate viewport this collapses everything onto the inner
    /// canvas center.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let vp = &self.viewport;
        let frame = &self.frame;
        if vp.is_degenerate() {
            let c = frame.inner_rect().center();
            return Affine::new([0.0, 0.0, 0.0, 0.0, c.x, c.y]);
        }
        let sx = frame.inner_width() / vp.range;
        let sy = frame.inner_height() / vp.range;
        Affine::new([
            sx,
            0.0,
            0.0,
            -sy,
            frame.padding - vp.min_x * sx,
            frame.padding + frame.inner_height() + vp.min_y * sy,
        ])
    }
}

/// Maps a data-space point into a `render_width x render_height` surface.
///
/// Convenience form of [`Projection::to_view`]: `x` maps
/// `[min_x, min_x + range]` onto `[padding, render_width - padding]` and `y`
/// maps `[min_y, min_y + range]` onto `[render_height - padding, padding]`.
#[must_use]
pub fn project(
    point: Point,
    viewport: &Viewport,
    render_width: f64,
    render_height: f64,
    padding: f64,
) -> Point {
    Projection::new(
        *viewport,
        RenderFrame::new(render_width, render_height, padding),
    )
    .to_view(point)
}
