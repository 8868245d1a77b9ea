// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use tradeoff_path::Projection;

use crate::decision::Decision;
use crate::row::{Dot, Placement, RowId};

/// Pointer-drag state of the placement chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No dot is being dragged.
    #[default]
    Idle,
    /// A dot of `row` is following the pointer.
    Dragging {
        /// The row whose dot is being dragged.
        row: RowId,
        /// Which dot.
        dot: Dot,
    },
}

impl DragState {
    /// Starts dragging `dot` of `row` (pointer down on the dot).
    #[must_use]
    pub fn begin(row: RowId, dot: Dot) -> Self {
        Self::Dragging { row, dot }
    }

    /// Stops dragging (pointer up or pointer left the chart).
    #[must_use]
    pub fn end(self) -> Self {
        Self::Idle
    }

    /// Returns `true` while a dot is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

impl Decision {
    /// Moves the dragged dot to follow a pointer at `pointer` (render coordinates).
    ///
    /// `chart` maps the unit chart onto the render surface, typically
    /// [`Projection::unit`]. The pointer is converted back into unit space and
    /// clamped, so dragging past the canvas edge pins the dot to the edge.
    /// A row that has no placement yet keeps its other dot at
    /// [`Placement::CENTER`].
    ///
    /// Idle drags, rows that no longer exist, and charts without an inverse
    /// leave the decision unchanged.
    #[must_use]
    pub fn drag_to(mut self, drag: DragState, pointer: Point, chart: &Projection) -> Self {
        let DragState::Dragging { row, dot } = drag else {
            return self;
        };
        let Some(pos) = chart.to_data_clamped(pointer) else {
            return self;
        };
        if let Some(row) = self.row_mut(row) {
            let current = row.placement.unwrap_or(Placement::CENTERED);
            row.placement = Some(current.with(dot, pos));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use tradeoff_path::{Projection, RenderFrame, Viewport};

    use super::DragState;
    use crate::decision::Decision;
    use crate::row::{Dot, Placement, RowId};

    fn chart() -> Projection {
        Projection::unit(RenderFrame::default())
    }

    #[test]
    fn drag_moves_only_the_dragged_dot() {
        let d = Decision::starter();
        let id = d.rows()[0].id;
        let drag = DragState::begin(id, Dot::B);
        assert!(drag.is_dragging());

        // (420, 180) on a 600x600 canvas with 60px padding is (0.75, 0.75).
        let d = d.drag_to(drag, Point::new(420.0, 180.0), &chart());
        let placement = d.row(id).unwrap().placement.unwrap();
        assert_eq!(placement.a, Placement::CENTER);
        assert!((placement.b.x - 0.75).abs() < 1e-12);
        assert!((placement.b.y - 0.75).abs() < 1e-12);
    }

    #[test]
    fn drag_outside_canvas_clamps_to_edge() {
        let d = Decision::starter();
        let id = d.rows()[0].id;
        let d = d.drag_to(DragState::begin(id, Dot::A), Point::new(-50.0, 1000.0), &chart());
        assert_eq!(d.row(id).unwrap().placement.unwrap().a, Point::new(0.0, 0.0));
    }

    #[test]
    fn idle_or_stale_drags_do_nothing() {
        let d = Decision::starter();
        let drag = DragState::begin(d.rows()[0].id, Dot::A).end();
        assert_eq!(drag, DragState::Idle);
        let unchanged = d.clone().drag_to(drag, Point::new(100.0, 100.0), &chart());
        assert_eq!(unchanged, d);

        let stale = d
            .clone()
            .drag_to(DragState::begin(RowId(77), Dot::A), Point::new(100.0, 100.0), &chart());
        assert_eq!(stale, d);
    }

    #[test]
    fn degenerate_chart_is_ignored() {
        let d = Decision::starter();
        let id = d.rows()[0].id;
        let flat = Projection::new(Viewport::centered(Point::ORIGIN, 0.0), RenderFrame::default());
        let after = d.clone().drag_to(DragState::begin(id, Dot::A), Point::new(10.0, 10.0), &flat);
        assert_eq!(after, d);
    }
}
