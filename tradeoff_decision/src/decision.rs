// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use tradeoff_path::{Accumulation, Vector, accumulate};

use crate::row::{ComparisonRow, Dot, Placement, RowId, RowUpdate, in_unit};

/// Error returned by the checked `try_*` operations on [`Decision`].
#[derive(Clone, Debug, PartialEq)]
pub enum DecisionError {
    /// No row with this id exists.
    UnknownRow(RowId),
    /// A placement coordinate is outside `[0, 1]` or not finite.
    OutOfRange {
        /// The row being placed.
        row: RowId,
        /// Which of the row's dots was out of range.
        dot: Dot,
        /// The rejected position.
        position: Point,
    },
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRow(id) => write!(f, "no comparison row with id {id}"),
            Self::OutOfRange { row, dot, position } => write!(
                f,
                "dot {dot:?} of {row} is outside the unit square: ({}, {})",
                position.x, position.y
            ),
        }
    }
}

impl core::error::Error for DecisionError {}

/// State of a two-option decision.
///
/// Every update consumes the state and returns the next one; nothing is
/// shared or mutated in place behind the caller's back. A host UI keeps the
/// latest `Decision`, feeds user input through these methods, and re-renders
/// from the result.
///
/// Rows keep insertion order, which is also the order their vectors are
/// accumulated in.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    option_a_name: String,
    option_b_name: String,
    rows: Vec<ComparisonRow>,
    active_row: Option<RowId>,
    next_id: u64,
}

impl Default for Decision {
    fn default() -> Self {
        Self::new()
    }
}

impl Decision {
    /// Default name of the first option.
    pub const DEFAULT_OPTION_A: &'static str = "Option A";
    /// Default name of the second option.
    pub const DEFAULT_OPTION_B: &'static str = "Option B";

    /// Creates a decision with default option names and no rows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            option_a_name: String::from(Self::DEFAULT_OPTION_A),
            option_b_name: String::from(Self::DEFAULT_OPTION_B),
            rows: Vec::new(),
            active_row: None,
            next_id: 0,
        }
    }

    /// Creates the starter decision: one active "Salary" row with both dots
    /// at the chart center, ready to drag.
    #[must_use]
    pub fn starter() -> Self {
        let decision = Self::new();
        let id = decision.next_row_id();
        decision
            .add_row("Salary", "$80,000", "$90,000")
            .activate_row(Some(id))
    }

    /// Name of the first option.
    #[must_use]
    pub fn option_a_name(&self) -> &str {
        &self.option_a_name
    }

    /// Name of the second option.
    #[must_use]
    pub fn option_b_name(&self) -> &str {
        &self.option_b_name
    }

    /// All rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Looks up a row by id.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Looks up a row by id, failing with [`DecisionError::UnknownRow`].
    pub fn try_row(&self, id: RowId) -> Result<&ComparisonRow, DecisionError> {
        self.row(id).ok_or(DecisionError::UnknownRow(id))
    }

    /// Id of the row currently being edited, if any.
    #[must_use]
    pub fn active_row_id(&self) -> Option<RowId> {
        self.active_row
    }

    /// The row currently being edited, if any.
    #[must_use]
    pub fn active_row(&self) -> Option<&ComparisonRow> {
        self.active_row.and_then(|id| self.row(id))
    }

    /// The id the next added row will get.
    #[must_use]
    pub fn next_row_id(&self) -> RowId {
        RowId(self.next_id)
    }

    /// Renames both options.
    #[must_use]
    pub fn with_option_names(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.option_a_name = a.into();
        self.option_b_name = b.into();
        self
    }

    /// Appends an unplaced row; its id is [`Decision::next_row_id`] before the call.
    #[must_use]
    pub fn add_row(
        mut self,
        category: impl Into<String>,
        option_a: impl Into<String>,
        option_b: impl Into<String>,
    ) -> Self {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows
            .push(ComparisonRow::new(id, category, option_a, option_b));
        self
    }

    /// Appends a row with empty text fields.
    #[must_use]
    pub fn add_empty_row(self) -> Self {
        self.add_row("", "", "")
    }

    /// Removes a row. Clears the active row if it was the one removed.
    #[must_use]
    pub fn delete_row(mut self, id: RowId) -> Self {
        self.rows.retain(|r| r.id != id);
        if self.active_row == Some(id) {
            self.active_row = None;
        }
        self
    }

    /// Applies a partial text update to a row. Unknown ids are ignored.
    #[must_use]
    pub fn update_row(mut self, id: RowId, update: RowUpdate) -> Self {
        if let Some(row) = self.row_mut(id) {
            update.apply(row);
        }
        self
    }

    /// Moves a row to `to_index` in row order, which is also the order the
    /// path is traversed in.
    ///
    /// `to_index` is the row's position after the move and is clamped to the
    /// last position. Unknown ids are ignored.
    #[must_use]
    pub fn move_row(mut self, id: RowId, to_index: usize) -> Self {
        if let Some(from) = self.rows.iter().position(|r| r.id == id) {
            let row = self.rows.remove(from);
            let to = to_index.min(self.rows.len());
            self.rows.insert(to, row);
        }
        self
    }

    /// Places a row's dots, clamping both into the unit square. Unknown ids are ignored.
    #[must_use]
    pub fn place_row(mut self, id: RowId, a: Point, b: Point) -> Self {
        if let Some(row) = self.row_mut(id) {
            row.placement = Some(Placement::clamped(a, b));
        }
        self
    }

    /// Places a row's dots, rejecting unknown ids and out-of-range positions.
    pub fn try_place_row(mut self, id: RowId, a: Point, b: Point) -> Result<Self, DecisionError> {
        for (dot, position) in [(Dot::A, a), (Dot::B, b)] {
            if !in_unit(position) {
                return Err(DecisionError::OutOfRange {
                    row: id,
                    dot,
                    position,
                });
            }
        }
        let row = self.row_mut(id).ok_or(DecisionError::UnknownRow(id))?;
        row.placement = Some(Placement { a, b });
        Ok(self)
    }

    /// Makes `id` the active row, or clears the active row with `None`.
    ///
    /// An active row that has not been placed yet gets both dots at
    /// [`Placement::CENTER`] so there is something to drag. Unknown ids clear
    /// the active row.
    #[must_use]
    pub fn activate_row(mut self, id: Option<RowId>) -> Self {
        self.active_row = None;
        if let Some(id) = id
            && let Some(row) = self.row_mut(id)
        {
            if row.placement.is_none() {
                row.placement = Some(Placement::CENTERED);
            }
            self.active_row = Some(id);
        }
        self
    }

    /// Change vectors of all placed rows, in row order. Unplaced rows are skipped.
    #[must_use]
    pub fn vectors(&self) -> Vec<Vector<RowId>> {
        self.rows.iter().filter_map(ComparisonRow::vector).collect()
    }

    /// Accumulates [`Decision::vectors`] head-to-tail.
    #[must_use]
    pub fn accumulate(&self) -> Accumulation<RowId> {
        accumulate(self.rows.iter().filter_map(ComparisonRow::vector))
    }

    pub(crate) fn row_mut(&mut self, id: RowId) -> Option<&mut ComparisonRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Vec2};

    use super::{Decision, DecisionError};
    use crate::row::{Dot, Placement, RowId, RowUpdate};

    #[test]
    fn starter_has_one_active_centered_row() {
        let d = Decision::starter();
        assert_eq!(d.rows().len(), 1);
        assert_eq!(d.active_row().map(|r| r.category.as_str()), Some("Salary"));
        assert_eq!(d.rows()[0].placement, Some(Placement::CENTERED));

        // Both dots coincide, so the row contributes a zero vector.
        let vectors = d.vectors();
        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors[0].delta, Vec2::ZERO);
        assert_eq!(d.accumulate().aggregate_end(), Point::ORIGIN);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let d = Decision::new().add_empty_row().add_empty_row();
        let second = d.rows()[1].id;
        let d = d.delete_row(second).add_empty_row();
        let ids: Vec<RowId> = d.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, [RowId(0), RowId(2)]);
        assert_eq!(d.next_row_id(), RowId(3));
    }

    #[test]
    fn deleting_active_row_clears_it() {
        let d = Decision::starter().add_empty_row();
        let active = d.active_row_id().unwrap();
        let other = d.rows()[1].id;

        let kept = d.clone().delete_row(other);
        assert_eq!(kept.active_row_id(), Some(active));

        let cleared = d.delete_row(active);
        assert_eq!(cleared.active_row_id(), None);
        assert_eq!(cleared.rows().len(), 1);
    }

    #[test]
    fn activating_unplaced_row_centers_it() {
        let d = Decision::new().add_row("Commute", "", "");
        let id = d.rows()[0].id;
        let d = d.activate_row(Some(id));
        assert_eq!(d.row(id).unwrap().placement, Some(Placement::CENTERED));

        // Already placed rows keep their placement.
        let d = d
            .place_row(id, Point::new(0.1, 0.2), Point::new(0.3, 0.4))
            .activate_row(None)
            .activate_row(Some(id));
        assert_eq!(d.row(id).unwrap().placement.unwrap().b, Point::new(0.3, 0.4));
    }

    #[test]
    fn activating_unknown_row_clears_active() {
        let d = Decision::starter().activate_row(Some(RowId(42)));
        assert_eq!(d.active_row_id(), None);
    }

    #[test]
    fn update_row_changes_text_only() {
        let d = Decision::starter();
        let id = d.rows()[0].id;
        let d = d.update_row(id, RowUpdate::default().category("Pay"));
        let row = d.row(id).unwrap();
        assert_eq!(row.category, "Pay");
        assert_eq!(row.option_a, "$80,000");
    }

    #[test]
    fn vectors_skip_unplaced_rows_and_keep_order() {
        let d = Decision::new()
            .add_row("Salary", "", "")
            .add_row("Commute", "", "")
            .add_row("Team", "", "");
        let ids: Vec<RowId> = d.rows().iter().map(|r| r.id).collect();
        let d = d
            .place_row(ids[2], Point::new(0.5, 0.5), Point::new(0.75, 0.5))
            .place_row(ids[0], Point::new(0.5, 0.5), Point::new(0.5, 1.0));

        let vectors = d.vectors();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].key, ids[0]);
        assert_eq!(vectors[0].delta, Vec2::new(0.0, 0.5));
        assert_eq!(vectors[1].key, ids[2]);

        let path = d.accumulate();
        assert_eq!(path.aggregate_end(), Point::new(0.25, 0.5));
    }

    #[test]
    fn move_row_reorders_path_but_not_aggregate() {
        let d = Decision::new()
            .add_row("Salary", "", "")
            .add_row("Commute", "", "")
            .add_row("Team", "", "")
            .place_row(RowId(0), Point::new(0.5, 0.5), Point::new(1.0, 0.5))
            .place_row(RowId(1), Point::new(0.5, 0.5), Point::new(0.5, 0.0))
            .place_row(RowId(2), Point::new(0.5, 0.5), Point::new(0.25, 0.75));
        let before = d.accumulate();

        let moved = d.clone().move_row(RowId(2), 0);
        let order: Vec<RowId> = moved.rows().iter().map(|r| r.id).collect();
        assert_eq!(order, [RowId(2), RowId(0), RowId(1)]);

        let after = moved.accumulate();
        let keys: Vec<RowId> = after.positions().iter().map(|p| p.key).collect();
        assert_eq!(keys, [RowId(2), RowId(0), RowId(1)]);
        assert_eq!(after.positions()[0].end, Point::new(-0.25, 0.25));
        assert_ne!(after.positions()[0].end, before.positions()[0].end);
        assert_eq!(after.aggregate_end(), before.aggregate_end());
    }

    #[test]
    fn move_row_clamps_index_and_ignores_unknown_ids() {
        let d = Decision::new().add_empty_row().add_empty_row().add_empty_row();

        let last = d.clone().move_row(RowId(0), 99);
        let order: Vec<RowId> = last.rows().iter().map(|r| r.id).collect();
        assert_eq!(order, [RowId(1), RowId(2), RowId(0)]);

        assert_eq!(d.clone().move_row(RowId(7), 0), d);
        assert_eq!(d.clone().move_row(RowId(1), 1), d);
    }

    #[test]
    fn try_place_row_validates() {
        let d = Decision::starter();
        let id = d.rows()[0].id;

        let err = d
            .clone()
            .try_place_row(RowId(9), Point::ORIGIN, Point::ORIGIN)
            .unwrap_err();
        assert_eq!(err, DecisionError::UnknownRow(RowId(9)));

        let err = d
            .clone()
            .try_place_row(id, Point::new(0.5, 0.5), Point::new(1.5, 0.5))
            .unwrap_err();
        assert_eq!(
            err,
            DecisionError::OutOfRange {
                row: id,
                dot: Dot::B,
                position: Point::new(1.5, 0.5),
            }
        );

        let placed = d
            .try_place_row(id, Point::new(0.2, 0.4), Point::new(0.6, 0.8))
            .unwrap();
        assert!(placed.row(id).unwrap().is_placed());
    }

    #[test]
    fn option_names_default_and_rename() {
        let d = Decision::new();
        assert_eq!(d.option_a_name(), "Option A");
        let d = d.with_option_names("Stay", "Move");
        assert_eq!(d.option_a_name(), "Stay");
        assert_eq!(d.option_b_name(), "Move");
    }
}
