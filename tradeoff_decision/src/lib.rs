// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tradeoff Decision: the state behind a two-option decision chart.
//!
//! A [`Decision`] holds two option names and an ordered list of
//! [`ComparisonRow`]s, one per category being compared ("Salary",
//! "Commute", ...). Each row can be placed on a normalized `[0, 1]^2` chart
//! by positioning one dot per option ([`Placement`]); the change from dot A
//! to dot B becomes that row's [`tradeoff_path::Vector`].
//!
//! The model is a plain value: every update consumes the current state and
//! returns the next one, so a host UI can keep the latest `Decision`, route
//! input through these methods, and re-render from the result.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use tradeoff_decision::{Decision, DragState, Dot};
//! use tradeoff_path::{Projection, RenderFrame};
//!
//! // The starter row is active with both dots at the chart center.
//! let decision = Decision::starter().with_option_names("Current job", "Offer");
//! let salary = decision.rows()[0].id;
//! assert_eq!(decision.active_row_id(), Some(salary));
//!
//! // Drag dot B to the upper-right corner of a 600x600 chart.
//! let chart = Projection::unit(RenderFrame::default());
//! let drag = DragState::begin(salary, Dot::B);
//! let decision = decision.drag_to(drag, Point::new(540.0, 60.0), &chart);
//!
//! let path = decision.accumulate();
//! assert_eq!(path.aggregate_end(), Point::new(0.5, 0.5));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod decision;
mod drag;
mod row;

pub use decision::{Decision, DecisionError};
pub use drag::DragState;
pub use row::{ComparisonRow, Dot, Placement, RowId, RowUpdate};
