// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use tradeoff_decision::Decision;

/// Plain-text report of each placed row's change and where the path ends.
///
/// Positive `value` favors the second option on the value axis, positive
/// `joy` on the joy axis.
pub(crate) fn summarize(decision: &Decision, padding_fraction: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} -> {}",
        decision.option_a_name(),
        decision.option_b_name()
    );

    let accumulation = decision.accumulate();
    if accumulation.is_empty() {
        out.push_str("no placed rows\n");
        return out;
    }

    let width = decision
        .rows()
        .iter()
        .map(|r| r.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("aggregate".len());
    for position in accumulation.positions() {
        let category = decision
            .row(position.key)
            .map(|r| r.category.as_str())
            .unwrap_or_default();
        let delta = position.delta();
        let _ = writeln!(
            out,
            "{category:<width$}  value {:+.3}  joy {:+.3}",
            delta.x, delta.y
        );
    }
    let end = accumulation.aggregate_end();
    let _ = writeln!(
        out,
        "{:<width$}  value {:+.3}  joy {:+.3}",
        "aggregate", end.x, end.y
    );

    let viewport = accumulation.viewport(padding_fraction);
    let _ = writeln!(
        out,
        "viewport  x [{:.3}, {:.3}]  y [{:.3}, {:.3}]  range {:.3}",
        viewport.min_x, viewport.max_x, viewport.min_y, viewport.max_y, viewport.range
    );
    out
}
