// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use crate::scene::{Layer, Mark, Rotation, Scene};

/// Exports a scene as a standalone SVG document.
///
/// Marks carry only `class` attributes; colors, strokes and fonts are left
/// to a stylesheet. Faded layers become `<g opacity="...">` groups.
#[must_use]
pub fn to_svg(scene: &Scene) -> String {
    let width = fmt_num(scene.width);
    let height = fmt_num(scene.height);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    for layer in &scene.layers {
        write_layer(&mut svg, layer);
    }
    svg.push_str("</svg>\n");
    svg
}

fn write_layer(out: &mut String, layer: &Layer) {
    let grouped = match layer.opacity {
        Some(opacity) if opacity < 1.0 => {
            let _ = write!(out, "<g opacity=\"{}\">", fmt_num(opacity.clamp(0.0, 1.0)));
            true
        }
        _ => false,
    };
    for mark in &layer.marks {
        write_mark(out, mark);
    }
    if grouped {
        out.push_str("</g>");
    }
    out.push('\n');
}

fn write_mark(out: &mut String, mark: &Mark) {
    match mark {
        Mark::Line { from, to, class } => {
            let _ = write!(
                out,
                "<line class=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
                class.as_str(),
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
            );
        }
        Mark::Dot {
            center,
            radius,
            class,
        } => {
            let _ = write!(
                out,
                "<circle class=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
                class.as_str(),
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
            );
        }
        Mark::Label {
            position,
            text,
            rotation,
            class,
        } => {
            let _ = write!(
                out,
                "<text class=\"{}\" x=\"{}\" y=\"{}\" text-anchor=\"middle\"{}>{}</text>",
                class.as_str(),
                fmt_num(position.x),
                fmt_num(position.y),
                rotation.map(rotate_attr).unwrap_or_default(),
                escape_text(text),
            );
        }
    }
}

fn rotate_attr(rotation: Rotation) -> String {
    format!(
        " transform=\"rotate({} {} {})\"",
        fmt_num(rotation.degrees),
        fmt_num(rotation.pivot.x),
        fmt_num(rotation.pivot.y),
    )
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_num(v: f64) -> String {
    // Integers print bare; everything else with at most 3 decimals.
    if !v.is_finite() {
        return format!("{v}");
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "only used when the value is integral and in range"
    )]
    let i = v as i64;
    let diff = (i as f64) - v;
    if diff > -1e-6 && diff < 1e-6 {
        return format!("{i}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use kurbo::Point;
    use tradeoff_decision::{Decision, RowId};

    use super::{escape_text, fmt_num, to_svg};
    use crate::config::ChartConfig;
    use crate::layout::{layout_placement_chart, layout_vector_chart};
    use crate::scene::{Layer, Mark, MarkClass, Rotation, Scene};

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(60.0), "60");
        assert_eq!(fmt_num(-90.0), "-90");
        assert_eq!(fmt_num(128.571_428_6), "128.571");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_text("R&D <team>"), "R&amp;D &lt;team&gt;");
        assert_eq!(escape_text("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn writes_marks_and_faded_groups() {
        let mut faded = Layer::faded(0.5);
        faded.marks.push(Mark::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 20.5),
            class: MarkClass::ConnectingLine,
        });
        let scene = Scene {
            width: 100.0,
            height: 50.0,
            layers: vec![
                faded,
                Layer {
                    opacity: None,
                    marks: vec![
                        Mark::Dot {
                            center: Point::new(5.0, 5.0),
                            radius: 4.0,
                            class: MarkClass::DotA,
                        },
                        Mark::Label {
                            position: Point::new(50.0, 25.0),
                            text: String::from("Pay & perks"),
                            rotation: Some(Rotation {
                                degrees: -90.0,
                                pivot: Point::new(50.0, 25.0),
                            }),
                            class: MarkClass::AxisLabel,
                        },
                    ],
                },
            ],
        };
        let svg = to_svg(&scene);
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"50\" viewBox=\"0 0 100 50\">"
        ));
        assert!(svg.contains(
            "<g opacity=\"0.5\"><line class=\"connecting-line\" x1=\"0\" y1=\"0\" x2=\"10\" y2=\"20.5\"/></g>"
        ));
        assert!(svg.contains("<circle class=\"dot option-a\" cx=\"5\" cy=\"5\" r=\"4\"/>"));
        assert!(svg.contains(
            "<text class=\"axis-label\" x=\"50\" y=\"25\" text-anchor=\"middle\" transform=\"rotate(-90 50 25)\">Pay &amp; perks</text>"
        ));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn charts_export_with_their_classes() {
        let config = ChartConfig::default();
        let d = Decision::starter()
            .with_option_names("Stay", "Move")
            .place_row(RowId(0), Point::new(0.25, 0.25), Point::new(0.75, 0.5));

        let vector = layout_vector_chart(&d, &config);
        let svg = to_svg(vector.scene().unwrap());
        assert!(svg.contains("class=\"connecting-line aggregate-line\""));
        assert!(svg.contains(">Salary</text>"));
        assert!(svg.contains(">Stay</text>"));
        assert!(svg.contains(">Aggregate</text>"));

        let placement = to_svg(&layout_placement_chart(&d.activate_row(Some(RowId(0))), &config));
        assert!(placement.contains("class=\"dot option-b active\""));
        assert!(placement.contains(">$80,000</text>"));
        assert!(placement.contains(">Sparks Joy</text>"));
    }
}
