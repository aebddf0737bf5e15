// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG rendering of chart frames for `co2viz_demo`.

use std::fmt::Write as _;

use co2viz_chart::{ChartFrame, ChartSurface};
use co2viz_charts::z_order;
use kurbo::{Rect, Vec2};
use peniko::Color;

/// Space around the plot for tick labels and titles.
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const FONT_SIZE: f64 = 11.0;
const TOLERANCE: f64 = 0.1;

/// One painted element with its paint order.
#[derive(Debug)]
enum Item {
    Rect { rect: Rect, fill: Color },
    Line { from: (f64, f64), to: (f64, f64), stroke: Color },
    Text { at: (f64, f64), anchor: &'static str, text: String },
    Path { d: String, fill: Color },
}

/// A [`ChartSurface`] that keeps the latest frame as an SVG document.
#[derive(Debug, Default)]
pub(crate) struct SvgSurface {
    svg: String,
    redraws: usize,
}

impl SvgSurface {
    /// The most recently painted frame.
    pub(crate) fn svg(&self) -> &str {
        &self.svg
    }

    /// How many frames have been painted.
    pub(crate) fn redraws(&self) -> usize {
        self.redraws
    }
}

impl ChartSurface for SvgSurface {
    fn redraw(&mut self, frame: &ChartFrame<'_>) {
        self.svg = frame_to_svg(frame);
        self.redraws += 1;
    }
}

fn frame_items(frame: &ChartFrame<'_>) -> Vec<(i32, Item)> {
    let size = frame.plot_size;
    let offset = Vec2::new(MARGIN_LEFT, MARGIN_TOP);
    let grid = Color::from_rgba8(0, 0, 0, 40);
    let mut items = vec![(
        z_order::PLOT_BACKGROUND,
        Item::Rect {
            rect: Rect::from_origin_size(offset.to_point(), size),
            fill: Color::from_rgb8(250, 250, 250),
        },
    )];

    for (px, label) in frame.x_axis.gridlines((0.0, size.width)) {
        let x = px + offset.x;
        items.push((
            z_order::GRID_LINES,
            Item::Line {
                from: (x, offset.y),
                to: (x, offset.y + size.height),
                stroke: grid,
            },
        ));
        if !label.is_empty() {
            items.push((
                z_order::AXIS_LABELS,
                Item::Text {
                    at: (x, offset.y + size.height + 16.0),
                    anchor: "middle",
                    text: label.to_owned(),
                },
            ));
        }
    }
    for (py, label) in frame.y_axis.gridlines((size.height, 0.0)) {
        let y = py + offset.y;
        items.push((
            z_order::GRID_LINES,
            Item::Line {
                from: (offset.x, y),
                to: (offset.x + size.width, y),
                stroke: grid,
            },
        ));
        if !label.is_empty() {
            items.push((
                z_order::AXIS_LABELS,
                Item::Text {
                    at: (offset.x - 6.0, y + FONT_SIZE * 0.35),
                    anchor: "end",
                    text: label.to_owned(),
                },
            ));
        }
    }

    items.push((
        z_order::AXIS_TITLES,
        Item::Text {
            at: (offset.x + size.width / 2.0, offset.y + size.height + 38.0),
            anchor: "middle",
            text: "GDP".to_owned(),
        },
    ));
    items.push((
        z_order::AXIS_TITLES,
        Item::Text {
            at: (16.0, offset.y + size.height / 2.0),
            anchor: "middle",
            text: "CO2 Emissions".to_owned(),
        },
    ));
    items.push((
        z_order::TITLES,
        Item::Text {
            at: (offset.x, offset.y - 10.0),
            anchor: "start",
            text: format!("{} ({})", frame.year, frame.color_mode),
        },
    ));

    for (_, bubble) in frame.bubbles() {
        let path = bubble.path(TOLERANCE);
        let moved = kurbo::Affine::translate(offset) * path;
        items.push((
            bubble.z_index,
            Item::Path {
                d: moved.to_svg(),
                fill: bubble.color.to_color(),
            },
        ));
    }
    items
}

pub(crate) fn frame_to_svg(frame: &ChartFrame<'_>) -> String {
    let size = frame.plot_size;
    let width = MARGIN_LEFT + size.width + MARGIN_RIGHT;
    let height = MARGIN_TOP + size.height + MARGIN_BOTTOM;

    let mut items = frame_items(frame);
    // Stable sort keeps insertion order within a layer.
    items.sort_by_key(|(z, _)| *z);

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = write!(
        out,
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="sans-serif" font-size="{FONT_SIZE}">"#
    );
    out.push('\n');

    for (_z, item) in &items {
        match item {
            Item::Rect { rect, fill } => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                );
                write_paint_attr(&mut out, "fill", *fill);
                out.push_str("/>\n");
            }
            Item::Line { from, to, stroke } => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    from.0, from.1, to.0, to.1
                );
                write_paint_attr(&mut out, "stroke", *stroke);
                out.push_str("/>\n");
            }
            Item::Text { at, anchor, text } => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" text-anchor="{anchor}">"#,
                    at.0, at.1
                );
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
            Item::Path { d, fill } => {
                let _ = write!(out, r#"<path d="{d}""#);
                write_paint_attr(&mut out, "fill", *fill);
                out.push_str("/>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
