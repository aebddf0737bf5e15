// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use co2viz_charts::{Bubble, LogAxis, ScaleLog, z_order};
use co2viz_data::Year;
use kurbo::{Point, Size};

use crate::entry::BubbleEntry;

/// Everything needed to paint the chart once.
#[derive(Clone, Copy, Debug)]
pub struct ChartFrame<'a> {
    /// Displayed year.
    pub year: Year,
    /// One entry per country, in dataset order.
    pub entries: &'a [BubbleEntry],
    /// GDP axis.
    pub x_axis: &'a LogAxis,
    /// CO2 axis.
    pub y_axis: &'a LogAxis,
    /// Plot area in pixels; y grows downward.
    pub plot_size: Size,
    /// Name of the active gradient.
    pub color_mode: &'a str,
}

impl ChartFrame<'_> {
    /// Pixel scale of the x axis.
    pub fn x_scale(&self) -> ScaleLog {
        self.x_axis.scale((0.0, self.plot_size.width))
    }

    /// Pixel scale of the y axis (inverted so larger values are higher up).
    pub fn y_scale(&self) -> ScaleLog {
        self.y_axis.scale((self.plot_size.height, 0.0))
    }

    /// The selected entry, if any.
    pub fn selected(&self) -> Option<&BubbleEntry> {
        self.entries.iter().find(|e| e.selected)
    }

    /// Placeable entries as bubbles, sorted in paint order, each with its entry index.
    pub fn bubbles(&self) -> Vec<(usize, Bubble)> {
        let (xs, ys) = (self.x_scale(), self.y_scale());
        let mut out: Vec<_> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                let center = Point::new(xs.map(e.x?)?, ys.map(e.y?)?);
                let z = if e.selected {
                    z_order::SELECTED_BUBBLE
                } else {
                    z_order::BUBBLES
                };
                Some((i, Bubble::new(center, e.radius?, e.color()).with_z_index(z)))
            })
            .collect();
        out.sort_by_key(|(i, b)| (b.z_index, *i));
        out
    }

    /// Index of the topmost bubble containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.bubbles()
            .into_iter()
            .rev()
            .find(|(_, b)| b.contains(point))
            .map(|(i, _)| i)
    }
}

/// Where frames are painted.
pub trait ChartSurface {
    /// Paints `frame`, replacing whatever was shown before.
    fn redraw(&mut self, frame: &ChartFrame<'_>);
}
