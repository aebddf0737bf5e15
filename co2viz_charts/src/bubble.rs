// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble glyphs.

use kurbo::{BezPath, Circle, Point, Shape};

use crate::color::ChartColor;
use crate::z_order;

/// A positioned, colored circle in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    /// Center in plot pixels.
    pub center: Point,
    /// Radius in plot pixels.
    pub radius: f64,
    /// Fill color.
    pub color: ChartColor,
    /// Paint order hint (see [`crate::z_order`]).
    pub z_index: i32,
}

impl Bubble {
    /// Creates an unselected bubble.
    pub fn new(center: impl Into<Point>, radius: f64, color: ChartColor) -> Self {
        Self {
            center: center.into(),
            radius,
            color,
            z_index: z_order::BUBBLES,
        }
    }

    /// Sets the paint order hint.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The circle covered by this bubble.
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius.max(0.0))
    }

    /// Whether `point` lies inside (or on) the bubble.
    pub fn contains(&self, point: Point) -> bool {
        let r = self.radius.max(0.0);
        (point - self.center).hypot2() <= r * r
    }

    /// Outline path, flattened to `tolerance`.
    pub fn path(&self, tolerance: f64) -> BezPath {
        self.circle().path_elements(tolerance).collect()
    }
}
