// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order for the parts of a bubble chart frame.
//!
//! Renderers sort by `(z_index, position)`, so ties keep data order.

/// Plot background fill.
pub const PLOT_BACKGROUND: i32 = -100;
/// Log-axis gridlines.
pub const GRID_LINES: i32 = -50;

/// Unselected country bubbles.
pub const BUBBLES: i32 = 20;
/// The selected bubble is painted above the others so it is never hidden.
pub const SELECTED_BUBBLE: i32 = 25;

/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis titles.
pub const AXIS_TITLES: i32 = 50;
/// Year caption and other chart-level text.
pub const TITLES: i32 = 80;
