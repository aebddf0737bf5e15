// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive CO2 / GDP bubble chart, independent of any windowing or rendering system.
//!
//! A [`ChartController`] is built from a [`ChartConfig`], a [`ChartSurface`] that paints
//! frames, and an [`AlertSink`] for user-visible errors. After
//! [`load`](ChartController::load)ing a dataset from a [`DataSource`], the host forwards
//! input:
//! - year picker changes to [`ChartController::set_year`],
//! - gradient menu changes to [`ChartController::set_color_mode`],
//! - pointer events on the plot to [`ChartController::pointer_down`],
//!   [`pointer_move`](ChartController::pointer_move), [`pointer_up`](ChartController::pointer_up)
//!   and [`click`](ChartController::click),
//! - a [`Slider`](co2viz_charts::Slider) from [`ChartController::year_slider`], connected
//!   through a [`SliderDispatch`].
//!
//! Each call that changes what is shown repaints the surface exactly once.

mod alerts;
mod config;
mod controller;
mod entry;
mod error;
mod info;
mod interaction;
mod source;
mod surface;

pub use alerts::{AlertSink, LogAlerts};
pub use config::{AxisBounds, ChartConfig, ColorDomain, YearRange};
pub use controller::{ChartController, YEAR_SLIDER_ID};
pub use entry::{BubbleEntry, radius_for};
pub use error::LoadError;
pub use info::{CountryInfo, InfoPanel, InfoRow, country_info, tooltip_lines};
pub use interaction::{DragDetector, SliderDispatch, YearTarget};
pub use source::{DataSource, FileSource, STATUS_OK, StaticSource};
pub use surface::{ChartFrame, ChartSurface};
