// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual encoding building blocks for the CO2 / GDP bubble chart.
//!
//! This crate holds the parts of the chart that carry actual math, independent of
//! any renderer or data source:
//! - **Gradients** and the [`color_for`] interpolator turn an indicator value into a
//!   display color (gamma-aware for RGB gradients, linear for HSL ones).
//! - **Log ticks** ([`plan_ticks`], [`tick_label`], [`LogAxis`]) produce a fixed set of
//!   gridlines for a logarithmic axis so redraws never move them.
//! - The [`Slider`] models a draggable snap-to-step control as a plain state machine;
//!   the host feeds it pointer events and it reports discrete value changes.
//! - [`Bubble`] glyphs and the [`z_order`] constants describe what a renderer paints.
//!
//! Data loading and chart orchestration live in `co2viz_data` and `co2viz_chart`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bubble;
mod color;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod gradient;
mod log_ticks;
mod scale;
mod slider;
pub mod z_order;

pub use bubble::Bubble;
pub use color::{
    ChartColor, DEFAULT_ALPHA, FALLBACK_COLOR, SELECTED_COLOR, color_for, color_for_with_alpha,
};
pub use format::format_grouped;
pub use gradient::{
    ColorSpace, ColorStop, DEFAULT_GRADIENT, Gradient, GradientError, gradient_names,
};
pub use log_ticks::{LogAxis, plan_ticks, tick_label, tick_labels};
pub use scale::ScaleLog;
pub use slider::{Slider, SliderError, SliderGeometry, SliderTick};
