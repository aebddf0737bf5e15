// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A draggable, snap-to-step slider modeled as a state machine.
//!
//! The slider owns no DOM or window: the host reports pointer events with page-space
//! x coordinates, and reads back the marker position and tick layout to draw.
//!
//! States:
//! - **idle**: pointer moves are ignored.
//! - **dragging**: entered by [`Slider::pointer_down_on_marker`], left by
//!   [`Slider::pointer_up`] (wherever the pointer is).
//!
//! While dragging, each move snaps to the nearest step and the change callback fires only
//! when the snapped step differs from the last one, so a continuous drag produces one
//! notification per step crossed rather than one per pointer event.

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Pixel layout of the slider track and marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderGeometry {
    /// Page x coordinate of the track's left edge.
    pub track_left: f64,
    /// Width of the track in pixels.
    pub track_width: f64,
    /// Width of the draggable marker in pixels.
    pub marker_width: f64,
}

impl Default for SliderGeometry {
    fn default() -> Self {
        Self {
            track_left: 0.0,
            track_width: 480.0,
            marker_width: 15.0,
        }
    }
}

/// One tick of the slider track.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderTick {
    /// Offset from the track's left edge, in pixels.
    pub left: f64,
    /// The slider value at this tick.
    pub value: f64,
    /// Visible label, present only for values in the slider's label set.
    pub label: Option<String>,
}

/// Errors returned when constructing a [`Slider`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderError {
    /// `max` is not greater than `min`.
    EmptyRange {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },
    /// `step` is zero or negative.
    NonPositiveStep(f64),
    /// `step` is larger than `max - min`, so no whole step fits.
    StepExceedsRange {
        /// Requested step.
        step: f64,
        /// `max - min`.
        span: f64,
    },
    /// A bound, the step or a geometry dimension is not finite, or the track has no width.
    InvalidGeometry,
}

impl core::fmt::Display for SliderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyRange { min, max } => {
                write!(f, "slider range is empty: max {max} <= min {min}")
            }
            Self::NonPositiveStep(step) => write!(f, "slider step must be positive, got {step}"),
            Self::StepExceedsRange { step, span } => {
                write!(f, "slider step {step} does not fit in range of width {span}")
            }
            Self::InvalidGeometry => f.write_str("slider bounds or geometry are not usable"),
        }
    }
}

impl core::error::Error for SliderError {}

type ChangeCallback = Box<dyn FnMut(f64)>;

/// A horizontal slider over `[min, max]` in increments of `step`.
pub struct Slider {
    element_id: String,
    min: f64,
    max: f64,
    step: f64,
    labels: Vec<f64>,
    geometry: SliderGeometry,
    num_steps: usize,
    step_px: f64,
    index: usize,
    dragging: bool,
    marker_left: f64,
    on_change: Option<ChangeCallback>,
}

impl core::fmt::Debug for Slider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slider")
            .field("element_id", &self.element_id)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("labels", &self.labels)
            .field("geometry", &self.geometry)
            .field("num_steps", &self.num_steps)
            .field("step_px", &self.step_px)
            .field("index", &self.index)
            .field("dragging", &self.dragging)
            .field("marker_left", &self.marker_left)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Slider {
    /// Creates a slider attached to `element_id`.
    ///
    /// `labels` lists the values whose ticks get a visible label. `on_change` receives
    /// the new value whenever a drag moves the marker onto a different step.
    ///
    /// The marker starts on the first step.
    pub fn new(
        element_id: impl Into<String>,
        min: f64,
        max: f64,
        step: f64,
        labels: impl IntoIterator<Item = f64>,
        geometry: SliderGeometry,
        on_change: impl FnMut(f64) + 'static,
    ) -> Result<Self, SliderError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(SliderError::InvalidGeometry);
        }
        if max <= min {
            return Err(SliderError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(SliderError::NonPositiveStep(step));
        }
        if !geometry.track_left.is_finite()
            || !geometry.marker_width.is_finite()
            || !geometry.track_width.is_finite()
            || geometry.track_width <= 0.0
        {
            return Err(SliderError::InvalidGeometry);
        }

        // Only whole steps; the last value never passes `max`.
        let n = ((max - min) / step + 1e-9).floor();
        if n < 1.0 {
            return Err(SliderError::StepExceedsRange {
                step,
                span: max - min,
            });
        }
        let n = n.min(1_000_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "in [1, 1e6] and floored"
        )]
        let num_steps = n as usize;
        let step_px = geometry.track_width / num_steps as f64;

        Ok(Self {
            element_id: element_id.into(),
            min,
            max,
            step,
            labels: labels.into_iter().collect(),
            geometry,
            num_steps,
            step_px,
            index: 0,
            dragging: false,
            marker_left: -geometry.marker_width / 2.0,
            on_change: Some(Box::new(on_change)),
        })
    }

    /// The id of the element this slider is attached to.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The track/marker geometry.
    pub fn geometry(&self) -> SliderGeometry {
        self.geometry
    }

    /// Number of steps between `min` and `max`.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Pixel distance between adjacent steps.
    pub fn step_px(&self) -> f64 {
        self.step_px
    }

    /// The current step index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The value at the current step.
    pub fn value(&self) -> f64 {
        self.value_at(self.index)
    }

    /// Marker left offset relative to the track (already shifted by half the marker width).
    pub fn marker_left(&self) -> f64 {
        self.marker_left
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn value_at(&self, index: usize) -> f64 {
        index as f64 * self.step + self.min
    }

    fn clamp_index(&self, raw: f64) -> usize {
        let clamped = raw.round().clamp(0.0, self.num_steps as f64);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to [0, num_steps] and rounded"
        )]
        let index = clamped as usize;
        index
    }

    fn place_marker(&mut self, index: usize) {
        self.index = index;
        self.marker_left = index as f64 * self.step_px - self.geometry.marker_width / 2.0;
    }

    /// Pointer pressed on the marker: start dragging.
    pub fn pointer_down_on_marker(&mut self) {
        self.dragging = true;
    }

    /// Pointer released anywhere: stop dragging.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Pointer moved to page x coordinate `client_x`.
    ///
    /// Ignored unless dragging. Moving outside the track keeps the drag alive and pins the
    /// marker to the nearest end. Returns the new value when the snapped step changed (the
    /// callback has been invoked with it), `None` otherwise.
    pub fn pointer_move(&mut self, client_x: f64) -> Option<f64> {
        if !self.dragging || !client_x.is_finite() {
            return None;
        }
        let pos = client_x - self.geometry.track_left - self.geometry.marker_width / 2.0;
        let index = self.clamp_index(pos / self.step_px);
        let changed = index != self.index;
        self.place_marker(index);
        if !changed {
            return None;
        }
        let value = self.value_at(index);
        if let Some(cb) = self.on_change.as_mut() {
            cb(value);
        }
        Some(value)
    }

    /// Jumps the marker to the step nearest `val` (clamped to the bounds).
    ///
    /// This is for initialization and does not invoke the change callback.
    pub fn selected_val(&mut self, val: f64) {
        if !val.is_finite() {
            return;
        }
        let index = self.clamp_index((val - self.min) / self.step);
        self.place_marker(index);
    }

    /// Ticks at every step, labeled when their value is in the label set.
    pub fn ticks(&self) -> Vec<SliderTick> {
        (0..=self.num_steps)
            .map(|j| {
                let value = self.value_at(j);
                let labeled = self
                    .labels
                    .iter()
                    .any(|l| (l - value).abs() <= self.step * 1e-9);
                SliderTick {
                    left: self.step_px * j as f64,
                    value,
                    label: labeled.then(|| format!("{value}")),
                }
            })
            .collect()
    }

    /// Replaces the change callback.
    pub fn set_on_change(&mut self, on_change: impl FnMut(f64) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Drops the change callback; later drags still move the marker but notify nobody.
    pub fn disconnect(&mut self) {
        self.on_change = None;
    }

    /// Whether a change callback is registered.
    pub fn is_connected(&self) -> bool {
        self.on_change.is_some()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    use super::*;

    const GEOMETRY: SliderGeometry = SliderGeometry {
        track_left: 100.0,
        track_width: 240.0,
        marker_width: 16.0,
    };

    fn year_slider() -> (Slider, Rc<RefCell<Vec<f64>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let slider = Slider::new(
            "year-slider",
            1990.0,
            2014.0,
            1.0,
            [1990.0, 2000.0, 2010.0],
            GEOMETRY,
            move |v| sink.borrow_mut().push(v),
        )
        .expect("valid slider");
        (slider, calls)
    }

    /// Page x that puts the marker's center on step `k`.
    fn x_for_step(k: usize) -> f64 {
        GEOMETRY.track_left + GEOMETRY.marker_width / 2.0 + k as f64 * 10.0
    }

    #[test]
    fn drag_to_step_reports_once() {
        let (mut slider, calls) = year_slider();
        slider.pointer_down_on_marker();
        assert_eq!(slider.pointer_move(x_for_step(3)), Some(1993.0));
        slider.pointer_up();
        assert_eq!(*calls.borrow(), vec![1993.0]);
        assert_eq!(slider.index(), 3);
        assert!((slider.marker_left() - (30.0 - 8.0)).abs() < 1e-9);
    }

    #[test]
    fn jitter_within_a_step_is_silent() {
        let (mut slider, calls) = year_slider();
        slider.pointer_down_on_marker();
        slider.pointer_move(x_for_step(5));
        for dx in [-4.0, -1.0, 0.0, 2.0, 4.9] {
            assert_eq!(slider.pointer_move(x_for_step(5) + dx), None);
        }
        slider.pointer_up();
        assert_eq!(*calls.borrow(), vec![1995.0]);
    }

    #[test]
    fn drag_without_step_change_never_reports() {
        let (mut slider, calls) = year_slider();
        slider.pointer_down_on_marker();
        slider.pointer_move(x_for_step(0) + 2.0);
        slider.pointer_up();
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let (mut slider, calls) = year_slider();
        assert_eq!(slider.pointer_move(x_for_step(7)), None);
        slider.pointer_down_on_marker();
        slider.pointer_up();
        assert_eq!(slider.pointer_move(x_for_step(7)), None);
        assert!(calls.borrow().is_empty());
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn leaving_the_track_clamps_instead_of_cancelling() {
        let (mut slider, calls) = year_slider();
        slider.pointer_down_on_marker();
        assert_eq!(slider.pointer_move(5000.0), Some(2014.0));
        assert!(slider.is_dragging());
        assert_eq!(slider.pointer_move(9000.0), None);
        assert_eq!(slider.pointer_move(-500.0), Some(1990.0));
        assert_eq!(*calls.borrow(), vec![2014.0, 1990.0]);
        assert!((slider.marker_left() + 8.0).abs() < 1e-9);
    }

    #[test]
    fn selected_val_is_silent_and_clamped() {
        let (mut slider, calls) = year_slider();
        slider.selected_val(2014.0);
        assert_eq!(slider.index(), 24);
        slider.selected_val(1900.0);
        assert_eq!(slider.index(), 0);
        slider.selected_val(2003.4);
        assert_eq!(slider.value(), 2003.0);
        assert!(calls.borrow().is_empty());

        // A drag that lands on the preselected step does not report it again.
        slider.pointer_down_on_marker();
        assert_eq!(slider.pointer_move(x_for_step(13)), None);
    }

    #[test]
    fn ticks_are_evenly_spaced_and_labeled_from_the_set() {
        let (slider, _) = year_slider();
        let ticks = slider.ticks();
        assert_eq!(ticks.len(), 25);
        assert!((ticks[1].left - 10.0).abs() < 1e-9);
        assert!((ticks[24].left - 240.0).abs() < 1e-9);
        let labeled: Vec<_> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
        assert_eq!(labeled, vec!["1990", "2000", "2010"]);
    }

    #[test]
    fn disconnect_stops_notifications() {
        let (mut slider, calls) = year_slider();
        slider.disconnect();
        assert!(!slider.is_connected());
        slider.pointer_down_on_marker();
        assert_eq!(slider.pointer_move(x_for_step(4)), Some(1994.0));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn rejects_bad_ranges() {
        let err = Slider::new("s", 5.0, 5.0, 1.0, [], GEOMETRY, |_| {}).unwrap_err();
        assert_eq!(err, SliderError::EmptyRange { min: 5.0, max: 5.0 });
        let err = Slider::new("s", 0.0, 5.0, 0.0, [], GEOMETRY, |_| {}).unwrap_err();
        assert_eq!(err, SliderError::NonPositiveStep(0.0));
        let flat = SliderGeometry {
            track_width: 0.0,
            ..GEOMETRY
        };
        let err = Slider::new("s", 0.0, 5.0, 1.0, [], flat, |_| {}).unwrap_err();
        assert_eq!(err, SliderError::InvalidGeometry);
        let err = Slider::new("s", 0.0, 5.0, 6.0, [], GEOMETRY, |_| {}).unwrap_err();
        assert_eq!(
            err,
            SliderError::StepExceedsRange {
                step: 6.0,
                span: 5.0
            }
        );
    }

    #[test]
    fn uneven_range_stops_on_the_last_whole_step() {
        let mut slider = Slider::new("s", 0.0, 10.0, 4.0, [], GEOMETRY, |_| {}).unwrap();
        assert_eq!(slider.num_steps(), 2);
        slider.pointer_down_on_marker();
        assert_eq!(slider.pointer_move(10_000.0), Some(8.0));
        assert!(slider.value() <= slider.max());
        let last = slider.ticks().last().map(|t| t.value);
        assert_eq!(last, Some(8.0));
        slider.selected_val(10.0);
        assert_eq!(slider.value(), 8.0);
    }

    #[test]
    fn fractional_steps_keep_the_exact_count() {
        let slider = Slider::new("s", 0.0, 1.0, 0.1, [], GEOMETRY, |_| {}).unwrap();
        assert_eq!(slider.num_steps(), 10);
    }
}
