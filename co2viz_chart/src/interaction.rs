// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer bookkeeping and slider wiring.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use co2viz_charts::Slider;
use co2viz_data::Year;
use kurbo::Point;

/// Tells a click apart from a press-move-release gesture on the chart.
///
/// Any movement between press and release marks the gesture as a drag, and the click
/// that follows the release is suppressed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragDetector {
    pressed_at: Option<Point>,
    dragged: bool,
}

impl DragDetector {
    /// Pointer pressed on the chart.
    pub fn pointer_down(&mut self, at: Point) {
        self.pressed_at = Some(at);
        self.dragged = false;
    }

    /// Pointer moved. Returns whether a drag is in progress.
    pub fn pointer_move(&mut self, to: Point) -> bool {
        if let Some(start) = self.pressed_at
            && start != to
        {
            self.dragged = true;
        }
        self.is_dragging()
    }

    /// Pointer released. Returns whether the gesture was a drag.
    pub fn pointer_up(&mut self) -> bool {
        self.pressed_at = None;
        self.dragged
    }

    /// Whether the pointer is down and has moved.
    pub fn is_dragging(&self) -> bool {
        self.pressed_at.is_some() && self.dragged
    }

    /// Whether a click arriving now should select or deselect.
    pub fn allows_click(&self) -> bool {
        !self.dragged
    }
}

/// Something that displays one year at a time.
pub trait YearTarget {
    /// The year currently displayed.
    fn current_year(&self) -> Year;

    /// Switches the displayed year.
    fn show_year(&mut self, year: Year);
}

/// Forwards slider changes to a [`YearTarget`] held by the host.
///
/// Only a weak reference is kept, so registering never extends the target's lifetime.
/// A change is forwarded only when it lands on a year other than the displayed one.
#[derive(Debug)]
pub struct SliderDispatch<T> {
    target: Weak<RefCell<T>>,
}

impl<T> Clone for SliderDispatch<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}

impl<T: YearTarget + 'static> SliderDispatch<T> {
    /// A dispatcher targeting `target`.
    pub fn new(target: &Rc<RefCell<T>>) -> Self {
        Self {
            target: Rc::downgrade(target),
        }
    }

    /// Installs this dispatcher as `slider`'s change callback.
    pub fn register(self, slider: &mut Slider) {
        slider.set_on_change(move |value| {
            self.dispatch(value);
        });
    }

    /// Removes whatever callback `slider` has.
    pub fn unregister(slider: &mut Slider) {
        slider.disconnect();
    }

    /// Handles one slider value. Returns whether the target's year changed.
    pub fn dispatch(&self, value: f64) -> bool {
        let Some(year) = year_from_value(value) else {
            tracing::warn!(value, "slider value is not a year");
            return false;
        };
        let Some(target) = self.target.upgrade() else {
            tracing::debug!(year, "slider target dropped; ignoring change");
            return false;
        };
        let Ok(mut target) = target.try_borrow_mut() else {
            tracing::warn!(year, "slider target is busy; ignoring change");
            return false;
        };
        if target.current_year() == year {
            return false;
        }
        target.show_year(year);
        true
    }
}

fn year_from_value(value: f64) -> Option<Year> {
    let rounded = value.round();
    if !(0.0..=f64::from(Year::MAX)).contains(&rounded) {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "checked to be within the year type's range"
    )]
    let year = rounded as Year;
    Some(year)
}
