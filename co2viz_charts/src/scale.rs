// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Log scale coordinate mapping.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A log-scale mapping from a positive domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new base-10 log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base.
    ///
    /// Invalid bases (non-finite, non-positive or `1`) fall back to `10`.
    #[must_use]
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Returns `None` for values with no logarithm (zero, negative, non-finite) or when
    /// the domain itself is not positive.
    pub fn map(&self, x: f64) -> Option<f64> {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if !x.is_finite() || x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return None;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return Some(r0);
        }
        let t = (self.log_base(x) - ld0) / denom;
        Some(r0 + t * (r1 - r0))
    }

    /// Maps a range-space coordinate back into the domain.
    pub fn invert(&self, y: f64) -> Option<f64> {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 <= 0.0 || d1 <= 0.0 || r1 == r0 {
            return None;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let t = (y - r0) / (r1 - r0);
        Some(self.base.powf(ld0 + t * (ld1 - ld0)))
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
