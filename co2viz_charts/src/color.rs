// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value → color interpolation.
//!
//! Values are placed on a log axis: the caller supplies already-logged domain bounds and
//! [`color_for`] takes `ln(value)` before normalizing. The normalized position selects a
//! bracket of gradient stops, and the two stop colors are blended channel-wise:
//! - RGB stops are gamma-decoded (exponent 2.2), blended in linear light and re-encoded,
//!   which avoids the muddy midpoints of naive sRGB blending.
//! - HSL stops are blended linearly.
//!
//! Missing, zero and negative values have no logarithm; they map to [`FALLBACK_COLOR`].

use core::fmt;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use peniko::Color;
use peniko::color::{AlphaColor, Hsl, Srgb};

use crate::gradient::{ColorSpace, Gradient};

/// Standard sRGB display gamma.
const GAMMA: f64 = 2.2;

/// Alpha applied to interpolated colors unless overridden.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Translucent gray used for "no data".
pub const FALLBACK_COLOR: ChartColor = ChartColor::Rgba {
    r: 85,
    g: 85,
    b: 85,
    a: DEFAULT_ALPHA,
};

/// Opaque red used for the selected country, bypassing interpolation.
pub const SELECTED_COLOR: ChartColor = ChartColor::Rgba {
    r: 255,
    g: 0,
    b: 0,
    a: 1.0,
};

/// A display color with integer channels, in the space it was interpolated in.
///
/// `Display` renders CSS functional notation (`rgba(…)` / `hsla(…)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartColor {
    /// sRGB channels in `0..=255`.
    Rgba {
        /// Red.
        r: u8,
        /// Green.
        g: u8,
        /// Blue.
        b: u8,
        /// Opacity in `[0, 1]`.
        a: f64,
    },
    /// Hue in `0..=360`, saturation and lightness in `0..=100`.
    Hsla {
        /// Hue in degrees.
        h: u16,
        /// Saturation percentage.
        s: u8,
        /// Lightness percentage.
        l: u8,
        /// Opacity in `[0, 1]`.
        a: f64,
    },
}

impl ChartColor {
    /// The opacity component.
    pub fn alpha(&self) -> f64 {
        match *self {
            Self::Rgba { a, .. } | Self::Hsla { a, .. } => a,
        }
    }

    /// Returns the same color with a different opacity.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Self::Rgba { r, g, b, .. } => Self::Rgba { r, g, b, a: alpha },
            Self::Hsla { h, s, l, .. } => Self::Hsla { h, s, l, a: alpha },
        }
    }

    /// Converts to a renderer color (sRGB, HSL colors are converted).
    pub fn to_color(&self) -> Color {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "alpha is in [0, 1]; f32 precision is plenty for display"
        )]
        let alpha = self.alpha() as f32;
        match *self {
            Self::Rgba { r, g, b, .. } => Color::from_rgb8(r, g, b).with_alpha(alpha),
            Self::Hsla { h, s, l, .. } => {
                AlphaColor::<Hsl>::new([f32::from(h), f32::from(s), f32::from(l), alpha])
                    .convert::<Srgb>()
            }
        }
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
            Self::Hsla { h, s, l, a } => write!(f, "hsla({h},{s}%,{l}%,{a})"),
        }
    }
}

/// Maps `value` onto `gradient` using the pre-logged domain `[domain_min, domain_max]`.
///
/// Uses [`DEFAULT_ALPHA`]; see [`color_for_with_alpha`].
pub fn color_for(
    value: Option<f64>,
    domain_min: f64,
    domain_max: f64,
    gradient: &Gradient,
) -> ChartColor {
    color_for_with_alpha(value, domain_min, domain_max, gradient, DEFAULT_ALPHA)
}

/// Maps `value` onto `gradient` with an explicit opacity.
///
/// `None`, zero, negative and non-finite values return [`FALLBACK_COLOR`]. Values whose
/// normalized position lies outside every stop bracket blend the neutral gray of the
/// gradient's color space.
pub fn color_for_with_alpha(
    value: Option<f64>,
    domain_min: f64,
    domain_max: f64,
    gradient: &Gradient,
    alpha: f64,
) -> ChartColor {
    let Some(value) = value.filter(|v| v.is_finite() && *v > 0.0) else {
        return FALLBACK_COLOR;
    };

    let span = domain_max - domain_min;
    let t = if span.is_finite() && span != 0.0 {
        (value.ln() - domain_min) / span
    } else {
        0.0
    };

    let space = gradient.space();
    let neutral = Gradient::neutral(space);
    let (lo, hi) = gradient
        .bracket(t)
        .or_else(|| neutral.bracket(t))
        .unwrap_or((neutral.stops()[0], neutral.stops()[1]));

    let width = hi.pct - lo.pct;
    let u = if width > 0.0 { (t - lo.pct) / width } else { 0.0 };

    let mut channels = [0.0; 3];
    for (i, c) in channels.iter_mut().enumerate() {
        let (a, b) = (lo.channels[i], hi.channels[i]);
        *c = match space {
            ColorSpace::Rgb => {
                let mixed = u * b.powf(GAMMA) + (1.0 - u) * a.powf(GAMMA);
                mixed.max(0.0).powf(1.0 / GAMMA)
            }
            ColorSpace::Hsl => u * b + (1.0 - u) * a,
        };
    }

    let max = space.channel_max();
    let [c0, c1, c2] = core::array::from_fn(|i| channels[i].clamp(0.0, max[i]).round());
    let alpha = alpha.clamp(0.0, 1.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "channels are clamped to their valid ranges and rounded"
    )]
    let color = match space {
        ColorSpace::Rgb => ChartColor::Rgba {
            r: c0 as u8,
            g: c1 as u8,
            b: c2 as u8,
            a: alpha,
        },
        ColorSpace::Hsl => ChartColor::Hsla {
            h: c0 as u16,
            s: c1 as u8,
            l: c2 as u8,
            a: alpha,
        },
    };
    color
}
