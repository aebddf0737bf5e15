// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named piecewise color gradients.
//!
//! A gradient is an ordered list of `(percentage, channels)` stops. The first stop sits at
//! `0.0` and the last at `1.0`; values in between are blended by [`crate::color_for`].
//! Two color spaces are supported: sRGB (blended in linear light) and HSL (blended as-is).

extern crate alloc;

use alloc::string::String;

use smallvec::SmallVec;

/// The color space a gradient's stop channels are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue in `0..=255`.
    Rgb,
    /// Hue in `0..=360`, saturation and lightness in `0..=100`.
    Hsl,
}

impl ColorSpace {
    /// Upper bound of each channel, used for clamping blended output.
    pub fn channel_max(self) -> [f64; 3] {
        match self {
            Self::Rgb => [255.0, 255.0, 255.0],
            Self::Hsl => [360.0, 100.0, 100.0],
        }
    }

    /// The neutral gray used when a value falls outside every stop bracket.
    pub fn neutral(self) -> [f64; 3] {
        match self {
            Self::Rgb => [85.0, 85.0, 85.0],
            Self::Hsl => [0.0, 0.0, 50.0],
        }
    }
}

/// One anchor point of a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position of the stop in `[0, 1]`.
    pub pct: f64,
    /// Channel values in the gradient's [`ColorSpace`].
    pub channels: [f64; 3],
}

impl ColorStop {
    /// Creates a stop at `pct` with the given channels.
    pub const fn new(pct: f64, channels: [f64; 3]) -> Self {
        Self { pct, channels }
    }
}

/// Errors returned when building a [`Gradient`] from caller-provided stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientError {
    /// Fewer than two stops were supplied.
    TooFewStops,
    /// The first stop is not at `0.0`.
    FirstStopNotZero(f64),
    /// The last stop is not at `1.0`.
    LastStopNotOne(f64),
    /// Stop `index` is positioned before its predecessor.
    Unordered {
        /// Index of the offending stop.
        index: usize,
    },
    /// Stop `index` has a non-finite position or channel.
    NonFinite {
        /// Index of the offending stop.
        index: usize,
    },
}

impl core::fmt::Display for GradientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewStops => f.write_str("a gradient needs at least two stops"),
            Self::FirstStopNotZero(pct) => write!(f, "first gradient stop is at {pct}, not 0"),
            Self::LastStopNotOne(pct) => write!(f, "last gradient stop is at {pct}, not 1"),
            Self::Unordered { index } => write!(f, "gradient stop {index} is out of order"),
            Self::NonFinite { index } => write!(f, "gradient stop {index} is not finite"),
        }
    }
}

impl core::error::Error for GradientError {}

type Stops = SmallVec<[ColorStop; 4]>;

/// A named, validated piecewise gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    name: String,
    space: ColorSpace,
    stops: Stops,
}

struct CatalogEntry {
    name: &'static str,
    space: ColorSpace,
    stops: &'static [ColorStop],
}

const fn stop(pct: f64, a: f64, b: f64, c: f64) -> ColorStop {
    ColorStop::new(pct, [a, b, c])
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "default",
        space: ColorSpace::Rgb,
        stops: &[stop(0.0, 255.0, 0.0, 0.0), stop(1.0, 0.0, 0.0, 255.0)],
    },
    CatalogEntry {
        name: "white2red",
        space: ColorSpace::Rgb,
        stops: &[stop(0.0, 255.0, 255.0, 255.0), stop(1.0, 255.0, 0.0, 0.0)],
    },
    CatalogEntry {
        name: "white2blue",
        space: ColorSpace::Rgb,
        stops: &[stop(0.0, 255.0, 255.0, 255.0), stop(1.0, 0.0, 0.0, 255.0)],
    },
    CatalogEntry {
        name: "primaries",
        space: ColorSpace::Rgb,
        stops: &[
            stop(0.0, 255.0, 0.0, 0.0),
            stop(0.5, 255.0, 255.0, 0.0),
            stop(1.0, 0.0, 0.0, 255.0),
        ],
    },
    CatalogEntry {
        name: "primariesHSL",
        space: ColorSpace::Hsl,
        stops: &[stop(0.0, 0.0, 100.0, 50.0), stop(1.0, 240.0, 100.0, 50.0)],
    },
    CatalogEntry {
        name: "ygb",
        space: ColorSpace::Hsl,
        stops: &[stop(0.0, 59.0, 81.0, 69.0), stop(1.0, 207.0, 28.0, 19.0)],
    },
    // The repeated 0.83 stop jumps hue from 0 to 360 (same visible hue) so the final
    // segment can continue counter-clockwise into the reds.
    CatalogEntry {
        name: "heat",
        space: ColorSpace::Hsl,
        stops: &[
            stop(0.0, 60.0, 100.0, 85.0),
            stop(0.83, 0.0, 100.0, 77.0),
            stop(0.83, 360.0, 100.0, 77.0),
            stop(1.0, 348.0, 100.0, 37.0),
        ],
    },
    CatalogEntry {
        name: "bw",
        space: ColorSpace::Rgb,
        stops: &[stop(0.0, 0.0, 0.0, 0.0), stop(1.0, 255.0, 255.0, 255.0)],
    },
];

/// Name of the gradient used when no (or an unknown) color mode is requested.
pub const DEFAULT_GRADIENT: &str = "default";

/// Names of every built-in gradient, in catalog order.
pub fn gradient_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}

impl Gradient {
    /// Builds a gradient from caller-provided stops, validating their layout.
    pub fn new(
        name: impl Into<String>,
        space: ColorSpace,
        stops: impl IntoIterator<Item = ColorStop>,
    ) -> Result<Self, GradientError> {
        let stops: Stops = stops.into_iter().collect();
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops);
        }
        for (index, s) in stops.iter().enumerate() {
            if !s.pct.is_finite() || s.channels.iter().any(|c| !c.is_finite()) {
                return Err(GradientError::NonFinite { index });
            }
            if index > 0 && s.pct < stops[index - 1].pct {
                return Err(GradientError::Unordered { index });
            }
        }
        let first = stops[0].pct;
        if first != 0.0 {
            return Err(GradientError::FirstStopNotZero(first));
        }
        let last = stops[stops.len() - 1].pct;
        if last != 1.0 {
            return Err(GradientError::LastStopNotOne(last));
        }
        Ok(Self {
            name: name.into(),
            space,
            stops,
        })
    }

    /// Looks up a built-in gradient by name.
    pub fn lookup(name: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|entry| entry.name == name)
            .map(Self::from_entry)
    }

    /// Looks up a built-in gradient, falling back to the default one for unknown names.
    pub fn named(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    /// The two-stop neutral gray gradient used when a value lies outside every bracket.
    pub fn neutral(space: ColorSpace) -> Self {
        let gray = space.neutral();
        Self {
            name: String::from("neutral"),
            space,
            stops: [ColorStop::new(0.0, gray), ColorStop::new(1.0, gray)]
                .into_iter()
                .collect(),
        }
    }

    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: String::from(entry.name),
            space: entry.space,
            stops: entry.stops.iter().copied().collect(),
        }
    }

    /// The gradient's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color space of the stop channels.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The stops, ordered by percentage.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Finds the pair of adjacent stops bracketing `t`.
    ///
    /// Brackets are half-open (`[lo, hi)`), except the final one which also accepts
    /// `t == 1.0` so the top of the domain maps onto the last stop. Zero-width brackets
    /// (repeated stops) never match.
    pub fn bracket(&self, t: f64) -> Option<(ColorStop, ColorStop)> {
        let last = self.stops.len() - 1;
        self.stops
            .windows(2)
            .enumerate()
            .find(|(i, pair)| {
                let (lo, hi) = (pair[0].pct, pair[1].pct);
                (t >= lo && t < hi) || (*i + 1 == last && lo < hi && t == hi)
            })
            .map(|(_, pair)| (pair[0], pair[1]))
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::from_entry(&CATALOG[0])
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn every_catalog_entry_is_valid() {
        for name in gradient_names() {
            let g = Gradient::lookup(name).expect("catalog name resolves");
            let rebuilt = Gradient::new(name, g.space(), g.stops().iter().copied());
            assert_eq!(rebuilt.as_ref(), Ok(&g), "{name} should validate");
        }
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let g = Gradient::named("no-such-mode");
        assert_eq!(g.name(), DEFAULT_GRADIENT);
        assert_eq!(g, Gradient::default());
    }

    #[test]
    fn catalog_names_are_stable() {
        let names: Vec<_> = gradient_names().collect();
        assert_eq!(
            names,
            vec![
                "default",
                "white2red",
                "white2blue",
                "primaries",
                "primariesHSL",
                "ygb",
                "heat",
                "bw"
            ]
        );
    }

    #[test]
    fn rejects_malformed_stops() {
        let red = [255.0, 0.0, 0.0];
        assert_eq!(
            Gradient::new("x", ColorSpace::Rgb, [ColorStop::new(0.0, red)]),
            Err(GradientError::TooFewStops)
        );
        assert_eq!(
            Gradient::new(
                "x",
                ColorSpace::Rgb,
                [ColorStop::new(0.1, red), ColorStop::new(1.0, red)]
            ),
            Err(GradientError::FirstStopNotZero(0.1))
        );
        assert_eq!(
            Gradient::new(
                "x",
                ColorSpace::Rgb,
                [
                    ColorStop::new(0.0, red),
                    ColorStop::new(0.7, red),
                    ColorStop::new(0.4, red),
                    ColorStop::new(1.0, red)
                ]
            ),
            Err(GradientError::Unordered { index: 2 })
        );
        assert_eq!(
            Gradient::new(
                "x",
                ColorSpace::Rgb,
                [ColorStop::new(0.0, red), ColorStop::new(0.9, red)]
            ),
            Err(GradientError::LastStopNotOne(0.9))
        );
    }

    #[test]
    fn bracket_skips_repeated_stops() {
        let heat = Gradient::named("heat");
        let (lo, hi) = heat.bracket(0.83).expect("0.83 is inside the last segment");
        assert_eq!(lo.channels[0], 360.0);
        assert_eq!(hi.pct, 1.0);

        let (lo, hi) = heat.bracket(0.5).expect("0.5 is inside the first segment");
        assert_eq!(lo.pct, 0.0);
        assert_eq!(hi.pct, 0.83);
    }

    #[test]
    fn bracket_closes_the_top_end_only() {
        let g = Gradient::named("primaries");
        assert!(g.bracket(1.0).is_some(), "t == 1 maps to the last segment");
        assert!(g.bracket(1.0 + 1e-9).is_none(), "t > 1 is out of range");
        assert!(g.bracket(-1e-9).is_none(), "t < 0 is out of range");
    }
}
