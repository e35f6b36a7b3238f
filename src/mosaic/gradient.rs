//! Gradient color mapper.
//!
//! Maps a scalar value onto a three-stop piecewise-linear color ramp in RGB
//! space: the lower half of the normalized range interpolates start→mid, the
//! upper half mid→end.

#![allow(clippy::float_cmp)] // degenerate-range check is an exact comparison

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// The three ordered stops of a gradient ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientStops {
    /// Color at normalized position 0.0
    pub start: RgbColor,
    /// Color at normalized position 0.5
    pub mid: RgbColor,
    /// Color at normalized position 1.0
    pub end: RgbColor,
}

/// Maps `value` within `[min, max]` onto the ramp.
///
/// Out-of-range values are clamped, not rejected. A degenerate range
/// (`min == max`) is defined as the mid color, so callers never divide by
/// zero. With `invert` the ramp runs backward, which is how "lower is
/// better" fields are displayed.
///
/// # Examples
///
/// ```
/// use memomosaic::models::RgbColor;
/// use memomosaic::mosaic::{gradient_color, GradientStops};
///
/// let stops = GradientStops {
///     start: RgbColor::new(255, 235, 59),
///     mid: RgbColor::new(76, 175, 80),
///     end: RgbColor::new(33, 150, 243),
/// };
/// assert_eq!(gradient_color(0.0, 0.0, 100.0, &stops, false), stops.start);
/// assert_eq!(gradient_color(50.0, 0.0, 100.0, &stops, false), stops.mid);
/// assert_eq!(gradient_color(100.0, 0.0, 100.0, &stops, false), stops.end);
/// ```
#[must_use]
pub fn gradient_color(
    value: f64,
    min: f64,
    max: f64,
    stops: &GradientStops,
    invert: bool,
) -> RgbColor {
    if min == max {
        return stops.mid;
    }

    let mut t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    if invert {
        t = 1.0 - t;
    }

    if t <= 0.5 {
        stops.start.lerp(stops.mid, t * 2.0)
    } else {
        stops.mid.lerp(stops.end, (t - 0.5) * 2.0)
    }
}
