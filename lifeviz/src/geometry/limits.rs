// Fixed layout numbers that are not part of the user configuration.

use std::f64::consts::{FRAC_PI_2, PI};

/// Latitude (radians) where Mercator y reaches ±π; the projected map is square.
pub const MERCATOR_MAX_LAT: f64 = 1.4844222297453324;

// Legend swatches: 100 strips sampled at 0.00, 0.01, .. 0.99.
pub const LEGEND_SWATCHES: usize = 100;
pub const LEGEND_SWATCH_HEIGHT: f64 = 2.0;

// Axis geometry, px.
pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
pub const AXIS_FONT_SIZE: f64 = 10.0;

// Band padding of the comparison scene, as a fraction of the step.
pub const BAR_PADDING: f64 = 0.1;

// Annotation text line height, px.
pub const NOTE_LINE_HEIGHT: f64 = 14.0;
pub const NOTE_PADDING: f64 = 3.0;

/// Path coordinates are written with this many decimals.
pub const PATH_DIGITS: usize = 3;

#[inline]
pub fn clamp_lat(phi: f64) -> f64 {
    phi.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT)
}

#[inline]
pub fn wrap_lon(lambda: f64) -> f64 {
    if lambda > PI {
        lambda - 2.0 * PI
    } else if lambda < -PI {
        lambda + 2.0 * PI
    } else {
        lambda
    }
}

#[inline]
pub fn mercator_y(phi: f64) -> f64 {
    ((FRAC_PI_2 + phi) / 2.0).tan().ln()
}
