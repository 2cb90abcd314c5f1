use crate::index::constants::{
    ENCODING_BASE, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, PAIR_CODE_LENGTH,
};
use geo_types::Point;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`, with x as
/// longitude and y as latitude. This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Clips a latitude into the range -90 to 90.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Normalizes a longitude into the range -180 to 180, not including 180.
///
/// Non-finite input is returned unchanged.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() {
        return longitude;
    }
    let span = LONGITUDE_MAX * 2.0;
    let mut lng = longitude;
    if !(-LONGITUDE_MAX..LONGITUDE_MAX).contains(&lng) {
        lng -= span * ((lng + LONGITUDE_MAX) / span).floor();
    }
    // Reduction can land on the open end through rounding.
    if lng >= LONGITUDE_MAX {
        lng -= span;
    } else if lng < -LONGITUDE_MAX {
        lng += span;
    }
    lng
}

/// Computes the latitude precision in degrees for a given code length.
///
/// Lengths up to 10 have the same precision for latitude and longitude. Longer
/// codes divide latitude by the number of grid rows per extra digit, since the
/// grid has fewer columns than rows.
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    let base = ENCODING_BASE as f64;
    if code_length <= PAIR_CODE_LENGTH {
        return base.powi((2.0 - code_length as f64 / 2.0).floor() as i32);
    }
    base.powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}
