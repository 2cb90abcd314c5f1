use crate::index::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use geo_types::{Point, Polygon, Rect, coord};
use serde::Serialize;

/// The area described by a decoded Open Location Code.
///
/// Holds the latitude and longitude of the lower left and upper right corners,
/// the center of the bounding box, and the number of significant digits in the
/// code that produced it.
///
/// # Example
///
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("8FVC9G8F+6X")?;
/// assert_eq!(area.code_length, 10);
/// assert!(area.contains(area.latitude_center, area.longitude_center));
///
/// // Bounding box as a polygon for GIS operations
/// let polygon = area.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    /// Southern edge in degrees
    pub latitude_lo: f64,
    /// Western edge in degrees
    pub longitude_lo: f64,
    /// Northern edge in degrees
    pub latitude_hi: f64,
    /// Eastern edge in degrees
    pub longitude_hi: f64,
    /// Number of significant digits, excluding separator and padding
    pub code_length: usize,
    /// Center latitude, clamped to 90
    pub latitude_center: f64,
    /// Center longitude, clamped to 180
    pub longitude_center: f64,
}

impl CodeArea {
    pub fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        let latitude_center = (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX);
        let longitude_center =
            (longitude_lo + (longitude_hi - longitude_lo) / 2.0).min(LONGITUDE_MAX);

        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            code_length,
            latitude_center,
            longitude_center,
        }
    }

    /// Center of the area as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude_center, self.latitude_center)
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude_lo, y: self.latitude_lo },
            coord! { x: self.longitude_hi, y: self.latitude_hi },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Whether a point falls inside the area. Lower edges are inclusive, upper edges exclusive.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.latitude_lo..self.latitude_hi).contains(&latitude)
            && (self.longitude_lo..self.longitude_hi).contains(&longitude)
    }
}
