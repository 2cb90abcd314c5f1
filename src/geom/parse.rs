use crate::error::OlcError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

fn geometry_error(msg: impl ToString) -> OlcError {
    OlcError::GeometryParseError(msg.to_string())
}

/// Geometry text as found in a CSV cell.
enum GeometryText<'a> {
    GeoJson(&'a str),
    Wkt(&'a str),
}

impl<'a> GeometryText<'a> {
    /// GeoJSON is detected by a leading `{`, everything else is WKT.
    fn detect(s: &'a str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with('{') {
            GeometryText::GeoJson(trimmed)
        } else {
            GeometryText::Wkt(trimmed)
        }
    }

    fn parse(self) -> Result<Geometry<f64>, OlcError> {
        match self {
            GeometryText::GeoJson(text) => match text.parse::<GeoJson>().map_err(geometry_error)? {
                GeoJson::Geometry(geom) => Geometry::try_from(geom).map_err(geometry_error),
                GeoJson::Feature(feat) => {
                    let geom = feat
                        .geometry
                        .ok_or_else(|| geometry_error("Feature has no geometry"))?;
                    Geometry::try_from(geom).map_err(geometry_error)
                }
                GeoJson::FeatureCollection(_) => Err(geometry_error(
                    "FeatureCollection has no single location, use individual geometries",
                )),
            },
            GeometryText::Wkt(text) => Wkt::<f64>::from_str(text)
                .map_err(geometry_error)?
                .try_into()
                .map_err(|_| geometry_error("WKT has no geo-types equivalent")),
        }
    }
}

/// Parses WKT or GeoJSON (lon/lat) geometry text.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, OlcError> {
    GeometryText::detect(s).parse()
}

/// The single point a geometry is encoded at: the point itself, otherwise its centroid.
///
/// Coordinates are longitude/latitude (x/y).
pub fn geometry_anchor(geometry: &Geometry<f64>) -> Result<Point<f64>, OlcError> {
    match geometry {
        Geometry::Point(pt) => Ok(*pt),
        other => other
            .centroid()
            .ok_or_else(|| geometry_error("Geometry is empty")),
    }
}

/// Parses geometry text straight to the location a plus code is computed for.
///
/// # Example
/// ```
/// use olc_rs::{encode_coord, parse_location};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let location = parse_location("LINESTRING(8.52 47.36, 8.53 47.37)")?;
/// assert_eq!(encode_coord(&location, 6)?, "8FVC9G00+");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::GeometryParseError`] - Unparseable text, an empty geometry, or
///   a non-finite anchor
pub fn parse_location(s: &str) -> Result<Point<f64>, OlcError> {
    let anchor = geometry_anchor(&parse_geometry(s)?)?;
    if !(anchor.x().is_finite() && anchor.y().is_finite()) {
        return Err(geometry_error(format!(
            "Location is not finite: ({}, {})",
            anchor.x(),
            anchor.y()
        )));
    }
    Ok(anchor)
}
