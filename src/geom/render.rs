use crate::area::CodeArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Bounding box of a code area as a WKT polygon.
pub fn area_to_wkt(area: &CodeArea) -> String {
    use wkt::ToWkt;
    area.to_polygon().wkt_string()
}

/// Bounding box of a code area as a GeoJSON polygon geometry.
pub fn area_to_geojson(area: &CodeArea) -> String {
    let geom = geojson::Geometry::from(&area.to_polygon());
    geom.to_string()
}

pub fn render_area(area: &CodeArea, format: GeometryFormat) -> String {
    match format {
        GeometryFormat::Wkt => area_to_wkt(area),
        GeometryFormat::GeoJson => area_to_geojson(area),
    }
}
