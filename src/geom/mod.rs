mod parse;
mod render;

pub use parse::{geometry_anchor, parse_geometry, parse_location};
pub use render::{GeometryFormat, area_to_geojson, area_to_wkt, render_area};
