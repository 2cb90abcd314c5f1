//! # olc-rs
//!
//! Open Location Code (Plus Codes): a reversible mapping between a latitude/longitude
//! and a short code identifying a rectangular area.
//!
//! ### 1. Encoding and decoding
//!
//! ```
//! use olc_rs::{decode, encode};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = encode(47.365590, 8.524997, 10)?;
//! assert_eq!(code, "8FVC9G8F+6X");
//!
//! let area = decode(&code)?;
//! println!("{} {}", area.latitude_center, area.longitude_center);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Validation and short codes
//!
//! ```
//! use olc_rs::{is_full, is_short, recover_nearest, shorten};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! assert!(is_full("8FVC9G8F+6X"));
//! assert!(is_short("9G8F+6X"));
//!
//! let short = shorten("8FVC9G8F+6X", 47.5, 8.5)?;
//! assert_eq!(recover_nearest(&short, 47.4, 8.6)?, "8FVC9G8F+6X");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToPlusCode` - CSV File Conversion
//!
//! ```no_run
//! use olc_rs::{CsvPlusCodeConfig, CsvToPlusCode, GeometryFormat};
//!
//! let config = CsvPlusCodeConfig::from_coords("Latitude", "Longitude", 11)
//!     .with_area_geometry(GeometryFormat::GeoJson);
//!
//! "input.csv".to_plus_code_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod area;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;
pub mod record;

pub use area::CodeArea;
pub use coord::{Coordinate, clip_latitude, compute_latitude_precision, normalize_longitude};
pub use error::OlcError;
pub use geom::{GeometryFormat, area_to_geojson, area_to_wkt, parse_geometry, parse_location};
pub use index::{
    CODE_ALPHABET, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX,
    LONGITUDE_MAX, MAX_CODE_LENGTH, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION, alphabet, decode, encode, encode_coord,
    is_full, is_short, is_valid, recover_nearest, shorten,
};
pub use io::{CodeSource, CsvPlusCodeConfig, CsvToPlusCode, csv_to_plus_code_csv};
pub use record::{CoordinateChange, LocatedRecord, PlusCodeEncoder, PlusCodeOptions};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), OlcError> {
        let code = encode(47.365590, 8.524997, 12)?;
        assert_eq!(code, "8FVC9G8F+6XQH");
        assert!(is_valid(&code));
        assert!(is_full(&code));
        assert!(!is_short(&code));

        let area = decode(&code)?;
        assert_eq!(area.code_length, 12);
        assert!(area.contains(47.365590, 8.524997));

        let polygon = area.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_points() -> Result<(), OlcError> {
        let pt = point! { x: 8.524997, y: 47.365590 };
        let code = encode_coord(&pt, 10)?;
        let center = decode(&code)?.center();

        assert_eq!(encode_coord(&center, 10)?, code);
        Ok(())
    }

    #[test]
    fn test_validator_examples() {
        assert!(is_valid("8FVC9G8F+6X"));
        assert!(is_full("8FVC9G8F+6X"));
        assert!(!is_short("8FVC9G8F+6X"));

        assert!(is_valid("9G8F+6X"));
        assert!(is_short("9G8F+6X"));

        assert!(!is_valid(""));
        assert!(!is_valid("8FVC9G8F6X"));
        assert!(!is_valid("8FVC0000+6X"));
    }

    #[test]
    fn test_short_code_workflow() -> Result<(), OlcError> {
        let full = encode(51.5007, -0.1246, 10)?;
        let short = shorten(&full, 51.51, -0.12)?;
        assert!(is_short(&short));
        assert!(decode(&short).is_err());
        assert_eq!(recover_nearest(&short, 51.51, -0.12)?, full);
        Ok(())
    }

    #[test]
    fn test_area_geometry_output() -> Result<(), OlcError> {
        let area = decode("8FVC0000+")?;
        assert!(area_to_wkt(&area).starts_with("POLYGON"));
        assert!(area_to_geojson(&area).contains("Polygon"));
        Ok(())
    }

    #[test]
    fn test_alphabet() {
        assert_eq!(alphabet(), CODE_ALPHABET);
    }
}
