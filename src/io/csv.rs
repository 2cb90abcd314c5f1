use crate::area::CodeArea;
use crate::error::OlcError;
use crate::geom::{GeometryFormat, parse_location, render_area};
use crate::index::{PAIR_CODE_LENGTH, decode, encode};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

enum SourceIndices {
    Coordinates { lat_idx: usize, lng_idx: usize },
    Geometry(usize),
    Code(usize),
}

#[derive(Debug, Clone)]
pub enum CodeSource {
    /// Separate latitude and longitude columns, encoded into a plus code
    CoordinateColumns {
        latitude_column: String,
        longitude_column: String,
    },
    /// A single column containing WKT or GeoJSON geometry (lon/lat), encoded at its centroid
    GeometryColumn(String),
    /// A column of full plus codes, decoded to the center of their area
    CodeColumn(String),
}

#[derive(Debug, Clone)]
pub struct CsvPlusCodeConfig {
    pub source: CodeSource,
    pub exclude_columns: Vec<String>,
    pub code_length: usize,
    pub include_area_geometry: Option<GeometryFormat>,
}

impl CsvPlusCodeConfig {
    /// Create config for a CSV with separate latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use olc_rs::CsvPlusCodeConfig;
    ///
    /// let config = CsvPlusCodeConfig::from_coords("Latitude", "Longitude", 11);
    /// assert_eq!(config.code_length, 11);
    /// ```
    pub fn from_coords(
        latitude_column: impl Into<String>,
        longitude_column: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self {
            source: CodeSource::CoordinateColumns {
                latitude_column: latitude_column.into(),
                longitude_column: longitude_column.into(),
            },
            exclude_columns: Vec::new(),
            code_length,
            include_area_geometry: None,
        }
    }

    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    pub fn from_geometry(geometry_column: impl Into<String>, code_length: usize) -> Self {
        Self {
            source: CodeSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            code_length,
            include_area_geometry: None,
        }
    }

    /// Create config for a CSV with a column of plus codes to decode.
    pub fn from_codes(code_column: impl Into<String>) -> Self {
        Self {
            source: CodeSource::CodeColumn(code_column.into()),
            exclude_columns: Vec::new(),
            code_length: PAIR_CODE_LENGTH,
            include_area_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    // Include the code area polygon in output.
    pub fn with_area_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_area_geometry = Some(format);
        self
    }
}

pub trait CsvToPlusCode {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPlusCodeConfig,
    ) -> Result<usize, OlcError>;
}

impl<P: AsRef<Path>> CsvToPlusCode for P {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPlusCodeConfig,
    ) -> Result<usize, OlcError> {
        csv_to_plus_code_csv(self, output_path, config)
    }
}

fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    label: &str,
) -> Result<usize, OlcError> {
    if column.is_empty() {
        return Err(OlcError::CsvError(format!(
            "{} column name cannot be empty",
            label
        )));
    }
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| OlcError::CsvError(format!("{} column '{}' not found", label, column)))
}

fn field<'r>(record: &'r csv::StringRecord, idx: usize, row: u64) -> Result<&'r str, OlcError> {
    record.get(idx).map(str::trim).ok_or_else(|| {
        OlcError::CsvError(format!("Row {}: missing column at index {}", row, idx))
    })
}

fn parse_coordinate(value: &str, label: &str, row: u64) -> Result<f64, OlcError> {
    value
        .parse()
        .map_err(|_| OlcError::CsvError(format!("Row {}: invalid {}: '{}'", row, label, value)))
}

/// Converts a CSV file to one with plus codes, or decodes a plus code column.
///
/// Streams output row by row. Encoding sources write a leading `plus_code`
/// column and drop their source columns; the code source writes leading
/// `latitude`/`longitude` columns (area center) and keeps the code column.
/// Returns the number of data rows written.
///
/// # Example with coordinate columns
///
/// ```no_run
/// use olc_rs::{csv_to_plus_code_csv, CsvPlusCodeConfig, GeometryFormat};
///
/// let config = CsvPlusCodeConfig::from_coords("Latitude", "Longitude", 10)
///     .exclude(vec!["Notes".into()])
///     .with_area_geometry(GeometryFormat::Wkt);
///
/// csv_to_plus_code_csv("stops.csv", "stops_olc.csv", &config).unwrap();
/// ```
///
/// # Example decoding codes
///
/// ```no_run
/// use olc_rs::{CsvPlusCodeConfig, CsvToPlusCode};
///
/// let config = CsvPlusCodeConfig::from_codes("plus_code");
/// "addresses.csv".to_plus_code_csv("addresses_latlng.csv", &config).unwrap();
/// ```
pub fn csv_to_plus_code_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvPlusCodeConfig,
) -> Result<usize, OlcError> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(|e| OlcError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| OlcError::CsvError(e.to_string()))?
        .clone();

    let mut exclude_indices = HashSet::new();
    let source_indices = match &config.source {
        CodeSource::CoordinateColumns {
            latitude_column,
            longitude_column,
        } => {
            let lat_idx = column_index(&headers, latitude_column, "Latitude")?;
            let lng_idx = column_index(&headers, longitude_column, "Longitude")?;
            exclude_indices.insert(lat_idx);
            exclude_indices.insert(lng_idx);
            SourceIndices::Coordinates { lat_idx, lng_idx }
        }
        CodeSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            exclude_indices.insert(idx);
            SourceIndices::Geometry(idx)
        }
        CodeSource::CodeColumn(col) => SourceIndices::Code(column_index(&headers, col, "Code")?),
    };

    for col_name in &config.exclude_columns {
        match headers.iter().position(|h| h == col_name) {
            Some(idx) => {
                exclude_indices.insert(idx);
            }
            None => log::debug!("Excluded column '{}' not present, ignoring", col_name),
        }
    }

    let out_file = File::create(output_path).map_err(|e| OlcError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = match source_indices {
        SourceIndices::Code(_) => vec!["latitude", "longitude"],
        _ => vec!["plus_code"],
    };
    if config.include_area_geometry.is_some() {
        header_row.push("code_area");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| OlcError::CsvError(e.to_string()))?;

    let mut written = 0;
    for result in reader.records() {
        let record = result.map_err(|e| OlcError::CsvError(e.to_string()))?;
        let row = record.position().map_or(0, |p| p.line());

        let (mut out_row, area): (Vec<String>, CodeArea) = match &source_indices {
            SourceIndices::Coordinates { lat_idx, lng_idx } => {
                let lat = parse_coordinate(field(&record, *lat_idx, row)?, "latitude", row)?;
                let lng = parse_coordinate(field(&record, *lng_idx, row)?, "longitude", row)?;
                let code = encode(lat, lng, config.code_length)?;
                let area = decode(&code)?;
                (vec![code], area)
            }
            SourceIndices::Geometry(idx) => {
                let anchor = parse_location(field(&record, *idx, row)?)?;
                let code = encode(anchor.y(), anchor.x(), config.code_length)?;
                let area = decode(&code)?;
                (vec![code], area)
            }
            SourceIndices::Code(idx) => {
                let code = field(&record, *idx, row)?;
                let area =
                    decode(code).map_err(|e| OlcError::CsvError(format!("Row {}: {}", row, e)))?;
                (
                    vec![
                        area.latitude_center.to_string(),
                        area.longitude_center.to_string(),
                    ],
                    area,
                )
            }
        };
        log::debug!("Row {}: {:?}", row, out_row);

        if let Some(format) = config.include_area_geometry {
            out_row.push(render_area(&area, format));
        }

        for (i, value) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                out_row.push(value.to_string());
            }
        }
        writer
            .write_record(&out_row)
            .map_err(|e| OlcError::CsvError(e.to_string()))?;
        written += 1;
    }

    writer.flush().map_err(|e| OlcError::IoError(e.to_string()))?;

    log::info!("Wrote {} rows from {}", written, csv_path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_input(path: &Path, lines: &[&str]) -> Result<(), OlcError> {
        let mut file = File::create(path).map_err(|e| OlcError::IoError(e.to_string()))?;
        for line in lines {
            writeln!(file, "{}", line).map_err(|e| OlcError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    fn read_rows(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), OlcError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| OlcError::CsvError(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| OlcError::CsvError(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|r| {
                r.map(|rec| rec.iter().map(String::from).collect())
                    .map_err(|e| OlcError::CsvError(e.to_string()))
            })
            .collect::<Result<Vec<Vec<String>>, _>>()?;
        Ok((headers, rows))
    }

    #[test]
    fn test_csv_from_coords() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("input.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ID,Latitude,Longitude,Name",
                "1,47.365590,8.524997,Zurich",
                "2,-41.2730625,174.7859375,Wellington",
            ],
        )?;

        let config = CsvPlusCodeConfig::from_coords("Latitude", "Longitude", 10);
        let written = csv_to_plus_code_csv(&csv_path, &output_path, &config)?;
        assert_eq!(written, 2);

        let (headers, rows) = read_rows(&output_path)?;
        assert_eq!(headers, vec!["plus_code", "ID", "Name"]);
        assert_eq!(rows[0], vec!["8FVC9G8F+6X", "1", "Zurich"]);
        assert_eq!(rows[1], vec!["4VCPPQGP+Q9", "2", "Wellington"]);
        Ok(())
    }

    #[test]
    fn test_csv_from_geometry_with_area() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("input.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ASSET_ID,geometry",
                "A1,\"POINT(8.524997 47.365590)\"",
                "A2,\"{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[8.524997,47.365590]}\"",
            ],
        )?;

        let config = CsvPlusCodeConfig::from_geometry("geometry", 12)
            .with_area_geometry(GeometryFormat::GeoJson);
        csv_to_plus_code_csv(&csv_path, &output_path, &config)?;

        let (headers, rows) = read_rows(&output_path)?;
        assert_eq!(headers, vec!["plus_code", "code_area", "ASSET_ID"]);
        for row in &rows {
            assert_eq!(row[0], "8FVC9G8F+6XQH");
            assert!(row[1].contains("Polygon"));
        }
        Ok(())
    }

    #[test]
    fn test_csv_decode_codes() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("input.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["code,label", "8FVC0000+,cell", "8FVC9G8F+6X,door"])?;

        let config = CsvPlusCodeConfig::from_codes("code").exclude(vec!["missing".into()]);
        csv_path.to_plus_code_csv(&output_path, &config)?;

        let (headers, rows) = read_rows(&output_path)?;
        assert_eq!(headers, vec!["latitude", "longitude", "code", "label"]);
        assert_eq!(rows[0][0], "47.5");
        assert_eq!(rows[0][1], "8.5");
        assert_eq!(rows[0][2], "8FVC0000+");
        Ok(())
    }

    #[test]
    fn test_csv_invalid_code_names_row() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("input.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["code", "8FVC9G8F+6X", "9G8F+6X"])?;

        let config = CsvPlusCodeConfig::from_codes("code");
        let result = csv_to_plus_code_csv(&csv_path, &output_path, &config);
        match result {
            Err(OlcError::CsvError(msg)) => assert!(msg.starts_with("Row 3")),
            other => panic!("Expected CsvError, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_csv_missing_column() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("input.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["lat,lon", "1,2"])?;

        let config = CsvPlusCodeConfig::from_coords("Latitude", "lon", 10);
        let result = csv_to_plus_code_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(OlcError::CsvError(_))));
        Ok(())
    }

    #[test]
    fn test_csv_bad_coordinate() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("input.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["lat,lng", "north,2"])?;

        let config = CsvPlusCodeConfig::from_coords("lat", "lng", 10);
        let result = csv_to_plus_code_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(OlcError::CsvError(_))));
        Ok(())
    }

    #[test]
    fn test_csv_invalid_length_propagates() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("input.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["lat,lng", "1,2"])?;

        let config = CsvPlusCodeConfig::from_coords("lat", "lng", 3);
        let result = csv_to_plus_code_csv(&csv_path, &output_path, &config);
        assert_eq!(result, Err(OlcError::InvalidCodeLength(3)));
        Ok(())
    }
}
