/// Error type for olc-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum OlcError {
    /// The requested code length is below 2, or odd and shorter than the separator position.
    InvalidCodeLength(usize),
    /// The code is not a valid full Open Location Code.
    InvalidFullCode(String),
    /// The code is neither a valid short code nor a valid full code.
    InvalidShortCode(String),
    /// The code cannot be shortened (padded, or too short to trim).
    CannotShorten(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// File I/O error.
    IoError(String),
}

impl std::fmt::Display for OlcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OlcError::InvalidCodeLength(len) => {
                write!(f, "Invalid Open Location Code length: {}", len)
            }
            OlcError::InvalidFullCode(code) => {
                write!(f, "Passed Open Location Code is not a valid full code: {}", code)
            }
            OlcError::InvalidShortCode(code) => {
                write!(f, "Passed Open Location Code is not a valid short code: {}", code)
            }
            OlcError::CannotShorten(msg) => write!(f, "Cannot shorten code: {}", msg),
            OlcError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            OlcError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            OlcError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for OlcError {}
