use crate::coord::{Coordinate, clip_latitude, compute_latitude_precision, normalize_longitude};
use crate::error::OlcError;
use crate::index::constants::{
    GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX, LONGITUDE_MAX, MAX_CODE_LENGTH,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
    digit_char,
};

/// Encodes a location into an Open Location Code of the given length.
///
/// Latitude is clipped to [-90, 90] and longitude normalized to [-180, 180).
/// Lengths up to 10 use the lat/lng pair method; each digit beyond 10 refines
/// the area with a 4x5 grid. Lengths above 15 are treated as 15.
///
/// # Process
///
/// 1. Rejects lengths below 2, and odd lengths below the separator position
/// 2. Clips and normalizes the coordinates
/// 3. Pulls latitudes at (or rounding onto) 90 down by one cell, and wraps
///    longitudes rounding onto 180 to -180, so the code stays decodable
/// 4. Encodes up to 10 digits as interleaved base-20 lat/lng pairs
/// 5. Appends one grid digit per requested digit past 10
///
/// # Example
/// ```
/// use olc_rs::encode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(encode(47.365590, 8.524997, 10)?, "8FVC9G8F+6X");
/// assert_eq!(encode(47.365590, 8.524997, 12)?, "8FVC9G8F+6XQH");
/// assert_eq!(encode(47.365590, 8.524997, 4)?, "8FVC0000+");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCodeLength`] - Length below 2, or odd and below 8
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, OlcError> {
    if code_length < 2 || (code_length < SEPARATOR_POSITION && code_length % 2 == 1) {
        return Err(OlcError::InvalidCodeLength(code_length));
    }
    let code_length = code_length.min(MAX_CODE_LENGTH);

    let mut latitude = clip_latitude(latitude);
    let mut longitude = normalize_longitude(longitude);

    // Shifted values must stay below 180 / 360, including ones that round up
    // onto the bound.
    if latitude + LATITUDE_MAX >= 2.0 * LATITUDE_MAX {
        latitude = LATITUDE_MAX - compute_latitude_precision(code_length);
    }
    if longitude + LONGITUDE_MAX >= 2.0 * LONGITUDE_MAX {
        longitude = -LONGITUDE_MAX;
    }

    let mut code = encode_pairs(latitude, longitude, code_length.min(PAIR_CODE_LENGTH));

    if code_length > PAIR_CODE_LENGTH {
        code.push_str(&encode_grid(
            latitude,
            longitude,
            code_length - PAIR_CODE_LENGTH,
        ));
    }

    Ok(code)
}

/// Encodes a [`Coordinate`] (x = longitude, y = latitude).
///
/// # Example
/// ```
/// use olc_rs::encode_coord;
/// use geo_types::point;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let pt = point! { x: 8.524997, y: 47.365590 };
/// assert_eq!(encode_coord(&pt, 10)?, "8FVC9G8F+6X");
/// # Ok(())
/// # }
/// ```
pub fn encode_coord<C: Coordinate>(coord: &C, code_length: usize) -> Result<String, OlcError> {
    encode(coord.y(), coord.x(), code_length)
}

/// Encodes a location with the lat/lng pair method.
///
/// Produces `code_length` digits (at most 10), inserting the separator after
/// the eighth digit and padding shorter codes out to the separator.
pub(crate) fn encode_pairs(latitude: f64, longitude: f64, code_length: usize) -> String {
    let mut code = String::with_capacity(SEPARATOR_POSITION + 3);

    let mut adjusted_latitude = latitude + LATITUDE_MAX;
    let mut adjusted_longitude = longitude + LONGITUDE_MAX;

    // Count digits separately, the code may already hold a separator.
    let mut digit_count = 0;

    while digit_count < code_length {
        let place_value = PAIR_RESOLUTIONS[digit_count / 2];

        let digit_value = (adjusted_latitude / place_value).floor();
        adjusted_latitude -= digit_value * place_value;
        code.push(digit_char(digit_value as usize));
        digit_count += 1;

        let digit_value = (adjusted_longitude / place_value).floor();
        adjusted_longitude -= digit_value * place_value;
        code.push(digit_char(digit_value as usize));
        digit_count += 1;

        if digit_count == SEPARATOR_POSITION && digit_count < code_length {
            code.push(SEPARATOR);
        }
    }

    if code.len() < SEPARATOR_POSITION {
        let padding = SEPARATOR_POSITION - code.len();
        code.extend(std::iter::repeat_n(PADDING_CHARACTER, padding));
    }

    if code.len() == SEPARATOR_POSITION {
        code.push(SEPARATOR);
    }

    code
}

/// Encodes the refinement digits with the grid method.
///
/// Each digit divides the current cell into 5 rows and 4 columns, starting
/// from the 0.000125 degree cell left by the pair method.
pub(crate) fn encode_grid(latitude: f64, longitude: f64, code_length: usize) -> String {
    let mut code = String::with_capacity(code_length);
    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;

    let mut adjusted_latitude = (latitude + LATITUDE_MAX) % lat_place_value;
    let mut adjusted_longitude = (longitude + LONGITUDE_MAX) % lng_place_value;

    for _ in 0..code_length {
        let row = (adjusted_latitude / (lat_place_value / GRID_ROWS as f64)).floor();
        let col = (adjusted_longitude / (lng_place_value / GRID_COLUMNS as f64)).floor();

        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLUMNS as f64;

        adjusted_latitude -= row * lat_place_value;
        adjusted_longitude -= col * lng_place_value;

        let row = (row as usize).min(GRID_ROWS - 1);
        let col = (col as usize).min(GRID_COLUMNS - 1);
        code.push(digit_char(row * GRID_COLUMNS + col));
    }

    code
}
