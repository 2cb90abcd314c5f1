use crate::area::CodeArea;
use crate::error::OlcError;
use crate::index::constants::{
    GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, digit_value,
};
use crate::index::validate::is_full;

/// Decodes a full Open Location Code into the area it describes.
///
/// The input is never modified; separator and padding are stripped and the
/// code upper-cased on a copy.
///
/// # Process
///
/// 1. Rejects anything that is not a valid full code
/// 2. Strips the separator and padding, upper-cases the digits
/// 3. Decodes the first 10 digits as interleaved lat/lng pairs
/// 4. Decodes any remaining digits as grid refinements and adds them onto
///    the lower left corner of the pair area
///
/// # Example
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("8FVC9G8F+6XQH")?;
/// assert_eq!(area.code_length, 12);
/// assert!((area.latitude_center - 47.3655875).abs() < 1e-9);
/// assert!((area.longitude_center - 8.52499609375).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidFullCode`] - The code is malformed, short, or out of range
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    if !is_full(code) {
        return Err(OlcError::InvalidFullCode(code.to_string()));
    }

    let digits = significant_digits(code);

    let pair_area = decode_pairs(&digits[..digits.len().min(PAIR_CODE_LENGTH)]);
    if digits.len() <= PAIR_CODE_LENGTH {
        return Ok(pair_area);
    }

    let grid_area = decode_grid(&digits[PAIR_CODE_LENGTH..]);

    Ok(CodeArea::new(
        pair_area.latitude_lo + grid_area.latitude_lo,
        pair_area.longitude_lo + grid_area.longitude_lo,
        pair_area.latitude_lo + grid_area.latitude_hi,
        pair_area.longitude_lo + grid_area.longitude_hi,
        pair_area.code_length + grid_area.code_length,
    ))
}

/// Digit values of a validated code, with separator and padding removed.
pub(crate) fn significant_digits(code: &str) -> Vec<usize> {
    code.chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .filter_map(digit_value)
        .collect()
}

/// Decodes up to 10 interleaved lat/lng pair digits.
pub(crate) fn decode_pairs(digits: &[usize]) -> CodeArea {
    let (lat_lo, lat_hi) = decode_pairs_sequence(digits, 0);
    let (lng_lo, lng_hi) = decode_pairs_sequence(digits, 1);

    CodeArea::new(
        lat_lo - LATITUDE_MAX,
        lng_lo - LONGITUDE_MAX,
        lat_hi - LATITUDE_MAX,
        lng_hi - LONGITUDE_MAX,
        digits.len(),
    )
}

/// Decodes every second digit starting at `offset`.
///
/// Returns the low value and the low value plus the resolution of the last
/// position used, both still shifted into the positive range.
fn decode_pairs_sequence(digits: &[usize], offset: usize) -> (f64, f64) {
    let mut value = 0.0;
    let mut last_resolution = PAIR_RESOLUTIONS[0];

    for (i, &digit) in digits.iter().skip(offset).step_by(2).enumerate() {
        value += digit as f64 * PAIR_RESOLUTIONS[i];
        last_resolution = PAIR_RESOLUTIONS[i];
    }

    (value, value + last_resolution)
}

/// Decodes grid refinement digits into an area relative to the pair cell's
/// lower left corner.
pub(crate) fn decode_grid(digits: &[usize]) -> CodeArea {
    let mut latitude_lo = 0.0;
    let mut longitude_lo = 0.0;
    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;

    for &digit in digits {
        let (row, col) = grid_position(digit);

        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLUMNS as f64;

        latitude_lo += row as f64 * lat_place_value;
        longitude_lo += col as f64 * lng_place_value;
    }

    CodeArea::new(
        latitude_lo,
        longitude_lo,
        latitude_lo + lat_place_value,
        longitude_lo + lng_place_value,
        digits.len(),
    )
}

/// Row and column of a grid digit.
pub(crate) fn grid_position(digit: usize) -> (usize, usize) {
    (digit / GRID_COLUMNS, digit % GRID_COLUMNS)
}
