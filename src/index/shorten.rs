use crate::coord::{clip_latitude, normalize_longitude};
use crate::error::OlcError;
use crate::index::constants::{
    ENCODING_BASE, LATITUDE_MAX, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
use crate::index::decode::decode;
use crate::index::encode::encode;
use crate::index::validate::{is_full, is_short};

/// Fraction of a cell the reference may be away from the code center and still be trimmed.
const SHORTEN_SAFETY_FACTOR: f64 = 0.3;

/// Removes leading digits from a full code that a reference location makes redundant.
///
/// The closer the reference is to the center of the code area, the more digits
/// are removed: 4, 6 or 8. If the reference is too far away the full code is
/// returned unchanged (upper-cased).
///
/// # Example
/// ```
/// use olc_rs::shorten;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(shorten("8FVC9G8F+6X", 47.5, 8.5)?, "9G8F+6X");
/// assert_eq!(shorten("8FVC9G8F+6X", 47.37, 8.53)?, "8F+6X");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidFullCode`] - The code is not a valid full code
/// - [`OlcError::CannotShorten`] - The code is padded or has fewer than 6 digits
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String, OlcError> {
    if !is_full(code) {
        return Err(OlcError::InvalidFullCode(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(OlcError::CannotShorten(format!(
            "padded codes cannot be shortened: {}",
            code
        )));
    }

    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length < MIN_TRIMMABLE_CODE_LEN {
        return Err(OlcError::CannotShorten(format!(
            "code must contain at least {} digits: {}",
            MIN_TRIMMABLE_CODE_LEN, code
        )));
    }

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let range = (area.latitude_center - latitude)
        .abs()
        .max((area.longitude_center - longitude).abs());

    for i in (1..=PAIR_RESOLUTIONS.len() - 2).rev() {
        if range < PAIR_RESOLUTIONS[i] * SHORTEN_SAFETY_FACTOR {
            return Ok(code[(i + 1) * 2..].to_string());
        }
    }

    Ok(code)
}

/// Recovers the full code nearest to a reference location from a short code.
///
/// The missing leading digits are taken from the reference location. If that
/// places the result more than half a cell away from the reference, the cell
/// is moved one step toward it, so the nearest matching code is returned even
/// across a digit boundary. Full codes are returned upper-cased.
///
/// # Example
/// ```
/// use olc_rs::recover_nearest;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(recover_nearest("9G8F+6X", 47.4, 8.6)?, "8FVC9G8F+6X");
/// assert_eq!(recover_nearest("8F+6X", 47.37, 8.53)?, "8FVC9G8F+6X");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidShortCode`] - The code is neither a short nor a full code
pub fn recover_nearest(
    short_code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
) -> Result<String, OlcError> {
    if !is_short(short_code) {
        if is_full(short_code) {
            return Ok(short_code.to_ascii_uppercase());
        }
        return Err(OlcError::InvalidShortCode(short_code.to_string()));
    }

    let latitude = clip_latitude(reference_latitude);
    let longitude = normalize_longitude(reference_longitude);
    let short_code = short_code.to_ascii_uppercase();

    let separator_index = short_code
        .find(SEPARATOR)
        .ok_or_else(|| OlcError::InvalidShortCode(short_code.clone()))?;
    let padding_length = SEPARATOR_POSITION - separator_index;

    let resolution = (ENCODING_BASE as f64).powi(2 - (padding_length / 2) as i32);
    let half_resolution = resolution / 2.0;

    let reference_code = encode(latitude, longitude, PAIR_CODE_LENGTH)?;
    let candidate = format!("{}{}", &reference_code[..padding_length], short_code);
    let area = decode(&candidate)?;

    let mut center_lat = area.latitude_center;
    let mut center_lng = area.longitude_center;

    if latitude + half_resolution < center_lat && center_lat - resolution >= -LATITUDE_MAX {
        center_lat -= resolution;
    } else if latitude - half_resolution > center_lat && center_lat + resolution <= LATITUDE_MAX {
        center_lat += resolution;
    }

    if longitude + half_resolution < center_lng {
        center_lng -= resolution;
    } else if longitude - half_resolution > center_lng {
        center_lng += resolution;
    }

    encode(center_lat, center_lng, area.code_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_by_distance() -> Result<(), OlcError> {
        assert_eq!(shorten("8FVC9G8F+6X", 47.5, 8.5)?, "9G8F+6X");
        assert_eq!(shorten("8FVC9G8F+6X", 47.37, 8.53)?, "8F+6X");
        assert_eq!(shorten("8FVC9G8F+6X", 47.365, 8.525)?, "+6X");
        assert_eq!(shorten("8FVC9G8F+6X", 40.0, 8.5)?, "8FVC9G8F+6X");
        Ok(())
    }

    #[test]
    fn test_shorten_upper_cases() -> Result<(), OlcError> {
        assert_eq!(shorten("8fvc9g8f+6x", 47.5, 8.5)?, "9G8F+6X");
        Ok(())
    }

    #[test]
    fn test_shorten_rejects_padded_and_short_input() {
        assert!(matches!(
            shorten("8FVC0000+", 47.5, 8.5),
            Err(OlcError::CannotShorten(_))
        ));
        assert!(matches!(
            shorten("9G8F+6X", 47.5, 8.5),
            Err(OlcError::InvalidFullCode(_))
        ));
    }

    #[test]
    fn test_recover_nearest() -> Result<(), OlcError> {
        assert_eq!(recover_nearest("9G8F+6X", 47.4, 8.6)?, "8FVC9G8F+6X");
        assert_eq!(recover_nearest("8F+6X", 47.37, 8.53)?, "8FVC9G8F+6X");
        assert_eq!(recover_nearest("+6X", 47.365, 8.525)?, "8FVC9G8F+6X");
        assert_eq!(recover_nearest("9g8f+6x", 47.4, 8.6)?, "8FVC9G8F+6X");
        Ok(())
    }

    #[test]
    fn test_recover_full_code_passes_through() -> Result<(), OlcError> {
        assert_eq!(recover_nearest("8fvc9g8f+6x", 0.0, 0.0)?, "8FVC9G8F+6X");
        Ok(())
    }

    #[test]
    fn test_recover_rejects_invalid() {
        assert!(matches!(
            recover_nearest("9G8F6X", 47.4, 8.6),
            Err(OlcError::InvalidShortCode(_))
        ));
    }

    #[test]
    fn test_recover_across_cell_boundary() -> Result<(), OlcError> {
        // Reference just north of the 1 degree line, code just south of it
        let full = encode(46.9999, 8.5, 10)?;
        let short = shorten(&full, 46.95, 8.5)?;
        assert_eq!(recover_nearest(&short, 47.01, 8.5)?, full);
        Ok(())
    }

    #[test]
    fn test_shorten_then_recover() -> Result<(), OlcError> {
        let locations = [(47.365590, 8.524997), (-33.8568, 151.2153), (51.5007, -0.1246)];
        for (lat, lng) in locations {
            let full = encode(lat, lng, 11)?;
            let short = shorten(&full, lat + 0.001, lng - 0.001)?;
            assert!(short.len() < full.len());
            assert_eq!(recover_nearest(&short, lat + 0.001, lng - 0.001)?, full);
        }
        Ok(())
    }
}
