use crate::index::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
    digit_value,
};

/// Determines if a code is a valid Open Location Code.
///
/// A valid code holds exactly one separator at an even position no later than
/// the eighth character, only alphabet characters otherwise (case-insensitive),
/// and at most one even-length run of padding placed directly before a final
/// separator. A single character after the separator is not allowed.
///
/// # Example
/// ```
/// use olc_rs::is_valid;
///
/// assert!(is_valid("8FVC9G8F+6X"));
/// assert!(is_valid("9G8F+6X"));
/// assert!(is_valid("8FVC0000+"));
/// assert!(!is_valid("8FVC9G8F6X"));
/// assert!(!is_valid("8F0C9G8F+"));
/// ```
pub fn is_valid(code: &str) -> bool {
    if code.is_empty() {
        return false;
    }

    let separator_index = match code.find(SEPARATOR) {
        Some(idx) => idx,
        None => return false,
    };
    if code.rfind(SEPARATOR) != Some(separator_index) {
        return false;
    }
    if separator_index > SEPARATOR_POSITION || separator_index % 2 == 1 {
        return false;
    }

    if let Some(pad_start) = code.find(PADDING_CHARACTER) {
        if pad_start == 0 {
            return false;
        }

        let pad_end = code.rfind(PADDING_CHARACTER).map_or(pad_start, |idx| idx + 1);
        let pad_run = &code[pad_start..pad_end];
        if pad_run.chars().any(|c| c != PADDING_CHARACTER) {
            return false;
        }
        if pad_run.len() % 2 == 1 || pad_run.len() > SEPARATOR_POSITION - 2 {
            return false;
        }
        if !code.ends_with(SEPARATOR) {
            return false;
        }
    }

    if code.len() - separator_index - 1 == 1 {
        return false;
    }

    code.chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .all(|c| digit_value(c).is_some())
}

/// Determines if a code is a valid short code.
///
/// A short code has fewer than eight characters before the separator and can
/// only be decoded once its missing prefix is recovered from a reference location.
///
/// # Example
/// ```
/// use olc_rs::is_short;
///
/// assert!(is_short("9G8F+6X"));
/// assert!(!is_short("8FVC9G8F+6X"));
/// ```
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    code.find(SEPARATOR).is_some_and(|idx| idx < SEPARATOR_POSITION)
}

/// Determines if a code is a valid full code.
///
/// Beyond being valid and not short, the first latitude digit must not
/// decode to 90 degrees or more, and the first longitude digit not to 180
/// degrees or more.
///
/// # Example
/// ```
/// use olc_rs::is_full;
///
/// assert!(is_full("8FVC9G8F+6X"));
/// assert!(!is_full("9G8F+6X"));
/// assert!(!is_full("WFVC9G8F+6X"));
/// ```
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let mut chars = code.chars();

    let first_lat_value = chars
        .next()
        .and_then(digit_value)
        .map(|v| v * ENCODING_BASE);
    match first_lat_value {
        Some(value) if (value as f64) < LATITUDE_MAX * 2.0 => {}
        _ => return false,
    }

    if let Some(c) = chars.next() {
        match digit_value(c) {
            Some(v) if ((v * ENCODING_BASE) as f64) < LONGITUDE_MAX * 2.0 => {}
            _ => return false,
        }
    }

    true
}
