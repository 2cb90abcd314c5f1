/// Separator used to break the code into two parts to aid memorability
pub const SEPARATOR: char = '+';

/// Number of characters placed before the separator
pub const SEPARATOR_POSITION: usize = 8;

/// Character used to pad codes
pub const PADDING_CHARACTER: char = '0';

/// Character set used to encode values, index-in-string is the digit value
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Numeric base of the encoding
pub const ENCODING_BASE: usize = 20;

/// Maximum value for latitude in degrees
pub const LATITUDE_MAX: f64 = 90.0;

/// Maximum value for longitude in degrees
pub const LONGITUDE_MAX: f64 = 180.0;

/// Number of digits encoded by the lat/lng pair method
pub const PAIR_CODE_LENGTH: usize = 10;

/// Place value in degrees for each of the five pair positions
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Number of columns in the grid refinement method
pub const GRID_COLUMNS: usize = 4;

/// Number of rows in the grid refinement method
pub const GRID_ROWS: usize = 5;

/// Size of the initial grid cell in degrees
pub const GRID_SIZE_DEGREES: f64 = 0.000125;

/// Minimum length of a code that can be shortened
pub const MIN_TRIMMABLE_CODE_LEN: usize = 6;

/// Longest code (in digits) that encode will produce
pub const MAX_CODE_LENGTH: usize = 15;

pub(crate) const ALPHABET_BYTES: &[u8] = CODE_ALPHABET.as_bytes();

/// Returns the Open Location Code alphabet.
pub fn alphabet() -> &'static str {
    CODE_ALPHABET
}

/// Value of a code character, case-insensitive. `None` for characters outside the alphabet.
pub(crate) fn digit_value(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    CODE_ALPHABET.find(upper)
}

/// Character for a digit value, capped at the top of the alphabet.
pub(crate) fn digit_char(value: usize) -> char {
    ALPHABET_BYTES[value.min(ENCODING_BASE - 1)] as char
}
