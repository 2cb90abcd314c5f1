pub mod constants;
mod decode;
mod encode;
mod shorten;
mod validate;

pub use constants::{
    CODE_ALPHABET, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX,
    LONGITUDE_MAX, MAX_CODE_LENGTH, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION, alphabet,
};
pub use decode::decode;
pub use encode::{encode, encode_coord};
pub use shorten::{recover_nearest, shorten};
pub use validate::{is_full, is_short, is_valid};
