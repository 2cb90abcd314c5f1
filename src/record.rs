//! Keeping a stored plus code in step with a record's coordinates.
//!
//! A persistence layer calls [`LocatedRecord::save`] from its own save path.
//! The code is recomputed only when latitude or longitude changed since the
//! last save, and cleared when either coordinate has been removed.

use crate::area::CodeArea;
use crate::error::OlcError;
use crate::index::{PAIR_CODE_LENGTH, decode, encode};

/// Callback invoked when a record's coordinates change.
pub trait CoordinateChange {
    fn on_coordinate_change(&self, latitude: f64, longitude: f64) -> Result<String, OlcError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlusCodeOptions {
    pub code_length: usize,
}

impl Default for PlusCodeOptions {
    fn default() -> Self {
        Self {
            code_length: PAIR_CODE_LENGTH,
        }
    }
}

impl PlusCodeOptions {
    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }
}

/// Encodes coordinates at the configured code length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlusCodeEncoder {
    options: PlusCodeOptions,
}

impl PlusCodeEncoder {
    pub fn new(options: PlusCodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PlusCodeOptions {
        self.options
    }
}

impl CoordinateChange for PlusCodeEncoder {
    fn on_coordinate_change(&self, latitude: f64, longitude: f64) -> Result<String, OlcError> {
        encode(latitude, longitude, self.options.code_length)
    }
}

/// A record with optional coordinates and the plus code derived from them.
///
/// # Example
///
/// ```
/// use olc_rs::{LocatedRecord, PlusCodeEncoder};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let mut record = LocatedRecord::new(PlusCodeEncoder::default());
/// record.set_latitude(Some(47.365590));
/// record.set_longitude(Some(8.524997));
/// record.save()?;
///
/// assert_eq!(record.plus_code(), Some("8FVC9G8F+6X"));
/// let area = record.decode()?;
/// assert_eq!(area.code_length, 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LocatedRecord<H: CoordinateChange = PlusCodeEncoder> {
    hook: H,
    latitude: Option<f64>,
    longitude: Option<f64>,
    plus_code: Option<String>,
    changed: bool,
}

impl<H: CoordinateChange> LocatedRecord<H> {
    pub fn new(hook: H) -> Self {
        Self {
            hook,
            latitude: None,
            longitude: None,
            plus_code: None,
            changed: false,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn plus_code(&self) -> Option<&str> {
        self.plus_code.as_deref()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn set_latitude(&mut self, latitude: Option<f64>) {
        if self.latitude != latitude {
            self.latitude = latitude;
            self.changed = true;
        }
    }

    pub fn set_longitude(&mut self, longitude: Option<f64>) {
        if self.longitude != longitude {
            self.longitude = longitude;
            self.changed = true;
        }
    }

    /// Recomputes the stored code if the coordinates changed since the last save.
    ///
    /// On error the record stays marked as changed and the previous code is kept.
    pub fn save(&mut self) -> Result<(), OlcError> {
        if !self.changed {
            return Ok(());
        }

        self.plus_code = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(self.hook.on_coordinate_change(lat, lng)?),
            _ => None,
        };
        log::debug!("Recomputed plus code: {:?}", self.plus_code);

        self.changed = false;
        Ok(())
    }

    /// Decodes the stored code.
    ///
    /// # Errors
    ///
    /// - [`OlcError::InvalidFullCode`] - No code is stored, or it is not a full code
    pub fn decode(&self) -> Result<CodeArea, OlcError> {
        match &self.plus_code {
            Some(code) => decode(code),
            None => Err(OlcError::InvalidFullCode(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingHook {
        calls: Cell<usize>,
    }

    impl CoordinateChange for CountingHook {
        fn on_coordinate_change(&self, latitude: f64, longitude: f64) -> Result<String, OlcError> {
            self.calls.set(self.calls.get() + 1);
            encode(latitude, longitude, 8)
        }
    }

    #[test]
    fn test_save_encodes_when_both_present() -> Result<(), OlcError> {
        let mut record = LocatedRecord::new(PlusCodeEncoder::default());
        record.set_latitude(Some(47.365590));
        record.save()?;
        assert_eq!(record.plus_code(), None);

        record.set_longitude(Some(8.524997));
        record.save()?;
        assert_eq!(record.plus_code(), Some("8FVC9G8F+6X"));
        assert!(!record.is_changed());
        Ok(())
    }

    #[test]
    fn test_clearing_a_coordinate_clears_the_code() -> Result<(), OlcError> {
        let mut record = LocatedRecord::new(PlusCodeEncoder::default());
        record.set_latitude(Some(47.365590));
        record.set_longitude(Some(8.524997));
        record.save()?;

        record.set_longitude(None);
        record.save()?;
        assert_eq!(record.plus_code(), None);
        assert!(matches!(record.decode(), Err(OlcError::InvalidFullCode(_))));
        Ok(())
    }

    #[test]
    fn test_unchanged_record_skips_hook() -> Result<(), OlcError> {
        let mut record = LocatedRecord::new(CountingHook {
            calls: Cell::new(0),
        });
        record.set_latitude(Some(47.365590));
        record.set_longitude(Some(8.524997));
        record.save()?;
        record.save()?;
        record.set_latitude(Some(47.365590));
        record.save()?;

        assert_eq!(record.hook.calls.get(), 1);
        assert_eq!(record.plus_code(), Some("8FVC9G8F+"));
        Ok(())
    }

    #[test]
    fn test_options_code_length() -> Result<(), OlcError> {
        let encoder = PlusCodeEncoder::new(PlusCodeOptions::default().code_length(12));
        assert_eq!(encoder.options().code_length, 12);
        assert_eq!(
            encoder.on_coordinate_change(47.365590, 8.524997)?,
            "8FVC9G8F+6XQH"
        );
        Ok(())
    }

    #[test]
    fn test_failed_save_keeps_record_dirty() {
        let encoder = PlusCodeEncoder::new(PlusCodeOptions::default().code_length(3));
        let mut record = LocatedRecord::new(encoder);
        record.set_latitude(Some(1.0));
        record.set_longitude(Some(2.0));

        assert_eq!(record.save(), Err(OlcError::InvalidCodeLength(3)));
        assert!(record.is_changed());
        assert_eq!(record.plus_code(), None);
    }

    #[test]
    fn test_decode_stored_code() -> Result<(), OlcError> {
        let mut record = LocatedRecord::new(PlusCodeEncoder::default());
        record.set_latitude(Some(47.365590));
        record.set_longitude(Some(8.524997));
        record.save()?;

        let area = record.decode()?;
        assert!(area.contains(47.365590, 8.524997));
        Ok(())
    }
}
