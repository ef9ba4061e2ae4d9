//! Expiry instants and their Lua encoding.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// A calendar-and-clock instant used as a whitelist expiry.
///
/// Fields are carried as-is in local time: there is no timezone
/// normalization and no range validation. The encoder substitutes each
/// field directly into the Lua `os.time` call, so an out-of-range field
/// (e.g. `day = 40`) produces output that is syntactically valid Lua but
/// semantically wrong. That pass-through is part of the contract - range
/// checking belongs to whoever constructs the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub min: u32,
}

impl Expiry {
    /// Create an expiry from explicit calendar fields.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Self {
        Self {
            day,
            month,
            year,
            hour,
            min,
        }
    }

    /// Build an expiry from a datetime, field by field.
    #[must_use]
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            day: dt.day(),
            month: dt.month(),
            year: dt.year(),
            hour: dt.hour(),
            min: dt.minute(),
        }
    }

    /// Encode as a Lua expression that reconstructs this instant as
    /// seconds since the epoch when evaluated by the script runtime.
    #[must_use]
    pub fn to_lua(&self) -> String {
        format!(
            "os.time({{day={}, month={}, year={}, hour={}, min={}}})",
            self.day, self.month, self.year, self.hour, self.min
        )
    }
}

impl From<NaiveDateTime> for Expiry {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_datetime(dt)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_to_lua_encoding() {
        let expiry = Expiry::new(2025, 1, 1, 12, 0);
        assert_eq!(
            expiry.to_lua(),
            "os.time({day=1, month=1, year=2025, hour=12, min=0})"
        );
    }

    #[test]
    fn test_from_datetime_fields() {
        let dt = NaiveDate::from_ymd_opt(2025, 11, 3)
            .expect("valid date")
            .and_hms_opt(23, 59, 58)
            .expect("valid time");
        let expiry = Expiry::from_datetime(dt);
        assert_eq!(expiry.year, 2025);
        assert_eq!(expiry.month, 11);
        assert_eq!(expiry.day, 3);
        assert_eq!(expiry.hour, 23);
        assert_eq!(expiry.min, 59);
    }

    #[test]
    fn test_out_of_range_fields_pass_through() {
        // day=40 is nonsense but the encoder does not validate
        let expiry = Expiry::new(2025, 1, 40, 0, 0);
        assert_eq!(
            expiry.to_lua(),
            "os.time({day=40, month=1, year=2025, hour=0, min=0})"
        );
    }
}
