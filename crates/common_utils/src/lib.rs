#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

//! Utilities shared by the fingerprint generator and the demo harness.

pub mod crypto;
pub mod errors;

/// Date-time utilities.
pub mod date_time {
    use error_stack::ResultExt;
    use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime};

    use crate::errors::{CustomResult, ValidationError};

    /// Create a new [`PrimitiveDateTime`] with the current date and time in UTC.
    pub fn now() -> PrimitiveDateTime {
        let utc_date_time = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
    }

    /// Format a date-time the way the payment gateway expects it: `YYYY-MM-DDTHH:mm:ss`,
    /// without fractional seconds or an offset.
    pub fn format_gateway_timestamp(
        date_time: PrimitiveDateTime,
    ) -> CustomResult<String, ValidationError> {
        date_time
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second]"
            ))
            .change_context(ValidationError::InvalidValue {
                message: "date-time cannot be formatted as a gateway timestamp".to_string(),
            })
    }

    /// Current UTC time as a gateway timestamp.
    pub fn gateway_timestamp() -> CustomResult<String, ValidationError> {
        format_gateway_timestamp(now())
    }

}

/// Functional programming utilities
pub mod fp_utils {
    /// Run `f` only when `predicate` holds, otherwise succeed.
    pub fn when<W, F>(predicate: bool, f: F) -> Result<(), W>
    where
        F: FnOnce() -> Result<(), W>,
    {
        if predicate {
            f()
        } else {
            Ok(())
        }
    }
}
