//! GPS timestamps (`GPSU`) and per-sample time derivation.
//!
//! GPMF logs one UTC timestamp per GPS cluster (roughly once a second),
//! while the cluster holds 10-18 positions. Timestamps for individual
//! positions are spread evenly between two consecutive `GPSU` anchors.

use time::{Date, Month, PrimitiveDateTime, Time};

use crate::constants::GPSU_LENGTH;
use crate::GpmfError;

/// Parse a `GPSU` value, `YYMMDDhhmmss.fff`, as UTC.
pub fn parse_gpsu(bytes: &[u8]) -> Result<PrimitiveDateTime, GpmfError> {
    let invalid = || GpmfError::InvalidTimestamp(String::from_utf8_lossy(bytes).to_string());

    if bytes.len() != GPSU_LENGTH || bytes[12] != b'.' {
        return Err(invalid());
    }

    let field = |start: usize, len: usize| -> Result<u16, GpmfError> {
        bytes[start..start + len]
            .iter()
            .try_fold(0_u16, |acc, &b| match b {
                b'0'..=b'9' => Ok(acc * 10 + (b - b'0') as u16),
                _ => Err(invalid()),
            })
    };

    let yy = field(0, 2)?;
    // Two-digit years 69-99 are 19xx, 00-68 20xx
    let year = if yy >= 69 { 1900 + yy } else { 2000 + yy };
    let month = Month::try_from(field(2, 2)? as u8).map_err(|_| invalid())?;
    let day = field(4, 2)? as u8;
    let hour = field(6, 2)? as u8;
    let minute = field(8, 2)? as u8;
    let second = field(10, 2)? as u8;
    let millisecond = field(13, 3)?;

    let date = Date::from_calendar_date(year as i32, month, day).map_err(|_| invalid())?;
    let time = Time::from_hms_milli(hour, minute, second, millisecond).map_err(|_| invalid())?;

    Ok(PrimitiveDateTime::new(date, time))
}

/// Microseconds since the Unix epoch, `datetime` taken as UTC.
pub fn unix_micros(datetime: &PrimitiveDateTime) -> i64 {
    (datetime.assume_utc().unix_timestamp_nanos() / 1000) as i64
}

/// Offset in whole milliseconds of sample `index` out of `samples`
/// evenly spaced between `anchor` and `next`.
///
/// Without a following anchor there is no way to tell the spacing,
/// so every sample gets the anchor itself (offset 0).
pub fn sample_offset_ms(
    anchor: &PrimitiveDateTime,
    next: Option<&PrimitiveDateTime>,
    samples: usize,
    index: usize,
) -> i64 {
    let Some(next) = next else {
        return 0;
    };
    if samples == 0 {
        return 0;
    }
    let offset = (*next - *anchor).as_seconds_f64() / samples as f64;
    // Truncated towards zero
    (index as f64 * offset * 1000.0) as i64
}
