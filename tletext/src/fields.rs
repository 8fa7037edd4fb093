//! Fixed-width field decoding for the canonical TLE column layout

use chrono::{Duration, NaiveDate, NaiveTime};
use nom::{
    character::complete::{digit1, space0},
    combinator::all_consuming,
    number::complete::double,
    sequence::delimited,
};
use std::ops::Range;
use tletypes::prelude::*;

/// Column ranges (0-indexed, end-exclusive) of the fields this decoder reads
mod columns {
    use std::ops::Range;

    pub const L1_EPOCH_YEAR: Range<usize> = 18..20;
    pub const L1_EPOCH_DAY: Range<usize> = 20..32;

    pub const L2_INCLINATION: Range<usize> = 8..16;
    pub const L2_RAAN: Range<usize> = 17..25;
    pub const L2_ECCENTRICITY: Range<usize> = 26..33;
    pub const L2_ARG_PERIGEE: Range<usize> = 34..42;
    pub const L2_MEAN_ANOMALY: Range<usize> = 43..51;
    pub const L2_MEAN_MOTION: Range<usize> = 52..63;
}

/// A subfield that is missing or not in its expected numeric format
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("TLE record '{record}': malformed {field} field")]
pub struct FieldError {
    pub record: String,
    pub field: &'static str,
}

/// Decode the mean orbital elements from a record's second line.
///
/// Decoding is a pure function of the line's character positions. Lines
/// shorter than the canonical width or fields that aren't in the expected
/// numeric format yield a [`FieldError`] naming the record and field.
pub fn decode_elements(record: &TleRecord) -> Result<MeanElements, FieldError> {
    let line2 = &record.line2;
    Ok(MeanElements {
        inclination_deg: decimal_field(record, line2, columns::L2_INCLINATION, "inclination")?,
        raan_deg: decimal_field(record, line2, columns::L2_RAAN, "RAAN")?,
        eccentricity: implied_decimal_field(
            record,
            line2,
            columns::L2_ECCENTRICITY,
            "eccentricity",
        )?,
        arg_perigee_deg: decimal_field(
            record,
            line2,
            columns::L2_ARG_PERIGEE,
            "argument of perigee",
        )?,
        mean_anomaly_deg: decimal_field(record, line2, columns::L2_MEAN_ANOMALY, "mean anomaly")?,
        mean_motion_rev_per_day: decimal_field(
            record,
            line2,
            columns::L2_MEAN_MOTION,
            "mean motion",
        )?,
    })
}

/// Decode the element-set epoch from a record's first line.
///
/// The epoch is a two-digit year (57..=99 maps into the 1900s, everything
/// below into the 2000s) followed by a fractional day of year.
pub fn decode_epoch(record: &TleRecord) -> Result<UtcTimestamp, FieldError> {
    let line1 = &record.line1;

    let year_digits = line1
        .get(columns::L1_EPOCH_YEAR)
        .and_then(digit_run)
        .ok_or_else(|| field_error(record, "epoch year"))?;
    let yy: i32 = year_digits
        .parse()
        .map_err(|_| field_error(record, "epoch year"))?;
    let year = if yy < 57 { 2000 + yy } else { 1900 + yy };

    let day = decimal_field(record, line1, columns::L1_EPOCH_DAY, "epoch day")?;
    let date = NaiveDate::from_yo_opt(year, day.trunc() as u32)
        .ok_or_else(|| field_error(record, "epoch day"))?;
    let midnight_offset_ns = (day.fract() * 86_400.0 * 1e9).round() as i64;
    let datetime = date.and_time(NaiveTime::MIN) + Duration::nanoseconds(midnight_offset_ns);
    Ok(datetime.and_utc())
}

fn field_error(record: &TleRecord, field: &'static str) -> FieldError {
    FieldError {
        record: record.name.clone(),
        field,
    }
}

/// A whole subfield as a decimal number, tolerating the format's
/// right-justified space padding
fn numeric(raw: &str) -> Option<f64> {
    let parsed: nom::IResult<&str, f64> = all_consuming(delimited(space0, double, space0))(raw);
    parsed.ok().map(|(_, value)| value)
}

/// A whole subfield as a run of decimal digits
fn digit_run(raw: &str) -> Option<&str> {
    let parsed: nom::IResult<&str, &str> = all_consuming(delimited(space0, digit1, space0))(raw);
    parsed.ok().map(|(_, digits)| digits)
}

fn decimal_field(
    record: &TleRecord,
    line: &str,
    cols: Range<usize>,
    field: &'static str,
) -> Result<f64, FieldError> {
    line.get(cols)
        .and_then(numeric)
        .ok_or_else(|| field_error(record, field))
}

/// Fields like eccentricity carry an implied leading "0."; the digit count
/// fixes the scale, so leading zeros are significant
fn implied_decimal_field(
    record: &TleRecord,
    line: &str,
    cols: Range<usize>,
    field: &'static str,
) -> Result<f64, FieldError> {
    let digits = line
        .get(cols)
        .and_then(digit_run)
        .ok_or_else(|| field_error(record, field))?;
    let mantissa: u64 = digits.parse().map_err(|_| field_error(record, field))?;
    Ok(mantissa as f64 / 10f64.powi(digits.len() as i32))
}
