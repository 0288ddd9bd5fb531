use crate::error::{
    CoordinateError,
    coordinate_error::{EmptySnafu, FormatSnafu, HemisphereSnafu, ParseSnafu},
};
use snafu::ResultExt;

/// Parses a coordinate that is either given in decimal degrees (`-74.0061`) or in
/// degrees/minutes/seconds with a trailing hemisphere (`46°59'00"N`).
pub fn parse_coordinate(value: &str) -> Result<f64, CoordinateError> {
    let value = value.trim();
    if value.is_empty() {
        return EmptySnafu.fail();
    }

    match value.parse::<f64>() {
        Ok(v) => Ok(v),
        Err(_) => dms_to_decimal(value),
    }
}

/// Converts a degrees/minutes/seconds string such as `46°59'00"N` to decimal degrees.
/// Southern and western hemispheres yield negative values.
///
/// Minutes and seconds may be omitted (`46°N`, `46°59'N`). Any non-numeric character acts as a
/// separator, which also covers a degree sign that was decoded as `Â°`.
pub fn dms_to_decimal(value: &str) -> Result<f64, CoordinateError> {
    let value = value.trim();
    let Some(hemisphere) = value.chars().last() else {
        return EmptySnafu.fail();
    };

    let sign = match hemisphere.to_ascii_uppercase() {
        'N' | 'E' => 1.0,
        'S' | 'W' => -1.0,
        _ => return HemisphereSnafu { value }.fail(),
    };

    let body = &value[..value.len() - hemisphere.len_utf8()];

    let parts = body
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f64>().context(ParseSnafu { value }))
        .collect::<Result<Vec<_>, _>>()?;

    let (degrees, minutes, seconds) = match parts.as_slice() {
        [d] => (*d, 0.0, 0.0),
        [d, m] => (*d, *m, 0.0),
        [d, m, s] => (*d, *m, *s),
        _ => return FormatSnafu { value }.fail(),
    };

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}
