use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error};

use crate::coordinates::parse_coordinate;

/// AIS uses 511 to signal that the true heading is not available.
pub const HEADING_NOT_AVAILABLE: f64 = 511.0;
/// AIS uses 102.3 knots to signal that speed over ground is not available.
pub const SPEED_NOT_AVAILABLE: f64 = 102.3;

pub fn date_time_utc_from_str<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date_time_utc(&s).ok_or_else(|| Error::custom(format!("invalid timestamp '{s}'")))
}

pub fn opt_float_from_str<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = String::deserialize(deserializer)?;
    let v = v.trim();
    if v.is_empty() {
        Ok(None)
    } else {
        v.parse().map(Some).map_err(Error::custom)
    }
}

pub fn opt_heading_from_str<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_float_from_str(deserializer)?.filter(|v| *v < HEADING_NOT_AVAILABLE))
}

pub fn opt_speed_from_str<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_float_from_str(deserializer)?.filter(|v| *v < SPEED_NOT_AVAILABLE))
}

pub fn opt_coordinate_from_str<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = String::deserialize(deserializer)?;
    if v.trim().is_empty() {
        Ok(None)
    } else {
        parse_coordinate(&v).map(Some).map_err(Error::custom)
    }
}

fn parse_date_time_utc(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(v) = DateTime::parse_from_rfc3339(s) {
        return Some(v.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|v| v.and_utc())
}
