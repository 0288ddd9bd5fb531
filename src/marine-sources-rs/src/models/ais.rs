use crate::deserialize_utils::*;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// A single position report from a MarineCadastre AIS extract.
///
/// Both the upper-case (`MMSI,BaseDateTime,LAT,LON,...`) and the lower-case
/// (`mmsi,base_date_time,latitude,longitude,...`) column layouts are accepted.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct AisRecord {
    #[serde(rename = "CallSign", alias = "call_sign", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub call_sign: Option<String>,
    #[serde(rename = "COG", alias = "cog", default)]
    #[serde(deserialize_with = "opt_float_from_str")]
    pub course_over_ground: Option<f64>,
    #[serde(rename = "Heading", alias = "heading", default)]
    #[serde(deserialize_with = "opt_heading_from_str")]
    pub heading: Option<f64>,
    #[serde(rename = "LAT", alias = "latitude", alias = "lat")]
    #[serde(deserialize_with = "opt_float_from_str")]
    pub latitude: Option<f64>,
    #[serde(rename = "LON", alias = "longitude", alias = "lon")]
    #[serde(deserialize_with = "opt_float_from_str")]
    pub longitude: Option<f64>,
    #[serde(rename = "MMSI", alias = "mmsi")]
    pub mmsi: i32,
    #[serde(rename = "SOG", alias = "sog", default)]
    #[serde(deserialize_with = "opt_speed_from_str")]
    pub speed_over_ground: Option<f64>,
    #[serde(rename = "BaseDateTime", alias = "base_date_time")]
    #[serde(deserialize_with = "date_time_utc_from_str")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "VesselName", alias = "vessel_name", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub vessel_name: Option<String>,
}

impl AisRecord {
    pub fn test_default(
        mmsi: i32,
        timestamp: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        speed_over_ground: f64,
    ) -> AisRecord {
        AisRecord {
            call_sign: Some("WDC1234".to_string()),
            course_over_ground: Some(180.0),
            heading: Some(181.0),
            latitude: Some(latitude),
            longitude: Some(longitude),
            mmsi,
            speed_over_ground: Some(speed_over_ground),
            timestamp,
            vessel_name: Some("EVER GIVEN".to_string()),
        }
    }
}
