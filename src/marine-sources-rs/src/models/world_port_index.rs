use crate::deserialize_utils::*;
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// A port entry from a World Port Index extract.
///
/// Coordinates may be given in decimal degrees or as DMS strings (`46°59'00"N`).
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct WorldPortIndexRecord {
    #[serde(rename = "Country Code", alias = "countryCode", alias = "COUNTRY", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub country: Option<String>,
    #[serde(rename = "Latitude", alias = "latitude", alias = "LATITUDE")]
    #[serde(deserialize_with = "opt_coordinate_from_str")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", alias = "longitude", alias = "LONGITUDE")]
    #[serde(deserialize_with = "opt_coordinate_from_str")]
    pub longitude: Option<f64>,
    #[serde(rename = "Main Port Name", alias = "portName", alias = "PORT_NAME")]
    pub name: String,
    #[serde(
        rename = "World Port Index Number",
        alias = "portNumber",
        alias = "INDEX_NO"
    )]
    pub port_number: u32,
}

impl WorldPortIndexRecord {
    pub fn test_default(port_number: u32, name: &str, latitude: f64, longitude: f64) -> Self {
        WorldPortIndexRecord {
            country: Some("US".to_string()),
            latitude: Some(latitude),
            longitude: Some(longitude),
            name: name.to_string(),
            port_number,
        }
    }
}
