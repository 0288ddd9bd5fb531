use crate::{
    CoordinateValidationError,
    coordinate_validation_error::{MissingSnafu, OutOfRangeSnafu},
};
use geoutils::Location;

pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Great-circle distance in meters between two coordinates given in decimal degrees.
pub fn haversine_meters(
    latitude: f64,
    longitude: f64,
    other_latitude: f64,
    other_longitude: f64,
) -> f64 {
    Location::new(latitude, longitude)
        .haversine_distance_to(&Location::new(other_latitude, other_longitude))
        .meters()
}

pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// Returns the coordinate pair if both values are present and within range.
pub fn validate_coordinate(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(f64, f64), CoordinateValidationError> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) if is_valid_coordinate(latitude, longitude) => {
            Ok((latitude, longitude))
        }
        (Some(latitude), Some(longitude)) => OutOfRangeSnafu {
            latitude,
            longitude,
        }
        .fail(),
        _ => MissingSnafu.fail(),
    }
}
