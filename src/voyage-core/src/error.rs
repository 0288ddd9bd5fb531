use chrono::{DateTime, Utc};
use snafu::{Location, Snafu};

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;
pub type CoreResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to insert '{dataset}' into the dataset"))]
    Insert {
        #[snafu(implicit)]
        location: Location,
        dataset: &'static str,
        source: BoxedError,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum DateRangeError {
    #[snafu(display("Start of date range '{start}' is after its end '{end}'"))]
    Ordering {
        #[snafu(implicit)]
        location: Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum CoordinateValidationError {
    #[snafu(display("Record is missing its latitude or longitude"))]
    Missing {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Coordinates ({latitude}, {longitude}) are out of range"))]
    OutOfRange {
        #[snafu(implicit)]
        location: Location,
        latitude: f64,
        longitude: f64,
    },
}
