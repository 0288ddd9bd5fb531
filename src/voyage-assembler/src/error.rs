use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to read source data"))]
    Source {
        #[snafu(implicit)]
        location: Location,
        source: marine_sources_rs::Error,
    },
    #[snafu(display("Invalid date range"))]
    InvalidDateRange {
        #[snafu(implicit)]
        location: Location,
        source: voyage_core::DateRangeError,
    },
}
