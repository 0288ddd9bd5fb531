use snafu::{Location, Snafu};
use voyage_core::BoxedError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to load settings"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        source: config::ConfigError,
    },
    #[snafu(display("Failed to initialize tracing"))]
    Tracing {
        #[snafu(implicit)]
        location: Location,
        source: BoxedError,
    },
    #[snafu(display("Duration setting is out of range"))]
    InvalidDuration {
        #[snafu(implicit)]
        location: Location,
        source: chrono::OutOfRangeError,
    },
    #[snafu(display("Failed to read input data"))]
    Source {
        #[snafu(implicit)]
        location: Location,
        source: marine_sources_rs::Error,
    },
    #[snafu(display("Failed to assemble voyages"))]
    Assembly {
        #[snafu(implicit)]
        location: Location,
        source: voyage_assembler::Error,
    },
    #[snafu(display("Failed to store the dataset"))]
    Dataset {
        #[snafu(implicit)]
        location: Location,
        source: voyage_core::Error,
    },
    #[snafu(display("IO error"))]
    Io {
        #[snafu(implicit)]
        location: Location,
        source: std::io::Error,
    },
    #[snafu(display("CSV error"))]
    Csv {
        #[snafu(implicit)]
        location: Location,
        source: csv::Error,
    },
}

impl Error {
    /// Wraps the error as a failure to insert `dataset` through the storage port.
    #[track_caller]
    pub fn into_insert(self, dataset: &'static str) -> voyage_core::Error {
        let location = std::panic::Location::caller();
        voyage_core::Error::Insert {
            location: Location::new(location.file(), location.line(), location.column()),
            dataset,
            source: Box::new(self),
        }
    }
}
