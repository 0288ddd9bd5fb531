use snafu::{Location, Snafu};
use std::{num::ParseFloatError, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum CoordinateError {
    #[snafu(display("Coordinate string was unexpectedly empty"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Coordinate '{value}' did not contain between one and three DMS parts"))]
    Format {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
    #[snafu(display("Coordinate '{value}' did not end with a hemisphere (N, S, E or W)"))]
    Hemisphere {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
    #[snafu(display("Failed to parse part of coordinate '{value}'"))]
    Parse {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: ParseFloatError,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("IO error"))]
    Io {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("CSV error"))]
    Csv {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: csv::Error,
    },
    #[snafu(display("Received incomplete csv data"))]
    IncompleteData {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: csv::DeserializeError,
    },
    #[snafu(display("Zip error"))]
    Zip {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: zip::result::ZipError,
    },
    #[snafu(display("Archive '{}' did not contain a csv file", path.display()))]
    MissingCsvEntry {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
    },
}

impl Error {
    /// Whether the error concerns a single row that could not be deserialized, as opposed to a
    /// failure of the underlying reader.
    pub fn is_malformed_row(&self) -> bool {
        match self {
            Error::IncompleteData { .. } => true,
            Error::Csv { error, .. } => matches!(
                error.kind(),
                csv::ErrorKind::Deserialize { .. }
                    | csv::ErrorKind::UnequalLengths { .. }
                    | csv::ErrorKind::Utf8 { .. }
            ),
            Error::Io { .. } | Error::Zip { .. } | Error::MissingCsvEntry { .. } => false,
        }
    }
}

impl From<csv::Error> for Error {
    #[track_caller]
    fn from(e: csv::Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());
        match e.kind() {
            csv::ErrorKind::Deserialize { pos: _, err } => match err.kind() {
                csv::DeserializeErrorKind::UnexpectedEndOfRow => Error::IncompleteData {
                    error: err.clone(),
                    location,
                },
                _ => Error::Csv { location, error: e },
            },
            _ => Error::Csv { location, error: e },
        }
    }
}
