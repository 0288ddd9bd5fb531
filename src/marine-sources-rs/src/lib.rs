#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a library for reading vessel tracking extracts from MarineCadastre and port
//! reference extracts from the World Port Index.

mod coordinates;
mod data_file;
mod deserialize_utils;
mod error;
mod models;

pub use coordinates::{dms_to_decimal, parse_coordinate};
pub use data_file::*;
pub use error::{CoordinateError, Error, Result};
pub use models::*;
