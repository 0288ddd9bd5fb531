#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod domain;
#[allow(hidden_glob_reexports)]
mod error;
mod ports;

#[cfg(any(test, feature = "test"))]
pub mod test_helper;

pub use domain::*;
pub use error::*;
pub use ports::*;
