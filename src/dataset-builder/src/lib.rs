#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a batch binary that joins AIS extracts with World Port Index data and writes the
//! resulting voyage dataset as csv files.

pub mod csv_adapter;
pub mod error;
pub mod settings;
pub mod startup;
