//! # wavelib-io
//!
//! Read signals from CSV files and write them back out. Bridges delimited
//! text files into wavelib's `Signal` values: one row per signal, with an
//! optional name column and configurable separator.

mod error;
mod read;
mod write;

pub use error::IoError;
pub use read::{ReadConfig, read_csv};
pub use write::{WriteConfig, write_csv};
