//! `pbp-output` — dataset writers for the rust_pbp generator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Output                                           |
//! |-----------|---------|--------------------------------------------------|
//! | *(none)*  | CSV     | one file, header plus one record per play        |
//! | `sqlite`  | SQLite  | one database with a `plays` table                |
//! | `parquet` | Parquet | one snappy-compressed file with a 17-column schema |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`PlayOutputObserver`], which implements `pbp_engine::GameObserver`.
//! [`DatasetSummary`] is a second observer that tallies the distributions
//! printed after a run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pbp_output::{CsvWriter, PlayOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("plays.csv"))?;
//! let mut obs = PlayOutputObserver::new(writer);
//! generator.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod summary;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlayOutputObserver;
pub use summary::DatasetSummary;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
