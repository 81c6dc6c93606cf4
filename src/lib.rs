pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod plot;
pub mod render;
pub mod report;
pub mod summary;

pub use aggregate::AggregateTable;
pub use error::{Error, Result, RowError};
pub use report::{parse_row, MeasurementRecord, ParsedRow, SkipReason};
