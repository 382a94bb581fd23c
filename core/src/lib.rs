//! Per-symbol volume shares and price bounds over whitespace-separated tick files.

mod aggregate;
mod error;
mod load;
mod report;
mod types;

pub use aggregate::Aggregator;
pub use error::{LoadError, ReportError};
pub use load::{load_file, load_reader, parse_line};
pub use report::{SECTION_DELIMITER, format_number, write_report};
pub use types::{Bounds, LoadOptions, MalformedPolicy, Record};
