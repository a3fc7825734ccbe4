//! Miscellaneous utilities.

/// Number and table formatting for reports.
pub mod data_formatters;

/// Two-column sample data parsing.
pub mod data_parsers;

pub use data_formatters::{format_percent, format_real, format_sample_row};
pub use data_parsers::{parse_columns, parse_real};
