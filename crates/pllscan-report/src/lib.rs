//! Plain-text and JSON rendering of ranked clock configurations.

pub mod format;
pub mod table;

pub use format::{format_mhz, format_row, HEADER};
pub use table::{ClockTable, TableOutput};
