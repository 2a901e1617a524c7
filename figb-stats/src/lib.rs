//! FIGB Membership Statistics
//!
//! Platform-agnostic core of the membership dashboard: the shape of the two
//! precomputed documents, the value and key formatters, the flat and pivot
//! table builders and the fetch lifecycle shared by the browser and CLI crates.
//! Nothing here touches the DOM or the filesystem.

pub mod advanced;
pub mod charts;
pub mod format;
pub mod resource;
pub mod summary;
pub mod table;

pub use advanced::{AdvancedStats, MetricMap, Section, YearlyStats};
pub use charts::{CHARTS_DIR, Chart};
pub use format::{
    NumberLocale, format_decimal, format_fixed, format_integer, format_key, format_number,
    format_value, plain_number,
};
pub use resource::{
    FetchState, LoadError, RESULTS_DIR, RawResponse, Resource, decode, load_resource,
};
pub use summary::{RETENTION_POSITIVE_THRESHOLD, SummaryStats, Trend};
pub use table::{GAP_MARKER, MetricRow, PivotRow, PivotTable, flat_rows, pivot_table};
