//! Error types for the library layer.

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding table serialization failures.
#[derive(thiserror::Error, Debug)]
pub enum ActivityError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] sendgrid_activity_api::Error),
    /// A table row's cell count differs from the header width, which would
    /// shift every subsequent line of a serialized CSV.
    #[error("row {row} has {actual} cells, expected {expected}")]
    CellCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
