//! Error types for the charts crate

use thiserror::Error;

/// Errors that can occur when working with chart items.
///
/// Geometry and painting never fail; errors are reserved for structural
/// misuse of the element-collection protocol.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Unknown collection name in the element protocol
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// Element index out of range
    #[error("element {index} out of range for collection {collection}")]
    ElementOutOfRange {
        /// Collection that was indexed
        collection: String,
        /// Requested index
        index: usize,
    },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
