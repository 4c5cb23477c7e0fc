//! Error types for the seekr crate.

use thiserror::Error;

use crate::data_type::DataType;

/// Errors raised when an engine is constructed over unsearchable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The data is `undefined`.
    #[error("received data type: undefined; undefined values are not searchable")]
    UndefinedData,

    /// The data's runtime type is not a recognized category.
    #[error("received data type: {0}; the value's runtime type is not a recognized category")]
    UnknownType(String),
}

/// Errors raised by a search against data with no search strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The engine wraps `null`.
    #[error("received data type: null; null is not searchable")]
    NullData,

    /// The engine wraps `undefined`.
    #[error("received data type: undefined; undefined is not searchable")]
    UndefinedData,

    /// No search strategy exists for this data type.
    #[error("unsupported data type: {0}")]
    UnsupportedType(DataType),
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekerError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Result type for seekr operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
