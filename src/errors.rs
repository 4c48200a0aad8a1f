//! Errors
//!
//! Custom error types used throughout the `gini-cart` crate.
use thiserror::Error;

/// Errors that can occur while building or querying a tree.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// No rows were provided.
    #[error("Unable to operate on an empty set of rows.")]
    EmptyDataset,
    /// A row has no values, so it has no label position.
    #[error("Row {0} has no values, at least a label is required.")]
    EmptyRow(usize),
    /// Row number, expected arity, found arity.
    #[error("Row {0} has {2} values, but {1} were expected.")]
    RaggedRow(usize, usize, usize),
    /// Number of feature columns, length of the row being classified.
    #[error("Row has {1} values, but {0} features were expected, optionally followed by the label.")]
    RowLength(usize, usize),
    /// Column requested, number of feature columns.
    #[error("Column {0} is not a feature column, expected an index below {1}.")]
    UnknownColumn(usize, usize),
    /// Expected number of names, number of names provided.
    #[error("Feature names should have {0} entries, but {1} were provided.")]
    HeaderMismatch(usize, usize),
    /// Unable to parse rows or a configuration.
    #[error("Unable to read {0}")]
    UnableToRead(String),
    /// Unable to serialize a configuration.
    #[error("Unable to write {0}")]
    UnableToWrite(String),
    /// Prediction was requested before fitting.
    #[error("The classifier has not been fitted yet.")]
    NotFitted,
}
