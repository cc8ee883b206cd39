use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Component interaction values carry snowflake ids as strings; a value
    /// that does not parse means the form was built with a malformed option.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The shared selection store is missing from the client TypeMap.
    ///
    /// The store is inserted at client build time, so hitting this means the
    /// client was constructed without it.
    #[error("Selection store is not installed in the client data map")]
    MissingSelectionStore,
}
