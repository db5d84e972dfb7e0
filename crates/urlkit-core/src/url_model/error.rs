//! Error type for URL parsing.

use std::collections::TryReserveError;
use thiserror::Error;

/// The only way a parse can fail: the backing buffer could not be obtained.
///
/// Malformed input is never an error; missing fields fall back to defaults.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to allocate {requested} bytes for URL buffer")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
