//! Error types for pagination transitions and text input.
//!
//! Every fallible operation in this crate returns [`Result`]. A failed
//! operation never mutates the pagination state, so callers can surface the
//! error inline and keep going.

use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error returned by pagination operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input text is not a whole number.
    #[error("{input:?} is not a whole number")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The value parsed but is outside the accepted range.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Out-of-range page or page size.
///
/// Values are carried as `i64` so that negative text input can be reported
/// with the number the user actually typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The requested page is smaller than the first page.
    #[error("page should not be smaller than 1 (got {page})")]
    PageBelowFirst {
        /// The rejected page.
        page: i64,
    },
    /// The requested page is past the last page.
    #[error("page should not be bigger than total pages {total_pages} (got {page})")]
    PageBeyondLast {
        /// The rejected page.
        page: i64,
        /// Total pages at the time of the request.
        total_pages: usize,
    },
    /// The requested page size is smaller than one row.
    #[error("page size should be at least 1 (got {size})")]
    PageSizeTooSmall {
        /// The rejected page size.
        size: i64,
    },
    /// The text is a whole number too large (in either direction) to use.
    #[error("number is out of range")]
    OutOfRange,
}

impl Error {
    /// Returns true for non-integer input.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns the range failure, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(v) => Some(v),
            Error::Parse { .. } => None,
        }
    }
}

/// Parses trimmed text as a signed whole number.
///
/// Numbers that overflow `i64` are reported as [`ValidationError::OutOfRange`]
/// rather than as a parse failure.
pub(crate) fn parse_integer(input: &str) -> Result<i64> {
    input.trim().parse::<i64>().map_err(|source| {
        let kind = source.kind().clone();
        match kind {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Error::Validation(ValidationError::OutOfRange)
            }
            _ => Error::Parse {
                input: input.to_string(),
                source,
            },
        }
    })
}
