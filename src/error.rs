//! Error types and result type for the glosario crate.
//!
//! This module defines all error variants that can occur when fetching and
//! loading glossary resources. It uses the `snafu` library for ergonomic error
//! handling with automatic backtrace capture.
//!
//! Note that the parser itself never fails: once a document string is in hand,
//! malformed input degrades gracefully (see [`crate::parser`]). Errors here
//! belong to the boundaries around the parser: fetching documents, loading
//! localized content, and building collators.
//!
//! # Examples
//!
//! ```
//! use glosario::{Result, GlossaryError};
//!
//! fn read_document() -> Result<String> {
//!     Err(GlossaryError::invalid_parameter("Invalid document path"))
//! }
//!
//! fn handle_error() {
//!     match read_document() {
//!         Ok(data) => println!("Success: {}", data),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the glosario crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `GlossaryError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum GlossaryError {
    /// I/O error occurred during file operations.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// The glossary document could not be fetched from its source.
    ///
    /// The parser is never invoked when the fetch fails; callers present an
    /// empty or error view state themselves.
    #[snafu(display("Fetch error for {url}: {message}"))]
    Fetch {
        url: String,
        message: String,
        backtrace: Backtrace,
    },

    /// Resource data is malformed or doesn't match the expected format.
    #[snafu(display("Invalid data format: {message}"))]
    InvalidDataFormat {
        message: String,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// Localized content failed schema validation when deserialized.
    #[snafu(display("Schema error: {source}"))]
    Schema {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// ICU collator construction or locale parsing failed.
    #[snafu(display("Collator error: {message}"))]
    Collator {
        message: String,
        backtrace: Backtrace,
    },
}

// For automatic conversions from standard error types
impl From<io::Error> for GlossaryError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for GlossaryError {
    fn from(source: serde_json::Error) -> Self {
        Self::Schema { source, backtrace: Backtrace::capture() }
    }
}

impl From<std::string::FromUtf8Error> for GlossaryError {
    fn from(source: std::string::FromUtf8Error) -> Self {
        Self::InvalidDataFormat { message: format!("Invalid UTF-8 (String): {}", source), backtrace: Backtrace::capture() }
    }
}

impl From<std::str::Utf8Error> for GlossaryError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self::InvalidDataFormat { message: format!("Invalid UTF-8 (&str): {}", source), backtrace: Backtrace::capture() }
    }
}

impl From<url::ParseError> for GlossaryError {
    fn from(source: url::ParseError) -> Self {
        Self::InvalidParameter { message: format!("Invalid URL: {}", source), backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl GlossaryError {
    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use glosario::GlossaryError;
    ///
    /// let error = GlossaryError::invalid_parameter("Path cannot be empty");
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidDataFormat` error with the given message.
    pub fn invalid_data_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidDataFormat {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `Fetch` error for the given source URL.
    pub fn fetch_error<U: Into<String>, S: Into<String>>(url: U, message: S) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `Collator` error with the given message.
    pub fn collator_error<S: Into<String>>(message: S) -> Self {
        Self::Collator {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `Fetch` variant.
    pub fn is_fetch_error(&self) -> bool {
        if let GlossaryError::Fetch { .. } = self {
            return true;
        }
        false
    }
}

/// A specialized `Result` type for glosario operations.
///
/// This is a convenience type alias that uses [`GlossaryError`] as the error type.
pub type Result<T> = std::result::Result<T, GlossaryError>;
