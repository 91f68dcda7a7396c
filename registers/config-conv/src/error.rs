// Licensed under the Apache-2.0 license

//! Error and status code types for the conversion pipeline.
//!
//! Every stage returns [`ConvError`]. The flat integer [`StatusCode`] only
//! exists for callers on the far side of the C boundary and for process exit
//! codes.

use core::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where in the input a parse error was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// 1-based line number of a line-format file.
    Line(usize),
    /// 1-based line and column inside malformed structured text.
    Position { line: usize, column: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Line(line) => write!(f, "line {line}"),
            Location::Position { line, column } => write!(f, "line {line}, column {column}"),
        }
    }
}

/// Error category, without context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    UnsupportedFileType,
    Io,
    Parse,
    Schema,
}

/// Errors that can occur while converting a register configuration.
#[derive(Error, Debug)]
pub enum ConvError {
    /// Empty or malformed array name, sensor id, path or generator setting.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File type tag that names neither supported format.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Input could not be read or output could not be written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input does not follow the grammar of its format.
    #[error("parse error at {location}: {reason}")]
    Parse { location: Location, reason: String },

    /// Structured input is well formed but an entry is semantically invalid.
    #[error("schema error{}: {reason}", entry_suffix(.index))]
    Schema {
        /// Offending entry, or `None` when the document shape itself is wrong.
        index: Option<usize>,
        reason: String,
    },
}

fn entry_suffix(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!(" in entry {index}"),
        None => String::new(),
    }
}

impl ConvError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConvError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(location: Location, reason: impl Into<String>) -> Self {
        ConvError::Parse {
            location,
            reason: reason.into(),
        }
    }

    pub(crate) fn schema(index: Option<usize>, reason: impl Into<String>) -> Self {
        ConvError::Schema {
            index,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ConvError::UnsupportedFileType(_) => ErrorKind::UnsupportedFileType,
            ConvError::Io { .. } => ErrorKind::Io,
            ConvError::Parse { .. } => ErrorKind::Parse,
            ConvError::Schema { .. } => ErrorKind::Schema,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind().into()
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvError>;

/// Integer status returned across the C boundary.
///
/// The values are part of the public ABI and never change:
///
/// | Status                | Value |
/// |-----------------------|-------|
/// | `Success`             | 0     |
/// | `InvalidArgument`     | -1    |
/// | `UnsupportedFileType` | -2    |
/// | `IoError`             | -3    |
/// | `ParseError`          | -4    |
/// | `SchemaError`         | -5    |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum StatusCode {
    Success = 0,
    InvalidArgument = -1,
    UnsupportedFileType = -2,
    IoError = -3,
    ParseError = -4,
    SchemaError = -5,
}

impl StatusCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorKind> for StatusCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidArgument => StatusCode::InvalidArgument,
            ErrorKind::UnsupportedFileType => StatusCode::UnsupportedFileType,
            ErrorKind::Io => StatusCode::IoError,
            ErrorKind::Parse => StatusCode::ParseError,
            ErrorKind::Schema => StatusCode::SchemaError,
        }
    }
}

impl<T> From<&Result<T>> for StatusCode {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => StatusCode::Success,
            Err(err) => err.status(),
        }
    }
}
