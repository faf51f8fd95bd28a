//! Error types for the vpath library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the vpath library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a vpath error.
///
/// # Examples
///
/// ```
/// use vpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/a/b/".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vpath library.
///
/// This enum encompasses all precondition violations that can occur while
/// parsing or mutating a path under the strict validation policy. Under the
/// lenient policy most of these conditions are recovered from instead of
/// reported.
#[derive(Debug, Error)]
pub enum Error {
    /// A network-location prefix (`//`) was not followed by a hostname.
    #[error("empty hostname after network prefix")]
    EmptyHostname,

    /// A hostname did not match the named-host grammar.
    #[error("invalid hostname '{hostname}': {reason}")]
    InvalidHostname {
        /// The offending hostname token.
        hostname: String,
        /// The reason the hostname is invalid.
        reason: String,
    },

    /// An IPv4 literal hostname was malformed.
    #[error("invalid IPv4 literal '{literal}': {reason}")]
    InvalidIpv4 {
        /// The offending literal.
        literal: String,
        /// The reason the literal is invalid.
        reason: String,
    },

    /// A directory segment was empty or contained a reserved character.
    #[error("invalid segment '{segment}': {reason}")]
    InvalidSegment {
        /// The offending segment.
        segment: String,
        /// The reason the segment is invalid.
        reason: String,
    },

    /// A filename was empty where required, or contained a reserved
    /// character.
    #[error("invalid filename '{filename}': {reason}")]
    InvalidFilename {
        /// The offending filename.
        filename: String,
        /// The reason the filename is invalid.
        reason: String,
    },

    /// A filename exceeded the maximum length.
    #[error("filename too long: {length} characters (limit {limit})")]
    FilenameTooLong {
        /// The actual length in characters.
        length: usize,
        /// The maximum permitted length.
        limit: usize,
    },

    /// A hostname and a drive letter were requested on the same path.
    #[error("hostname '{hostname}' conflicts with drive '{drive}:'")]
    DriveHostnameConflict {
        /// The drive letter already or newly present.
        drive: char,
        /// The hostname already or newly present.
        hostname: String,
    },

    /// An operation required an absolute path but received a relative one.
    #[error("path '{path}' is not absolute")]
    NotAbsolute {
        /// The offending path, in canonical string form.
        path: String,
    },

    /// An operation required a relative path but received an absolute one.
    #[error("path '{path}' is not relative")]
    NotRelative {
        /// The offending path, in canonical string form.
        path: String,
    },

    /// Two paths in a relative-path computation have different roots.
    #[error("paths have mismatched roots: '{base}' vs '{target}'")]
    RootMismatch {
        /// The base path's root, in canonical string form.
        base: String,
        /// The target path's root, in canonical string form.
        target: String,
    },

    /// The process working directory could not be read or was not valid
    /// UTF-8.
    #[error("cannot determine current directory: {reason}")]
    CurrentDirUnavailable {
        /// The reason the directory is unavailable.
        reason: String,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine home directory")]
    HomeDirUnavailable,

    /// A configuration value (style name, environment override) was not
    /// recognized.
    #[error("invalid configuration for '{field}': {message}")]
    Configuration {
        /// The configuration field that failed to parse.
        field: String,
        /// A description of the failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error reports a malformed hostname of either grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// let err = Error::EmptyHostname;
    /// assert!(err.is_hostname_error());
    /// ```
    #[must_use]
    pub fn is_hostname_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyHostname | Self::InvalidHostname { .. } | Self::InvalidIpv4 { .. }
        )
    }

    /// Check if the error is a validation failure on parse or mutation
    /// input, as opposed to an environment failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// let err = Error::FilenameTooLong { length: 300, limit: 255 };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            Self::CurrentDirUnavailable { .. } | Self::HomeDirUnavailable | Self::Io(_)
        )
    }
}
