#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpath
//!
//! A virtual filesystem path value type with multi-OS parsing,
//! normalization and relative-path algebra.
//!
//! Paths are pure in-memory values: parsing, mutation and comparison never
//! touch the filesystem. Dot-segments are preserved literally until an
//! explicit resolution operation collapses them.
//!
//! ## Core Types
//!
//! - [`VirtualPath`]: the path value type
//! - [`PathStyle`], [`Os`], [`Validation`]: construction-time configuration
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use vpath::{Os, PathStyle, VirtualPath};
//!
//! let style = PathStyle::new(Os::Posix);
//! let path = VirtualPath::parse_with("//host/path1/filename.ext", style).unwrap();
//! assert_eq!(path.hostname(), Some("host"));
//! assert_eq!(path.directory(), "/path1/");
//! assert_eq!(path.filename(), Some("filename.ext"));
//! ```

pub mod error;
pub mod path;
pub mod style;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use path::{Anchor, VirtualPath};
pub use style::{Os, PathStyle, Validation, MAX_FILENAME_LEN};
