//! The virtual path value type and its algebra.
//!
//! This module provides [`VirtualPath`], a pure string-manipulation path
//! representation decomposed into an anchor (root marker), directory
//! segments, and an optional filename.
//!
//! # Key Concepts
//!
//! ## Anchors
//!
//! A path hangs off exactly one anchor: nothing (relative), the bare root
//! `/`, a drive letter `X:`, a network hostname `//host`, or the home
//! directory `~`. The anchor is a tagged union, so a hostname and a drive
//! can never coexist.
//!
//! ## Literal dot-segments
//!
//! Parsing and mutation preserve `.` and `..` segments verbatim. Only the
//! explicit resolution operations ([`VirtualPath::resolve`],
//! [`VirtualPath::absolute`]) collapse them, so structurally different
//! spellings of the same location stay distinguishable until the caller
//! asks otherwise.
//!
//! ## Styles
//!
//! Every path carries the [`crate::PathStyle`] it was constructed with:
//! the OS family (separators, drives, home anchor, case rule, reserved
//! characters) and the validation policy (strict errors vs lenient
//! sanitization).
//!
//! # Examples
//!
//! ```
//! use vpath::{Os, PathStyle, VirtualPath};
//!
//! let style = PathStyle::new(Os::Posix);
//! let mut path = VirtualPath::parse_with("//build-host/out/c/d", style).unwrap();
//! let step = VirtualPath::parse_with("../lib.a", style).unwrap();
//! path.resolve(&step).unwrap();
//! assert_eq!(path.to_string(), "//build-host/out/lib.a");
//! ```

mod anchor;
mod hostname;
mod parse;
mod resolve;
mod vpath;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use anchor::Anchor;
pub use vpath::VirtualPath;
