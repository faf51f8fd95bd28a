//! The `VirtualPath` value type.
//!
//! A `VirtualPath` is a plain value: parsed once from a string, mutated in
//! place through the documented setters, copied and compared by value. It
//! never touches the filesystem; the resolution operations that consult the
//! process working directory live in the sibling resolution module.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::anchor::Anchor;
use crate::path::{hostname, parse};
use crate::style::PathStyle;

/// A filesystem-style location decomposed into an anchor, directory
/// segments, and an optional filename.
///
/// Dot-segments (`.`, `..`) are stored verbatim by parsing and mutation;
/// they are only collapsed by the explicit resolution operations.
///
/// # Examples
///
/// ```
/// use vpath::{Os, PathStyle, VirtualPath};
///
/// let style = PathStyle::new(Os::Posix);
/// let path = VirtualPath::parse_with("//server/share/report.txt", style).unwrap();
/// assert_eq!(path.hostname(), Some("server"));
/// assert_eq!(path.directory(), "/share/");
/// assert_eq!(path.filename(), Some("report.txt"));
/// assert_eq!(path.to_string(), "//server/share/report.txt");
/// ```
#[derive(Debug, Clone)]
pub struct VirtualPath {
    pub(crate) anchor: Anchor,
    pub(crate) segments: Vec<String>,
    pub(crate) filename: Option<String>,
    pub(crate) style: PathStyle,
}

impl VirtualPath {
    pub(crate) fn from_parts(
        anchor: Anchor,
        segments: Vec<String>,
        filename: Option<String>,
        style: PathStyle,
    ) -> Self {
        Self {
            anchor,
            segments,
            filename,
            style,
        }
    }

    /// Parse a path string under the native style (host OS, strict
    /// validation).
    ///
    /// # Errors
    ///
    /// Returns an error when the input violates the grammar under strict
    /// validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::VirtualPath;
    ///
    /// let path = VirtualPath::parse("docs/guide.md").unwrap();
    /// assert_eq!(path.filename(), Some("guide.md"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        parse::parse(input, PathStyle::native())
    }

    /// Parse a path string under an explicit style.
    ///
    /// # Errors
    ///
    /// Returns an error when the input violates the grammar under strict
    /// validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Windows);
    /// let path = VirtualPath::parse_with(r"C:\tools\cargo.exe", style).unwrap();
    /// assert_eq!(path.drive(), Some('C'));
    /// assert_eq!(path.to_string(), "C:/tools/cargo.exe");
    /// ```
    pub fn parse_with(input: &str, style: PathStyle) -> Result<Self> {
        parse::parse(input, style)
    }

    /// The style this path was constructed with.
    #[must_use]
    pub const fn style(&self) -> PathStyle {
        self.style
    }

    /// The directory portion in canonical form: the root prefix followed by
    /// each segment and a separator.
    ///
    /// The hostname is not part of the directory; a hostname path's
    /// directory starts at the bare `/`. An empty directory renders as the
    /// `./` default.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// assert_eq!(VirtualPath::parse_with("", style).unwrap().directory(), "./");
    /// assert_eq!(
    ///     VirtualPath::parse_with("//host/a/b.c", style).unwrap().directory(),
    ///     "/a/"
    /// );
    /// ```
    #[must_use]
    pub fn directory(&self) -> String {
        let mut out = self.anchor.directory_prefix();
        for segment in &self.segments {
            out.push_str(segment);
            out.push('/');
        }
        if out.is_empty() {
            out.push_str("./");
        }
        out
    }

    /// The complete filename, if any.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The filename without its extension.
    ///
    /// The split point is the LAST `.` in the filename: `archive.tar.gz`
    /// has stem `archive.tar`, and a filename that is only `.ext` has an
    /// empty stem.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let path = VirtualPath::parse_with("/a/archive.tar.gz", style).unwrap();
    /// assert_eq!(path.file_stem(), Some("archive.tar"));
    /// ```
    #[must_use]
    pub fn file_stem(&self) -> Option<&str> {
        self.filename.as_deref().map(|f| split_filename(f).0)
    }

    /// The filename's extension, without the dot.
    ///
    /// A filename ending in `.` has an empty extension; a filename with no
    /// dot has none at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let path = VirtualPath::parse_with("/a/name.", style).unwrap();
    /// assert_eq!(path.extension(), Some(""));
    /// let path = VirtualPath::parse_with("/a/name", style).unwrap();
    /// assert_eq!(path.extension(), None);
    /// ```
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.filename.as_deref().and_then(|f| split_filename(f).1)
    }

    /// The network hostname, if any.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.anchor.hostname()
    }

    /// The drive letter, if any.
    #[must_use]
    pub fn drive(&self) -> Option<char> {
        self.anchor.drive()
    }

    /// The root portion: everything up through the first directory segment
    /// after a hostname, the drive, or the bare separator.
    ///
    /// A hostname root includes the first segment (share semantics);
    /// relative paths have no root.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let path = VirtualPath::parse_with("//host/share/x/", style).unwrap();
    /// assert_eq!(path.root(), Some("//host/share/".to_string()));
    /// let path = VirtualPath::parse_with("/a/b/", style).unwrap();
    /// assert_eq!(path.root(), Some("/".to_string()));
    /// assert_eq!(VirtualPath::parse_with("a/b/", style).unwrap().root(), None);
    /// ```
    #[must_use]
    pub fn root(&self) -> Option<String> {
        match &self.anchor {
            Anchor::Relative => None,
            Anchor::Host(host) => {
                let mut out = format!("//{host}/");
                if let Some(first) = self.segments.first() {
                    out.push_str(first);
                    out.push('/');
                }
                Some(out)
            }
            anchor => Some(anchor.directory_prefix()),
        }
    }

    /// The final named segment of the directory, excluding root markers.
    ///
    /// `None` when the directory is a bare root, hostname-only, or a lone
    /// leading dot-segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let path = VirtualPath::parse_with("/a/b/file.txt", style).unwrap();
    /// assert_eq!(path.last_directory(), Some("b"));
    /// assert_eq!(VirtualPath::parse_with("/", style).unwrap().last_directory(), None);
    /// assert_eq!(VirtualPath::parse_with("./", style).unwrap().last_directory(), None);
    /// ```
    #[must_use]
    pub fn last_directory(&self) -> Option<&str> {
        let last = self.segments.last()?;
        let lone_dot = matches!(self.anchor, Anchor::Relative)
            && self.segments.len() == 1
            && (last == "." || last == "..");
        if lone_dot {
            None
        } else {
            Some(last)
        }
    }

    /// Whether the path is anchored at a recognized root token.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.anchor.is_absolute()
    }

    /// Whether the path carries a filename.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.filename.is_some()
    }

    /// Whether the path is purely a directory (no filename).
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.filename.is_none()
    }

    /// Whether the path is anchored at a drive letter.
    #[must_use]
    pub fn has_drive(&self) -> bool {
        matches!(self.anchor, Anchor::Drive(_))
    }

    /// Whether the path is anchored at a network hostname.
    #[must_use]
    pub fn has_hostname(&self) -> bool {
        matches!(self.anchor, Anchor::Host(_))
    }

    /// Whether the path has any root marker.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.anchor.is_absolute()
    }

    /// Append one segment to the end of the directory.
    ///
    /// The name must be non-empty and must not contain a separator or a
    /// reserved character. Dot-segments are valid inputs and are appended
    /// verbatim, not resolved.
    ///
    /// # Errors
    ///
    /// Under strict validation, returns an error for an empty name or a
    /// name containing reserved characters. Under lenient validation the
    /// empty case is a no-op and reserved characters are stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("/a/", style).unwrap();
    /// path.append_directory("b").unwrap();
    /// path.append_directory("..").unwrap();
    /// assert_eq!(path.directory(), "/a/b/../");
    /// assert!(path.append_directory("x/y").is_err());
    /// ```
    pub fn append_directory(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            if self.style.is_strict() {
                return Err(Error::InvalidSegment {
                    segment: String::new(),
                    reason: "segment name must be non-empty".to_string(),
                });
            }
            log::warn!("ignoring append of empty directory name");
            return Ok(());
        }

        if let Some(segment) = parse::check_segment(name, self.style)? {
            self.segments.push(segment);
        }
        Ok(())
    }

    /// Remove the last segment from the directory.
    ///
    /// A no-op when the directory is already irreducible: a bare root of
    /// any kind, `./`, `../`, or a single relative segment with nothing
    /// before it. The filename and the hostname/drive are never touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("/path1/path2/", style).unwrap();
    /// path.remove_last_directory();
    /// assert_eq!(path.directory(), "/path1/");
    /// path.remove_last_directory();
    /// path.remove_last_directory();
    /// assert_eq!(path.directory(), "/");
    /// ```
    pub fn remove_last_directory(&mut self) {
        if self.segments.is_empty() {
            return;
        }
        if matches!(self.anchor, Anchor::Relative) && self.segments.len() == 1 {
            return;
        }
        self.segments.pop();
    }

    /// Replace the entire directory portion.
    ///
    /// A trailing separator is appended to the input if missing, and the
    /// result is parsed with the same validation as construction. Empty
    /// input resets the directory to `./` (no hostname) or `/` (hostname
    /// present). The filename is never touched.
    ///
    /// # Errors
    ///
    /// Returns an error when the input violates the grammar under strict
    /// validation, or names a drive while a hostname is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("//host/a/f.txt", style).unwrap();
    /// path.set_directory("/x/y").unwrap();
    /// assert_eq!(path.directory(), "/x/y/");
    /// assert_eq!(path.hostname(), Some("host"));
    /// assert_eq!(path.filename(), Some("f.txt"));
    ///
    /// path.set_directory("").unwrap();
    /// assert_eq!(path.directory(), "/");
    /// ```
    pub fn set_directory(&mut self, directory: &str) -> Result<()> {
        if directory.is_empty() {
            self.segments.clear();
            if !matches!(self.anchor, Anchor::Host(_)) {
                self.anchor = Anchor::Relative;
            }
            return Ok(());
        }

        let mut owned = directory.to_string();
        if let Some(last) = owned.chars().last() {
            if !self.style.os().is_separator(last) {
                owned.push('/');
            }
        }
        let parsed = parse::parse(&owned, self.style)?;

        match parsed.anchor {
            Anchor::Host(host) => {
                self.anchor = Anchor::Host(host);
            }
            Anchor::Drive(drive) => {
                if let Anchor::Host(host) = &self.anchor {
                    if self.style.is_strict() {
                        return Err(Error::DriveHostnameConflict {
                            drive,
                            hostname: host.clone(),
                        });
                    }
                    log::warn!("keeping hostname '{host}' and dropping drive '{drive}:'");
                } else {
                    self.anchor = Anchor::Drive(drive);
                }
            }
            anchor => {
                if !matches!(self.anchor, Anchor::Host(_)) {
                    self.anchor = anchor;
                }
            }
        }
        self.segments = parsed.segments;
        Ok(())
    }

    /// Replace the filename's name part, preserving the extension.
    ///
    /// Empty input clears the filename entirely.
    ///
    /// # Errors
    ///
    /// Returns an error when the recombined filename violates validation
    /// under the strict policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("/a/report.txt", style).unwrap();
    /// path.set_filename("summary").unwrap();
    /// assert_eq!(path.filename(), Some("summary.txt"));
    ///
    /// path.set_filename("").unwrap();
    /// assert_eq!(path.filename(), None);
    /// ```
    pub fn set_filename(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            self.filename = None;
            return Ok(());
        }

        let recombined = match self.filename.as_deref().and_then(|f| f.rfind('.')) {
            Some(dot) => {
                let old = self.filename.as_deref().unwrap_or_default();
                format!("{name}{}", &old[dot..])
            }
            None => name.to_string(),
        };

        self.filename = parse::check_filename(&recombined, self.style)?;
        Ok(())
    }

    /// Replace the filename and extension together.
    ///
    /// The extension split happens lazily at the last dot; empty input
    /// clears the filename entirely.
    ///
    /// # Errors
    ///
    /// Returns an error when the filename violates validation under the
    /// strict policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("/a/old.txt", style).unwrap();
    /// path.set_filename_and_extension("new.md").unwrap();
    /// assert_eq!(path.file_stem(), Some("new"));
    /// assert_eq!(path.extension(), Some("md"));
    /// ```
    pub fn set_filename_and_extension(&mut self, filename: &str) -> Result<()> {
        if filename.is_empty() {
            self.filename = None;
            return Ok(());
        }

        self.filename = parse::check_filename(filename, self.style)?;
        Ok(())
    }

    /// Set or clear the network hostname.
    ///
    /// The hostname follows the same grammar as parsing. Empty input clears
    /// the hostname, leaving the path anchored at the bare root. Setting a
    /// hostname while a drive is present is the mutual-exclusion violation.
    ///
    /// # Errors
    ///
    /// Under strict validation, returns an error for a malformed hostname
    /// or a hostname/drive conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("/a/b/", style).unwrap();
    /// path.set_hostname("server").unwrap();
    /// assert_eq!(path.to_string(), "//server/a/b/");
    ///
    /// path.set_hostname("").unwrap();
    /// assert_eq!(path.to_string(), "/a/b/");
    /// ```
    pub fn set_hostname(&mut self, host: &str) -> Result<()> {
        if host.is_empty() {
            if matches!(self.anchor, Anchor::Host(_)) {
                self.anchor = Anchor::Root;
            }
            return Ok(());
        }

        if let Anchor::Drive(drive) = self.anchor {
            if self.style.is_strict() {
                return Err(Error::DriveHostnameConflict {
                    drive,
                    hostname: host.to_string(),
                });
            }
            log::warn!("ignoring hostname '{host}' on drive-anchored path");
            return Ok(());
        }

        if let Some(valid) = hostname::check_hostname(host, self.style)? {
            self.anchor = Anchor::Host(valid);
        } else {
            log::warn!("ignoring unsalvageable hostname '{host}'");
        }
        Ok(())
    }
}

/// Split a filename at the last dot into stem and extension.
fn split_filename(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], Some(&name[dot + 1..])),
        None => (name, None),
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = self.anchor.serial_prefix();
        if out.is_empty() && self.segments.is_empty() {
            out.push_str("./");
        }
        for segment in &self.segments {
            out.push_str(segment);
            out.push('/');
        }
        if let Some(filename) = &self.filename {
            out.push_str(filename);
        }
        f.write_str(&out)
    }
}

impl FromStr for VirtualPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for VirtualPath {
    fn eq(&self, other: &Self) -> bool {
        let os = self.style.os();

        let hosts_equal = match (self.hostname(), other.hostname()) {
            (None, None) => true,
            (Some(a), Some(b)) => os.names_equal(a, b),
            _ => false,
        };
        let filenames_equal = match (&self.filename, &other.filename) {
            (None, None) => true,
            (Some(a), Some(b)) => os.names_equal(a, b),
            _ => false,
        };

        hosts_equal && filenames_equal && os.names_equal(&self.directory(), &other.directory())
    }
}

impl Eq for VirtualPath {}

impl Hash for VirtualPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let fold = |s: &str| -> String {
            if self.style.os().case_sensitive() {
                s.to_string()
            } else {
                s.chars().flat_map(char::to_lowercase).collect()
            }
        };

        self.hostname().map(fold).hash(state);
        fold(&self.directory()).hash(state);
        self.filename.as_deref().map(fold).hash(state);
    }
}

impl Serialize for VirtualPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for VirtualPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
