//! Resolution algebra over absolute and relative paths.
//!
//! These are the only operations that collapse dot-segments, and the only
//! ones that consult the process environment: the current working directory
//! for the relative/absolute conversions, and the home directory for the
//! explicit home expansion.

use crate::error::{Error, Result};
use crate::path::anchor::Anchor;
use crate::path::parse;
use crate::path::vpath::VirtualPath;
use crate::style::PathStyle;

impl VirtualPath {
    /// Apply a relative path on top of this absolute path, in place.
    ///
    /// Leading `.` segments of the relative path are dropped; each leading
    /// `..` removes one directory level, stopping silently at the root.
    /// The remaining segments are appended, and the relative path's
    /// filename (which may literally be `.` or `..`) replaces the resident
    /// one when present. The root marker always survives.
    ///
    /// # Errors
    ///
    /// Under strict validation, returns an error when this path is not
    /// absolute or the argument is not relative. Under lenient validation
    /// those violations make the call a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("//a/b/c/d", style).unwrap();
    /// let step = VirtualPath::parse_with("../g", style).unwrap();
    /// path.resolve(&step).unwrap();
    /// assert_eq!(path.to_string(), "//a/b/g");
    /// ```
    pub fn resolve(&mut self, relative: &VirtualPath) -> Result<()> {
        if !self.is_absolute() {
            if self.style.is_strict() {
                return Err(Error::NotAbsolute {
                    path: self.to_string(),
                });
            }
            log::warn!("resolve on relative path '{self}' ignored");
            return Ok(());
        }
        if relative.is_absolute() {
            if self.style.is_strict() {
                return Err(Error::NotRelative {
                    path: relative.to_string(),
                });
            }
            log::warn!("resolve with absolute path '{relative}' ignored");
            return Ok(());
        }

        let mut index = 0;
        while index < relative.segments.len() {
            match relative.segments[index].as_str() {
                "." => {}
                ".." => {
                    if self.segments.pop().is_none() {
                        log::debug!("ignoring '..' beyond root of '{}'", self.directory());
                    }
                }
                _ => break,
            }
            index += 1;
        }

        self.segments
            .extend(relative.segments[index..].iter().cloned());

        if relative.filename.is_some() {
            self.filename = relative.filename.clone();
        }
        Ok(())
    }

    /// The absolute form of this path.
    ///
    /// An already-absolute path is returned verbatim. A relative path is
    /// resolved against the process working directory with every
    /// dot-segment collapsed; the filename is preserved unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error when the working directory cannot be determined or
    /// is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vpath::VirtualPath;
    ///
    /// let path = VirtualPath::parse("../sibling/data.csv").unwrap();
    /// let absolute = path.absolute().unwrap();
    /// assert!(absolute.is_absolute());
    /// assert_eq!(absolute.filename(), Some("data.csv"));
    /// ```
    pub fn absolute(&self) -> Result<VirtualPath> {
        if self.is_absolute() {
            return Ok(self.clone());
        }

        let base = current_dir_path(self.style)?;
        let mut segments = base.segments;
        for segment in &self.segments {
            match segment.as_str() {
                "." => {}
                ".." => {
                    // stop at the root; excess levels are dropped
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        Ok(VirtualPath::from_parts(
            base.anchor,
            segments,
            self.filename.clone(),
            self.style,
        ))
    }

    /// The relative path from the process working directory to this
    /// absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error when this path is not absolute, the working
    /// directory cannot be determined, or the roots mismatch (a hostname or
    /// drive path can never be reached from the working directory).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vpath::VirtualPath;
    ///
    /// let path = VirtualPath::parse("/srv/data/set.bin").unwrap();
    /// let relative = path.relative().unwrap();
    /// assert!(!relative.is_absolute());
    /// ```
    pub fn relative(&self) -> Result<VirtualPath> {
        let base = current_dir_path(self.style)?;
        self.relative_to(&base)
    }

    /// The relative path from `base` to this path.
    ///
    /// Both paths must be absolute and share the same root (hostname and
    /// drive compared under the style's case rule). The result is one `..`
    /// per directory level of `base` beyond the common prefix, followed by
    /// this path's tail and filename. Identical paths yield `./`.
    ///
    /// # Errors
    ///
    /// Returns an error when either path is relative or the roots mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let target = VirtualPath::parse_with("/a/b/x/f.txt", style).unwrap();
    /// let base = VirtualPath::parse_with("/a/c/", style).unwrap();
    /// let rel = target.relative_to(&base).unwrap();
    /// assert_eq!(rel.to_string(), "../b/x/f.txt");
    /// ```
    pub fn relative_to(&self, base: &VirtualPath) -> Result<VirtualPath> {
        if !self.is_absolute() {
            return Err(Error::NotAbsolute {
                path: self.to_string(),
            });
        }
        if !base.is_absolute() {
            return Err(Error::NotAbsolute {
                path: base.to_string(),
            });
        }

        let os = self.style.os();
        if !self.anchor.same_root(&base.anchor, os) {
            return Err(Error::RootMismatch {
                base: base.anchor.serial_prefix(),
                target: self.anchor.serial_prefix(),
            });
        }

        let mut common = 0;
        while common < self.segments.len()
            && common < base.segments.len()
            && os.names_equal(&self.segments[common], &base.segments[common])
        {
            common += 1;
        }

        let ups = base.segments.len() - common;
        let mut segments: Vec<String> = vec!["..".to_string(); ups];
        segments.extend(self.segments[common..].iter().cloned());

        if segments.is_empty() && self.filename.is_none() {
            segments.push(".".to_string());
        }

        Ok(VirtualPath::from_parts(
            Anchor::Relative,
            segments,
            self.filename.clone(),
            self.style,
        ))
    }

    /// Substitute the real home directory for a home anchor, in place.
    ///
    /// A no-op for paths not anchored at `~`.
    ///
    /// # Errors
    ///
    /// Returns an error when the home directory cannot be determined or is
    /// not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vpath::{Os, PathStyle, VirtualPath};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// let mut path = VirtualPath::parse_with("~/notes/todo.md", style).unwrap();
    /// path.expand_home().unwrap();
    /// assert!(!path.to_string().starts_with('~'));
    /// ```
    pub fn expand_home(&mut self) -> Result<()> {
        if !matches!(self.anchor, Anchor::Home) {
            return Ok(());
        }

        let home = home::home_dir().ok_or(Error::HomeDirUnavailable)?;
        let raw = home.to_str().ok_or(Error::HomeDirUnavailable)?;
        let base = parse_as_directory(raw, self.style)?;

        let mut segments = base.segments;
        segments.append(&mut self.segments);
        self.anchor = base.anchor;
        self.segments = segments;
        Ok(())
    }
}

/// The process working directory as a directory-form path.
fn current_dir_path(style: PathStyle) -> Result<VirtualPath> {
    let cwd = std::env::current_dir().map_err(|e| Error::CurrentDirUnavailable {
        reason: e.to_string(),
    })?;
    let raw = cwd.to_str().ok_or_else(|| Error::CurrentDirUnavailable {
        reason: "not valid UTF-8".to_string(),
    })?;
    parse_as_directory(raw, style)
}

/// Parse a string known to denote a directory, appending the trailing
/// separator its final component would otherwise lose to filename parsing.
fn parse_as_directory(raw: &str, style: PathStyle) -> Result<VirtualPath> {
    let mut owned = raw.to_string();
    match owned.chars().last() {
        Some(c) if style.os().is_separator(c) => {}
        _ => owned.push('/'),
    }
    parse::parse(&owned, style)
}
