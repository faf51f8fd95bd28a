//! Host-OS and validation-policy configuration.
//!
//! Path grammar is identical across operating systems; what varies is the
//! separator set, the availability of drive letters and the home (`~`)
//! anchor, the reserved-character tables, and whether comparisons are
//! case-sensitive. This module captures that variation in a small value
//! type passed to the parser at construction, together with the choice
//! between strict (reject) and lenient (sanitize) validation.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The maximum permitted filename length in characters.
pub const MAX_FILENAME_LEN: usize = 255;

/// Host operating-system family for path interpretation.
///
/// # Examples
///
/// ```
/// use vpath::Os;
///
/// assert!(Os::Posix.case_sensitive());
/// assert!(!Os::Windows.case_sensitive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    /// POSIX-like systems (Linux, macOS): `/` separator, `~` home anchor,
    /// case-sensitive comparisons, no drive letters.
    Posix,
    /// Windows: accepts `\` as an input separator, drive letters, and
    /// case-insensitive comparisons; no `~` anchor.
    Windows,
}

impl Os {
    /// The operating system this build targets.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Os;
    ///
    /// let os = Os::native();
    /// assert_eq!(os == Os::Windows, cfg!(windows));
    /// ```
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Check whether `c` is a path separator under this OS.
    ///
    /// The canonical separator is `/` everywhere; Windows additionally
    /// accepts `\` on input.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Os;
    ///
    /// assert!(Os::Posix.is_separator('/'));
    /// assert!(!Os::Posix.is_separator('\\'));
    /// assert!(Os::Windows.is_separator('\\'));
    /// ```
    #[must_use]
    pub fn is_separator(self, c: char) -> bool {
        c == '/' || (self == Self::Windows && c == '\\')
    }

    /// Whether name comparisons are case-sensitive under this OS.
    #[must_use]
    pub const fn case_sensitive(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Whether drive letters (`X:`) are recognized under this OS.
    #[must_use]
    pub const fn allows_drive(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Whether the home anchor (`~/`) is recognized under this OS.
    #[must_use]
    pub const fn allows_home(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Whether a single `@` is permitted inside a named hostname.
    #[must_use]
    pub const fn allows_hostname_at(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Check whether `c` is reserved inside a single segment or filename.
    ///
    /// POSIX reserves only the separator and NUL. Windows additionally
    /// reserves its shell metacharacters and the alternative separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Os;
    ///
    /// assert!(Os::Windows.is_reserved_name_char('?'));
    /// assert!(!Os::Posix.is_reserved_name_char('?'));
    /// assert!(Os::Posix.is_reserved_name_char('/'));
    /// ```
    #[must_use]
    pub fn is_reserved_name_char(self, c: char) -> bool {
        if c == '/' || c == '\0' {
            return true;
        }
        match self {
            Self::Posix => false,
            Self::Windows => matches!(c, '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*'),
        }
    }

    /// Compare two names under this OS's case rule.
    ///
    /// Case-insensitive comparison lowercases per character; no
    /// locale-aware folding is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Os;
    ///
    /// assert!(Os::Windows.names_equal("Dir", "dir"));
    /// assert!(!Os::Posix.names_equal("Dir", "dir"));
    /// ```
    #[must_use]
    pub fn names_equal(self, a: &str, b: &str) -> bool {
        if self.case_sensitive() {
            a == b
        } else {
            let mut fa = a.chars().flat_map(char::to_lowercase);
            let mut fb = b.chars().flat_map(char::to_lowercase);
            loop {
                match (fa.next(), fb.next()) {
                    (None, None) => return true,
                    (Some(x), Some(y)) if x == y => {}
                    _ => return false,
                }
            }
        }
    }

    /// Parses an OS name from a string.
    ///
    /// Recognizes: "posix", "windows" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Os;
    ///
    /// assert_eq!(Os::parse("posix").unwrap(), Os::Posix);
    /// assert_eq!(Os::parse("WINDOWS").unwrap(), Os::Windows);
    /// assert!(Os::parse("beos").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::Configuration {
                field: "os".to_string(),
                message: format!("unrecognized OS '{s}'"),
            }),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Validation policy applied to malformed input.
///
/// The policy is selected at path construction and inherited by every
/// mutation of that path.
///
/// # Examples
///
/// ```
/// use vpath::Validation;
///
/// assert_ne!(Validation::Strict, Validation::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Malformed input is reported as an error; the operation's effect is
    /// not applied.
    Strict,
    /// Malformed input is recovered from: reserved characters are stripped,
    /// missing required parts fall back to documented defaults, and
    /// out-of-range operations become no-ops.
    Lenient,
}

impl Validation {
    /// Parses a validation policy from a string.
    ///
    /// Recognizes: "strict", "lenient" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Validation;
    ///
    /// assert_eq!(Validation::parse("strict").unwrap(), Validation::Strict);
    /// assert_eq!(Validation::parse("Lenient").unwrap(), Validation::Lenient);
    /// assert!(Validation::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(Error::Configuration {
                field: "validation".to_string(),
                message: format!("unrecognized validation policy '{s}'"),
            }),
        }
    }

    /// Whether this is the strict policy.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// Combined path-interpretation configuration.
///
/// A `PathStyle` is attached to every path at construction; all later
/// mutations of that path reuse it. The grammar logic is identical across
/// the whole configuration matrix, only the character tables and the
/// separator/case rules vary.
///
/// # Examples
///
/// ```
/// use vpath::{Os, PathStyle, Validation};
///
/// let style = PathStyle::new(Os::Windows)
///     .with_validation(Validation::Lenient);
/// assert_eq!(style.os(), Os::Windows);
/// assert_eq!(style.validation(), Validation::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStyle {
    os: Os,
    validation: Validation,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            os: Os::native(),
            validation: Validation::Strict,
        }
    }
}

impl PathStyle {
    /// Create a style for the given OS with strict validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Os, PathStyle, Validation};
    ///
    /// let style = PathStyle::new(Os::Posix);
    /// assert_eq!(style.validation(), Validation::Strict);
    /// ```
    #[must_use]
    pub const fn new(os: Os) -> Self {
        Self {
            os,
            validation: Validation::Strict,
        }
    }

    /// Create a style for the compiling host OS with strict validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathStyle;
    ///
    /// let style = PathStyle::native();
    /// ```
    #[must_use]
    pub const fn native() -> Self {
        Self::new(Os::native())
    }

    /// Replace the OS family.
    #[must_use]
    pub const fn with_os(mut self, os: Os) -> Self {
        self.os = os;
        self
    }

    /// Replace the validation policy.
    #[must_use]
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// The configured OS family.
    #[must_use]
    pub const fn os(self) -> Os {
        self.os
    }

    /// The configured validation policy.
    #[must_use]
    pub const fn validation(self) -> Validation {
        self.validation
    }

    /// Whether this style reports malformed input as errors.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        self.validation.is_strict()
    }

    /// Build a style from environment overrides on top of the native
    /// defaults.
    ///
    /// Reads `VPATH_OS` and `VPATH_VALIDATION`; unset variables leave the
    /// native default in place.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unrecognized value.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vpath::PathStyle;
    ///
    /// let style = PathStyle::from_env().unwrap();
    /// ```
    pub fn from_env() -> Result<Self> {
        let mut style = Self::default();

        if let Ok(val) = env::var("VPATH_OS") {
            style.os = Os::parse(&val)?;
        }

        if let Ok(val) = env::var("VPATH_VALIDATION") {
            style.validation = Validation::parse(&val)?;
        }

        Ok(style)
    }
}
