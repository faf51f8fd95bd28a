//! Construct-from-string grammar.
//!
//! Parsing recognizes the root marker first (network prefix, drive letter,
//! home anchor, or bare separator), then splits the remainder into
//! directory segments on separators. Dot-segments are stored verbatim;
//! nothing is resolved at parse time. A final component not terminated by a
//! separator is the filename, even when it is literally `.` or `..`.
//!
//! Repeated separators collapse silently; this is normalization, not
//! validation, and applies under both policies.

use crate::error::{Error, Result};
use crate::path::anchor::Anchor;
use crate::path::hostname;
use crate::path::vpath::VirtualPath;
use crate::style::{PathStyle, MAX_FILENAME_LEN};

/// Parse an input string into a path under the given style.
pub(crate) fn parse(input: &str, style: PathStyle) -> Result<VirtualPath> {
    let os = style.os();

    if input.is_empty() {
        // empty input is the current directory, "./"
        return Ok(VirtualPath::from_parts(Anchor::Relative, Vec::new(), None, style));
    }

    let chars: Vec<char> = input.chars().collect();
    let anchor;
    let mut rest: &[char] = &chars;

    if chars.len() >= 2 && os.is_separator(chars[0]) && os.is_separator(chars[1]) {
        // network-location prefix: hostname token runs to the next
        // separator or end of input
        let mut i = 2;
        let mut token = String::new();
        while i < chars.len() && !os.is_separator(chars[i]) {
            token.push(chars[i]);
            i += 1;
        }
        anchor = match hostname::check_hostname(&token, style)? {
            Some(host) => Anchor::Host(host),
            None => Anchor::Root,
        };
        rest = &chars[i..];
    } else if os.allows_drive() && chars.len() >= 2 && chars[0].is_ascii_alphabetic() && chars[1] == ':' {
        anchor = Anchor::Drive(chars[0]);
        rest = &chars[2..];
    } else if os.allows_home() && chars[0] == '~' && (chars.len() == 1 || os.is_separator(chars[1])) {
        anchor = Anchor::Home;
        rest = &chars[1..];
    } else if os.is_separator(chars[0]) {
        anchor = Anchor::Root;
        rest = &chars[1..];
    } else {
        anchor = Anchor::Relative;
    }

    let ends_with_separator = match rest.last() {
        Some(&c) => os.is_separator(c),
        None => true,
    };

    let mut components: Vec<String> = Vec::new();
    let mut current = String::new();
    for &c in rest {
        if os.is_separator(c) {
            if !current.is_empty() {
                components.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        components.push(current);
    }

    let filename_component = if ends_with_separator { None } else { components.pop() };

    let mut segments = Vec::with_capacity(components.len());
    for component in components {
        if let Some(segment) = check_segment(&component, style)? {
            segments.push(segment);
        }
    }

    let filename = match filename_component {
        Some(name) => check_filename(&name, style)?,
        None => None,
    };

    Ok(VirtualPath::from_parts(anchor, segments, filename, style))
}

/// Validate one directory segment name.
///
/// Dot-segments pass through verbatim. Under strict validation a reserved
/// character is an error; under lenient validation reserved characters are
/// stripped and `None` is returned when nothing survives.
pub(crate) fn check_segment(name: &str, style: PathStyle) -> Result<Option<String>> {
    if name == "." || name == ".." {
        return Ok(Some(name.to_string()));
    }

    let os = style.os();
    if !name.chars().any(|c| os.is_reserved_name_char(c)) {
        return Ok(Some(name.to_string()));
    }

    if style.is_strict() {
        return Err(Error::InvalidSegment {
            segment: name.to_string(),
            reason: "contains a reserved character".to_string(),
        });
    }

    let kept: String = name.chars().filter(|&c| !os.is_reserved_name_char(c)).collect();
    if kept.is_empty() {
        log::warn!("segment '{name}' empty after sanitization; dropped");
        Ok(None)
    } else {
        log::warn!("sanitized segment '{name}' to '{kept}'");
        Ok(Some(kept))
    }
}

/// Validate a filename.
///
/// Dot-filenames pass through verbatim. Reserved characters follow the
/// segment policy; the 255-character length bound is enforced after any
/// stripping, with lenient truncation.
pub(crate) fn check_filename(name: &str, style: PathStyle) -> Result<Option<String>> {
    if name == "." || name == ".." {
        return Ok(Some(name.to_string()));
    }

    let os = style.os();
    let mut kept = name.to_string();

    if name.chars().any(|c| os.is_reserved_name_char(c)) {
        if style.is_strict() {
            return Err(Error::InvalidFilename {
                filename: name.to_string(),
                reason: "contains a reserved character".to_string(),
            });
        }
        kept = name.chars().filter(|&c| !os.is_reserved_name_char(c)).collect();
        if kept.is_empty() {
            log::warn!("filename '{name}' empty after sanitization; cleared");
            return Ok(None);
        }
        log::warn!("sanitized filename '{name}' to '{kept}'");
    }

    let length = kept.chars().count();
    if length > MAX_FILENAME_LEN {
        if style.is_strict() {
            return Err(Error::FilenameTooLong {
                length,
                limit: MAX_FILENAME_LEN,
            });
        }
        kept = kept.chars().take(MAX_FILENAME_LEN).collect();
        log::warn!("truncated over-long filename to {MAX_FILENAME_LEN} characters");
    }

    Ok(Some(kept))
}
