//! Hostname grammar and sanitization.
//!
//! A network-location prefix carries either a named host (letters, digits,
//! hyphen, optionally one `@` on POSIX) or an IPv4 literal (four
//! dot-separated decimal groups, optionally enclosed in brackets). Dots and
//! brackets are reserved for the IPv4 form, so a token containing either is
//! validated against that grammar and never against the named-host one.

use crate::error::{Error, Result};
use crate::style::PathStyle;

/// Outcome of hostname validation under the lenient policy: either a
/// (possibly repaired) hostname, or nothing when no hostname survives.
pub(crate) type HostOutcome = Option<String>;

/// Validate a hostname token against the active style.
///
/// Under strict validation a malformed token is an error. Under lenient
/// validation reserved characters are stripped and an unsalvageable token
/// resolves to `None`, demoting the path to a bare root.
pub(crate) fn check_hostname(token: &str, style: PathStyle) -> Result<HostOutcome> {
    if token.is_empty() {
        if style.is_strict() {
            return Err(Error::EmptyHostname);
        }
        log::warn!("empty hostname after network prefix; dropping to bare root");
        return Ok(None);
    }

    let looks_ipv4 = token.starts_with('[') || token.contains('.');
    let verdict = if looks_ipv4 {
        check_ipv4_literal(token)
    } else {
        check_named_host(token, style)
    };

    match verdict {
        Ok(()) => Ok(Some(token.to_string())),
        Err(err) if style.is_strict() => Err(err),
        Err(err) => {
            let repaired = sanitize_named_host(token, style);
            match repaired {
                Some(host) => {
                    log::warn!("sanitized hostname '{token}' to '{host}' ({err})");
                    Ok(Some(host))
                }
                None => {
                    log::warn!("hostname '{token}' unsalvageable ({err}); dropping to bare root");
                    Ok(None)
                }
            }
        }
    }
}

/// Validate a named host: ASCII letters, digits and hyphens, not starting
/// with a hyphen, with at most one `@` where the style permits it.
fn check_named_host(token: &str, style: PathStyle) -> Result<()> {
    let fail = |reason: &str| Error::InvalidHostname {
        hostname: token.to_string(),
        reason: reason.to_string(),
    };

    if token.starts_with('-') {
        return Err(fail("must not start with a hyphen"));
    }

    let mut seen_at = false;
    for c in token.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            continue;
        }
        if c == '@' && style.os().allows_hostname_at() {
            if seen_at {
                return Err(fail("at most one '@' is permitted"));
            }
            seen_at = true;
            continue;
        }
        return Err(fail("contains a character outside letters, digits and hyphen"));
    }

    Ok(())
}

/// Validate an IPv4 literal, optionally enclosed in brackets: exactly four
/// dot-separated groups of 1-3 digits, each in 0-255.
fn check_ipv4_literal(token: &str) -> Result<()> {
    let fail = |reason: &str| Error::InvalidIpv4 {
        literal: token.to_string(),
        reason: reason.to_string(),
    };

    let inner = if let Some(stripped) = token.strip_prefix('[') {
        stripped.strip_suffix(']').ok_or_else(|| fail("unclosed bracket"))?
    } else if token.ends_with(']') {
        return Err(fail("closing bracket without an opening one"));
    } else {
        token
    };

    let groups: Vec<&str> = inner.split('.').collect();
    if groups.len() != 4 {
        return Err(fail("expected four dot-separated groups"));
    }

    for group in groups {
        if group.is_empty() || group.len() > 3 {
            return Err(fail("each group must be 1-3 digits"));
        }
        if !group.chars().all(|c| c.is_ascii_digit()) {
            return Err(fail("groups must contain only digits"));
        }
        // 3 digits maximum, so this cannot overflow u16
        let value: u16 = group.parse().map_err(|_| fail("unparseable group"))?;
        if value > 255 {
            return Err(fail("group exceeds 255"));
        }
    }

    Ok(())
}

/// Best-effort repair of a malformed hostname under the lenient policy.
///
/// Keeps the named-host character set (with at most one `@` where allowed),
/// then trims leading hyphens. Returns `None` when nothing survives.
fn sanitize_named_host(token: &str, style: PathStyle) -> Option<String> {
    let mut kept = String::with_capacity(token.len());
    let mut seen_at = false;
    for c in token.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            kept.push(c);
        } else if c == '@' && style.os().allows_hostname_at() && !seen_at {
            kept.push(c);
            seen_at = true;
        }
    }

    let trimmed = kept.trim_start_matches('-');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
