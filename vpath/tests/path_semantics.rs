//! Integration tests for path parsing and resolution semantics.
//!
//! This test suite verifies that:
//! - Parsing recognizes every root-marker form (bare root, drive, hostname,
//!   home) and defaults the directory correctly for degenerate input
//! - Dot-segments survive parsing and mutation literally and only collapse
//!   under the explicit resolution operations
//! - The relative/absolute algebra preserves root markers and computes
//!   correct dot-walks between related paths
//! - Canonical serialization round-trips through the parser
//!
//! Literal preservation is a key property: `/a/./b` and `/a/b` are
//! different values until a caller explicitly resolves, so no information
//! from the original spelling is lost behind the caller's back.

use std::env;

use serial_test::serial;
use vpath::{Error, Os, PathStyle, VirtualPath};

const POSIX: PathStyle = PathStyle::new(Os::Posix);
const WINDOWS: PathStyle = PathStyle::new(Os::Windows);

fn parse(input: &str) -> VirtualPath {
    VirtualPath::parse_with(input, POSIX).unwrap()
}

// =============================================================================
// Parsing - root markers and directory defaults
// =============================================================================

#[test]
fn test_empty_input_is_current_directory() {
    // Empty input means "here": the directory defaults to ./ with no
    // hostname, drive, or filename.
    let path = parse("");
    assert_eq!(path.directory(), "./");
    assert_eq!(path.hostname(), None);
    assert_eq!(path.filename(), None);
    assert!(!path.is_absolute());
}

#[test]
fn test_bare_hostname_gets_root_directory() {
    // With nothing after the hostname the directory is the bare root,
    // not the ./ default.
    let path = parse("//hostname");
    assert_eq!(path.hostname(), Some("hostname"));
    assert_eq!(path.directory(), "/");
}

#[test]
fn test_hostname_with_directory_and_filename() {
    let path = parse("//hostname/path1/filename.ext");
    assert_eq!(path.hostname(), Some("hostname"));
    assert_eq!(path.directory(), "/path1/");
    assert_eq!(path.filename(), Some("filename.ext"));
}

#[test]
fn test_empty_hostname_is_rejected() {
    // "//" and "///" carry the network prefix but no hostname token.
    assert!(VirtualPath::parse_with("//", POSIX).is_err());
    assert!(VirtualPath::parse_with("///", POSIX).is_err());
}

#[test]
fn test_filename_only_input() {
    let path = parse("filename.ext");
    assert_eq!(path.directory(), "./");
    assert_eq!(path.filename(), Some("filename.ext"));
    assert_eq!(path.file_stem(), Some("filename"));
    assert_eq!(path.extension(), Some("ext"));
}

#[test]
fn test_dot_segments_survive_parsing() {
    let path = parse("/a/./b/../c/");
    assert_eq!(path.directory(), "/a/./b/../c/");
}

#[test]
fn test_drive_letters_are_windows_only() {
    let path = VirtualPath::parse_with("X:/data/", WINDOWS).unwrap();
    assert!(path.has_drive());
    assert!(path.is_absolute());
    assert_eq!(path.root(), Some("X:/".to_string()));

    // on POSIX the same input is a relative path whose first segment
    // happens to contain a colon
    let path = VirtualPath::parse_with("X:/data/", POSIX).unwrap();
    assert!(!path.has_drive());
    assert!(!path.is_absolute());
}

#[test]
fn test_home_anchor_is_posix_only() {
    let path = VirtualPath::parse_with("~/work/", POSIX).unwrap();
    assert!(path.is_absolute());
    assert_eq!(path.root(), Some("~/".to_string()));

    let path = VirtualPath::parse_with("~/work/", WINDOWS).unwrap();
    assert!(!path.is_absolute());
}

#[test]
fn test_ipv4_literal_hostnames() {
    let path = parse("//127.0.0.1/srv/");
    assert_eq!(path.hostname(), Some("127.0.0.1"));

    let path = parse("//[192.168.1.10]/srv/");
    assert_eq!(path.hostname(), Some("[192.168.1.10]"));

    // mixed named/IP forms are invalid in both grammars
    assert!(VirtualPath::parse_with("//host.1.2.3/", POSIX).is_err());
    assert!(VirtualPath::parse_with("//999.0.0.1/", POSIX).is_err());
}

// =============================================================================
// Serialization round-trips
// =============================================================================

#[test]
fn test_canonical_form_round_trips() {
    // Every accepted input reparses, from its canonical form, to an equal
    // value.
    for input in [
        "",
        ".",
        "./",
        "..",
        "../",
        "/",
        "a",
        "a/b/",
        "/a/b/c.txt",
        "//host",
        "//host/a/",
        "//host/a/b.c",
        "~/",
        "~/x/y.z",
        "/a/./b/../c/",
        "/etc/config.",
        "/srv/.hidden",
    ] {
        let path = parse(input);
        let reparsed = parse(&path.to_string());
        assert_eq!(path, reparsed, "round-trip failed for '{input}'");
        assert_eq!(
            path.to_string(),
            reparsed.to_string(),
            "canonical form unstable for '{input}'"
        );
    }
}

#[test]
fn test_windows_canonical_form_round_trips() {
    for input in [r"C:\Users\dev\file.txt", "C:", r"\\host\share\x", r"\x\y\\z\"] {
        let path = VirtualPath::parse_with(input, WINDOWS).unwrap();
        let reparsed = VirtualPath::parse_with(&path.to_string(), WINDOWS).unwrap();
        assert_eq!(path, reparsed, "round-trip failed for '{input}'");
    }
}

// =============================================================================
// Directory mutation
// =============================================================================

#[test]
fn test_remove_last_directory_scenario() {
    let mut path = parse("/path1/path2/");
    path.remove_last_directory();
    assert_eq!(path, parse("/path1/"));
}

#[test]
fn test_remove_last_directory_is_eventually_noop() {
    // Repeated removal settles on the root and never destroys it.
    let mut path = parse("//host/a/b/c/");
    for _ in 0..10 {
        path.remove_last_directory();
    }
    assert_eq!(path.directory(), "/");
    assert_eq!(path.hostname(), Some("host"));
}

#[test]
fn test_append_resolves_nothing() {
    // Dot-segments appended through the mutator stay literal.
    let mut path = parse("/a/");
    path.append_directory("..").unwrap();
    path.append_directory(".").unwrap();
    assert_eq!(path.directory(), "/a/.././");
}

#[test]
fn test_mutators_leave_other_fields_alone() {
    let mut path = parse("//host/a/b/report.txt");

    path.remove_last_directory();
    assert_eq!(path.filename(), Some("report.txt"));
    assert_eq!(path.hostname(), Some("host"));

    path.set_filename("draft").unwrap();
    assert_eq!(path.to_string(), "//host/a/draft.txt");

    path.set_directory("/x/y/z").unwrap();
    assert_eq!(path.to_string(), "//host/x/y/z/draft.txt");
}

// =============================================================================
// Resolution algebra
// =============================================================================

#[test]
fn test_resolve_scenario_single_parent() {
    let mut path = parse("//a/b/c/d");
    path.resolve(&parse("../g")).unwrap();
    assert_eq!(path.to_string(), "//a/b/g");
}

#[test]
fn test_resolve_scenario_excess_parents() {
    // Walking above the root is silently clamped, not an error.
    let mut path = parse("//a/b/c/d");
    path.resolve(&parse("../../../g")).unwrap();
    assert_eq!(path.to_string(), "//a/g");
}

#[test]
fn test_resolve_requires_absolute_resident() {
    let mut path = parse("a/b/");
    let err = path.resolve(&parse("c/")).unwrap_err();
    assert!(matches!(err, Error::NotAbsolute { .. }));
}

#[test]
fn test_resolve_requires_relative_argument() {
    let mut path = parse("/a/b/");
    let err = path.resolve(&parse("/c/")).unwrap_err();
    assert!(matches!(err, Error::NotRelative { .. }));
}

#[test]
fn test_relative_between_siblings() {
    let target = parse("/projects/app/src/main.rs");
    let base = parse("/projects/app/docs/");
    let rel = target.relative_to(&base).unwrap();
    assert_eq!(rel.to_string(), "../src/main.rs");
}

#[test]
fn test_relative_of_identical_paths() {
    let path = parse("//host/a/b/");
    assert_eq!(path.relative_to(&path).unwrap().to_string(), "./");
}

#[test]
fn test_relative_rejects_mismatched_roots() {
    let err = parse("//h1/x/").relative_to(&parse("//h2/x/")).unwrap_err();
    assert!(matches!(err, Error::RootMismatch { .. }));

    let a = VirtualPath::parse_with("C:/x/", WINDOWS).unwrap();
    let b = VirtualPath::parse_with("D:/x/", WINDOWS).unwrap();
    assert!(matches!(a.relative_to(&b), Err(Error::RootMismatch { .. })));
}

#[test]
fn test_relative_resolve_round_trip() {
    // relative_to produces exactly the walk that resolve consumes.
    let target = parse("/a/b/x/y/f.bin");
    let mut base = parse("/a/b/c/d/");
    let rel = target.relative_to(&base).unwrap();
    assert_eq!(rel.to_string(), "../../x/y/f.bin");

    base.resolve(&rel).unwrap();
    assert_eq!(base.to_string(), "/a/b/x/y/f.bin");
}

// =============================================================================
// Working-directory operations
// =============================================================================

#[test]
#[serial]
fn test_absolute_resolves_against_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let cwd = env::current_dir().unwrap();
    let path = parse("sub/data.csv");
    let absolute = path.absolute().unwrap();

    env::set_current_dir(original).unwrap();

    assert!(absolute.is_absolute());
    assert_eq!(
        absolute.to_string(),
        format!("{}/sub/data.csv", cwd.to_str().unwrap().trim_end_matches('/'))
    );
}

#[test]
#[serial]
fn test_absolute_collapses_all_dot_segments() {
    let cwd = env::current_dir().unwrap();
    let path = parse("./a/.././b/f.txt");
    let absolute = path.absolute().unwrap();

    let rendered = absolute.to_string();
    assert!(rendered.starts_with(cwd.to_str().unwrap()));
    assert!(!rendered.contains("/./"));
    assert!(!rendered.contains("/../"));
    assert!(rendered.ends_with("/b/f.txt"));
}

#[test]
#[serial]
fn test_relative_against_cwd() {
    let cwd = env::current_dir().unwrap();
    let target = parse(&format!(
        "{}/nested/out.log",
        cwd.to_str().unwrap().trim_end_matches('/')
    ));
    let rel = target.relative().unwrap();
    assert_eq!(rel.to_string(), "nested/out.log");
}

// =============================================================================
// Structural equality
// =============================================================================

#[test]
fn test_equality_does_not_resolve() {
    assert_ne!(parse("/a/./b/"), parse("/a/b/"));
    assert_ne!(parse("/a/x/../b/"), parse("/b/"));
}

#[test]
fn test_equality_case_sensitivity_follows_os() {
    assert_ne!(parse("/A/"), parse("/a/"));

    let a = VirtualPath::parse_with("/A/File.TXT", WINDOWS).unwrap();
    let b = VirtualPath::parse_with("/a/file.txt", WINDOWS).unwrap();
    assert_eq!(a, b);
}
