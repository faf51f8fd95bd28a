//! Property-based tests for path handling.
//!
//! Note: The parse and resolve modules already have unit tests for their
//! concrete grammar cases. This module focuses on cross-operation
//! invariants: round-tripping, root preservation, and algebra consistency.

use super::vpath::VirtualPath;
use crate::style::{Os, PathStyle};
use proptest::prelude::*;

// Strategy for generating segment-like strings
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8)
        .prop_map(|parts| format!("/{}/", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            segment_strategy(),
        ],
        1..8,
    )
    .prop_map(|parts| format!("{}/", parts.join("/")))
}

fn posix(input: &str) -> VirtualPath {
    VirtualPath::parse_with(input, PathStyle::new(Os::Posix)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Serialization round-trips: parse(to_string(p)) == p
    #[test]
    fn serialize_parse_round_trip(s in absolute_path_strategy()) {
        let path = posix(&s);
        let reparsed = posix(&path.to_string());
        prop_assert_eq!(&path, &reparsed);
        prop_assert_eq!(path.to_string(), reparsed.to_string());
    }

    #[test]
    fn relative_serialize_parse_round_trip(s in relative_path_strategy()) {
        let path = posix(&s);
        let reparsed = posix(&path.to_string());
        prop_assert_eq!(&path, &reparsed);
    }

    // remove_last_directory reaches a fixpoint and never destroys the root
    #[test]
    fn remove_last_directory_reaches_fixpoint(s in absolute_path_strategy()) {
        let mut path = posix(&s);
        for _ in 0..32 {
            path.remove_last_directory();
        }
        prop_assert_eq!(path.directory(), "/");
        let settled = path.to_string();
        path.remove_last_directory();
        prop_assert_eq!(path.to_string(), settled);
    }

    // resolve never removes the root marker of the resident path
    #[test]
    fn resolve_preserves_root(base in absolute_path_strategy(), rel in relative_path_strategy()) {
        let mut path = posix(&format!("//host{base}"));
        let step = posix(&rel);
        path.resolve(&step).unwrap();
        prop_assert_eq!(path.hostname(), Some("host"));
        prop_assert!(path.is_absolute());
    }

    // resolving the relative path between two absolutes lands on the target
    // when both are dot-free
    #[test]
    fn relative_then_resolve_recovers_target(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let target = posix(&a);
        let base = posix(&b);
        let rel = target.relative_to(&base).unwrap();
        prop_assert!(!rel.is_absolute());

        let mut recovered = base;
        recovered.resolve(&rel).unwrap();
        prop_assert_eq!(recovered.directory(), target.directory());
    }

    // parse never produces a filename on separator-terminated input
    #[test]
    fn trailing_separator_means_directory(s in absolute_path_strategy()) {
        let path = posix(&s);
        prop_assert!(path.is_directory());
        prop_assert!(path.filename().is_none());
    }

    // append then remove is the identity on dot-free absolute paths
    #[test]
    fn append_remove_identity(s in absolute_path_strategy(), name in segment_strategy()) {
        let original = posix(&s);
        let mut path = original.clone();
        path.append_directory(&name).unwrap();
        prop_assert_ne!(&path, &original);
        path.remove_last_directory();
        prop_assert_eq!(&path, &original);
    }

    // equality is structural: inserting a dot segment changes the value
    #[test]
    fn dot_segment_insertion_breaks_equality(s in absolute_path_strategy()) {
        let plain = posix(&s);
        let dotted = posix(&format!("/.{s}"));
        prop_assert_ne!(plain, dotted);
    }
}
