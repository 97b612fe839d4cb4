//! Tests for path decomposition

use pretty_assertions::assert_eq;
use revfs_core::{RepoCountMode, decompose};
use revfs_path::VirtualPath;
use revfs_store::ResolvedLocation;
use rstest::rstest;

fn internal(raw: &str) -> VirtualPath {
    VirtualPath::parse(raw).unwrap()
}

#[test]
fn test_root_resolves_identically_in_both_modes() {
    let single = decompose("/", RepoCountMode::Single).unwrap();
    let multi = decompose("/", RepoCountMode::Multi).unwrap();

    assert_eq!(single, multi);
    assert_eq!(single, ResolvedLocation::filesystem_root());
    assert_eq!(single.internal.unwrap().as_str(), "/");
}

#[rstest]
#[case("/v1/a/b", "v1", "/a/b")]
#[case("/v1/a", "v1", "/a")]
#[case("/v1", "v1", "/")]
#[case("/2024-01-01/deep/ly/nested/file", "2024-01-01", "/deep/ly/nested/file")]
fn test_single_mode(#[case] path: &str, #[case] revision: &str, #[case] rest: &str) {
    let location = decompose(path, RepoCountMode::Single).unwrap();
    assert_eq!(location, ResolvedLocation::single(revision, internal(rest)));
    assert_eq!(location.repository, None);
}

#[rstest]
#[case("/repoA/v1/a", "repoA", "v1", "/a")]
#[case("/repoA/v1", "repoA", "v1", "/")]
#[case("/backup/2024-01-01/dir/file", "backup", "2024-01-01", "/dir/file")]
fn test_multi_mode(
    #[case] path: &str,
    #[case] repository: &str,
    #[case] revision: &str,
    #[case] rest: &str,
) {
    let location = decompose(path, RepoCountMode::Multi).unwrap();
    assert_eq!(
        location,
        ResolvedLocation::multi(repository, revision, internal(rest))
    );
}

#[test]
fn test_multi_mode_repository_root() {
    let location = decompose("/repoA", RepoCountMode::Multi).unwrap();
    assert_eq!(location, ResolvedLocation::repository_root("repoA"));
    assert_eq!(location.revision, None);
    assert_eq!(location.internal, None);
}

#[rstest]
#[case("")]
#[case("relative/path")]
#[case("//")]
#[case("/a//b")]
#[case("/a/")]
fn test_malformed_paths_fail_in_both_modes(#[case] path: &str) {
    for mode in [RepoCountMode::Single, RepoCountMode::Multi] {
        let err = decompose(path, mode).unwrap_err();
        assert!(err.is_invalid_path(), "expected invalid path for {path:?}, got {err}");
    }
}

#[test]
fn test_decomposition_is_deterministic() {
    for mode in [RepoCountMode::Single, RepoCountMode::Multi] {
        let first = decompose("/repoA/v1/a", mode).unwrap();
        let second = decompose("/repoA/v1/a", mode).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_mode_decides_first_segment_meaning() {
    let single = decompose("/name/rest", RepoCountMode::Single).unwrap();
    let multi = decompose("/name/rest", RepoCountMode::Multi).unwrap();

    assert_eq!(single.revision.as_deref(), Some("name"));
    assert_eq!(multi.repository.as_deref(), Some("name"));
    assert_eq!(multi.revision.as_deref(), Some("rest"));
}
