//! End-to-end mount tests
//!
//! Exercises the complete flow: mount config on disk -> dispatcher ->
//! resolved lookups against the store, in both repository-count modes.

use std::fs;

use revfs_core::{Dispatcher, MountConfig, RepoCountMode};
use revfs_test_utils::StoreFixture;
use tempfile::TempDir;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Write a mount config naming the given repositories.
fn write_config(dir: &TempDir, names: &[&str]) -> MountConfig {
    let entries: String = names
        .iter()
        .map(|name| {
            format!(
                "[[repositories]]\nname = \"{name}\"\nsource = \"/srv/archives/{name}\"\n\n"
            )
        })
        .collect();
    let path = dir.path().join("mount.toml");
    fs::write(&path, entries).unwrap();
    MountConfig::load(&path).unwrap()
}

#[test]
fn test_single_repository_mount() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &["backup"]);
    assert_eq!(config.mode(), RepoCountMode::Single);

    let (store, _) = StoreFixture::new()
        .with_revision("backup", "2024-01-01", &[("/file", 7)])
        .with_revision("backup", "2024-02-01", &[("/file", 9), ("/dir/nested", 3)])
        .single_store();
    let dispatcher = Dispatcher::from_config(&config, store).unwrap();

    // Root lists revisions; the first segment of any deeper path is one.
    assert_eq!(
        dispatcher.get_children("/").unwrap(),
        vec!["2024-01-01", "2024-02-01"]
    );
    assert_eq!(
        dispatcher.get_children("/2024-02-01").unwrap(),
        vec!["dir", "file"]
    );
    let stats = dispatcher.get_file("/2024-02-01/dir/nested").unwrap();
    assert_eq!(stats.size, 3);

    // A file only present in the newer revision is absent from the older.
    assert!(dispatcher.get_file("/2024-01-01/dir/nested").is_err());
}

#[test]
fn test_multi_repository_mount() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &["first", "second"]);
    assert_eq!(config.mode(), RepoCountMode::Multi);

    let (store, _) = StoreFixture::new()
        .with_revision("first", "v1", &[("/a", 1)])
        .with_revision("second", "v1", &[("/b", 2)])
        .with_revision("second", "v2", &[("/b", 4), ("/c/d", 8)])
        .multi_store();
    let dispatcher = Dispatcher::from_config(&config, store).unwrap();

    assert_eq!(dispatcher.get_children("/").unwrap(), vec!["first", "second"]);
    assert_eq!(dispatcher.get_children("/second").unwrap(), vec!["v1", "v2"]);
    assert_eq!(
        dispatcher.get_children("/second/v2").unwrap(),
        vec!["b", "c"]
    );
    assert_eq!(dispatcher.get_file("/second/v2/c/d").unwrap().size, 8);

    // Repository directories stat as directories.
    assert!(dispatcher.get_file("/first").unwrap().is_dir());
}

#[test]
fn test_json_config_round_trip() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mount.json");
    fs::write(
        &path,
        r#"{"repositories": [{"name": "backup", "source": "/srv/archives/backup"}]}"#,
    )
    .unwrap();

    let config = MountConfig::load(&path).unwrap();
    assert_eq!(config.repositories.len(), 1);
    assert_eq!(config.repositories[0].name, "backup");
    assert_eq!(config.mode(), RepoCountMode::Single);
}

#[test]
fn test_unsupported_config_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mount.ini");
    fs::write(&path, "repositories=backup").unwrap();

    let err = MountConfig::load(&path).unwrap_err();
    assert!(matches!(
        err,
        revfs_core::Error::UnsupportedFormat { .. }
    ));
}

#[test]
fn test_malformed_paths_never_reach_the_store() {
    let dispatcher = StoreFixture::new()
        .with_revision("backup", "v1", &[("/file", 1)])
        .single_dispatcher();

    for path in ["", "relative", "/v1//file", "/v1/"] {
        let err = dispatcher.get_file(path).unwrap_err();
        assert!(err.is_invalid_path(), "{path:?} should be invalid");
    }
}
