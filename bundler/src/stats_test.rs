use super::*;

use std::collections::BTreeMap;

use manifest::{Asset, Mode};

fn sample_build(hash: &str) -> BuildStats {
    let mut by_chunk = BTreeMap::new();
    by_chunk.insert("app.js".to_owned(), "app.3f2a91bc.js".to_owned());

    BuildStats {
        hash: hash.to_owned(),
        mode: Mode::Production,
        time_ms: 900,
        output_path: "dist".to_owned(),
        public_path: "/statics/".to_owned(),
        assets: vec![Asset {
            name: "app.3f2a91bc.js".to_owned(),
            size: 1024,
            chunk: "app.js".to_owned(),
        }],
        assets_by_chunk_name: by_chunk,
    }
}

#[test]
fn write_stats_creates_named_file_in_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_stats(dir.path(), &sample_build("aa11bb22")).expect("write");
    assert_eq!(path, dir.path().join(STATS_FILE_NAME));
    assert!(path.is_file());
}

#[test]
fn write_stats_wraps_build_in_stats_json_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_stats(dir.path(), &sample_build("aa11bb22")).expect("write");

    let raw = std::fs::read_to_string(&path).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert!(value.get("statsJson").is_some());
}

#[test]
fn write_stats_round_trips_through_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let build = sample_build("aa11bb22");
    let path = write_stats(dir.path(), &build).expect("write");

    let loaded = StatsFile::load(&path).expect("load");
    assert_eq!(loaded.stats_json, build);
}

#[test]
fn write_stats_replaces_previous_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_stats(dir.path(), &sample_build("11111111")).expect("first write");
    let path = write_stats(dir.path(), &sample_build("22222222")).expect("second write");

    let loaded = StatsFile::load(&path).expect("load");
    assert_eq!(loaded.stats_json.hash, "22222222");
}

#[test]
fn write_stats_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_stats(dir.path(), &sample_build("aa11bb22")).expect("write");

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn write_stats_missing_dir_fails_without_partial_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing");

    let err = write_stats(&missing, &sample_build("aa11bb22")).expect_err("should fail");
    assert!(matches!(err, StatsWriteError::Write { .. }));
    assert!(!missing.join(STATS_FILE_NAME).exists());
    assert!(!dir.path().join(STATS_FILE_NAME).exists());
}
