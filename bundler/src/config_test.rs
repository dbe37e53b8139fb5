use super::*;

fn sample_args() -> BundleArgs {
    BundleArgs {
        mode: "development".to_owned(),
        out_dir: PathBuf::from("dist"),
        public_path: "/statics/".to_owned(),
        input_dir: PathBuf::from("client/pkg"),
        compile: false,
        stats_dir: None,
    }
}

#[test]
fn from_args_resolves_mode_and_paths() {
    let config = BundleConfig::from_args(&sample_args());
    assert_eq!(config.mode, Mode::Development);
    assert_eq!(config.out_dir, PathBuf::from("dist"));
    assert_eq!(config.public_path, "/statics/");
    assert_eq!(config.statics_dir(), PathBuf::from("dist/statics"));
}

#[test]
fn stats_output_defaults_to_out_dir() {
    let config = BundleConfig::from_args(&sample_args());
    assert_eq!(config.stats_output_dir(), PathBuf::from("dist"));
}

#[test]
fn stats_output_override_wins() {
    let mut args = sample_args();
    args.stats_dir = Some(PathBuf::from("reports"));
    let config = BundleConfig::from_args(&args);
    assert_eq!(config.stats_output_dir(), PathBuf::from("reports"));
}

#[test]
fn development_keeps_logical_file_names() {
    let config = BundleConfig::from_args(&sample_args());
    assert!(!config.hashed_filenames());
    assert_eq!(config.cargo_profile_flag(), None);
}

#[test]
fn production_fingerprints_and_builds_release() {
    let mut args = sample_args();
    args.mode = "production".to_owned();
    let config = BundleConfig::from_args(&args);
    assert_eq!(config.mode, Mode::Production);
    assert!(config.hashed_filenames());
    assert_eq!(config.cargo_profile_flag(), Some("--release"));
}

#[test]
fn normalize_public_path_adds_missing_slashes() {
    assert_eq!(normalize_public_path("statics"), "/statics/");
    assert_eq!(normalize_public_path("/statics"), "/statics/");
    assert_eq!(normalize_public_path("statics/"), "/statics/");
    assert_eq!(normalize_public_path("/statics/"), "/statics/");
}

#[test]
fn normalize_public_path_collapses_empty_to_root() {
    assert_eq!(normalize_public_path(""), "/");
    assert_eq!(normalize_public_path("/"), "/");
}
