use std::path::PathBuf;

use sd_local::{
    default_config_path, open_config, resolve_config_path, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
use tempfile::tempdir;

#[test]
fn default_config_path_lives_under_sdlocal_dir() {
    let path = default_config_path().expect("home dir");
    assert!(path.ends_with(PathBuf::from(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)));
}

#[test]
fn resolve_config_path_prefers_override() {
    let explicit = PathBuf::from("/tmp/custom/sdlocal.yaml");
    assert_eq!(resolve_config_path(Some(explicit.clone())).unwrap(), explicit);
}

#[test]
fn resolve_config_path_falls_back_to_default() {
    let expected = default_config_path().unwrap();
    assert_eq!(resolve_config_path(None).unwrap(), expected);
    assert_eq!(resolve_config_path(Some(PathBuf::new())).unwrap(), expected);
}

#[test]
fn open_config_creates_missing_parent_dirs() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("home").join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);

    let config = open_config(&path).expect("open config");

    assert!(path.is_file());
    assert_eq!(config.current(), "default");
}
