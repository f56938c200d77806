// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "data_dir = \"/var/lib/offreg\"\n\n[defaults]\nstate = \"GA\"\ncountry = \"USA\"\n",
    )
    .unwrap();

    let expected = Config {
        data_dir: Some(PathBuf::from("/var/lib/offreg")),
        defaults: FormDefaults {
            state: Some("GA".into()),
            country: Some("USA".into()),
        },
    };
    assert_eq!(Config::load(&path).unwrap(), expected);
}

#[test]
fn test_relative_data_dir_is_resolved_against_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "data_dir = \"queue\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.data_dir, Some(temp.path().join("queue")));
}

#[test]
fn test_defaults_section_is_optional() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[defaults]\nstate = \"GA\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.defaults.state.as_deref(), Some("GA"));
    assert_eq!(config.defaults.country, None);
    assert_eq!(config.data_dir, None);
}

#[test]
fn test_missing_file_is_default_only_when_optional() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    assert!(matches!(Config::load(&path), Err(Error::Config(_))));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "data_dir = [").unwrap();

    let err = Config::load_or_default(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_data_dir_layering() {
    let config = Config {
        data_dir: Some(PathBuf::from("/from/config")),
        ..Config::default()
    };
    let fallback = Some(PathBuf::from("/fallback"));

    assert_eq!(
        first_dir(
            Some("/flag".into()),
            Some("/env".into()),
            &config,
            fallback.clone()
        ),
        Some(PathBuf::from("/flag"))
    );
    assert_eq!(
        first_dir(None, Some("/env".into()), &config, fallback.clone()),
        Some(PathBuf::from("/env"))
    );
    assert_eq!(
        first_dir(None, None, &config, fallback.clone()),
        Some(PathBuf::from("/from/config"))
    );
    assert_eq!(
        first_dir(None, None, &Config::default(), fallback),
        Some(PathBuf::from("/fallback"))
    );
    assert_eq!(first_dir(None, None, &Config::default(), None), None);
}
