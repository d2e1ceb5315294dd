use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;

use crate::test_helpers::{EnvGuard, env_lock};

fn clear_overrides() -> Vec<EnvGuard> {
    vec![
        EnvGuard::remove("MUSIC_INDEX__LIBRARY__ROOT"),
        EnvGuard::remove("MUSIC_INDEX__LIBRARY__EXTENSIONS"),
        EnvGuard::remove("MUSIC_INDEX__LIBRARY__SORT_ENTRIES"),
        EnvGuard::remove("MUSIC_INDEX__OUTPUT__INDENT"),
    ]
}

#[test]
fn defaults_match_the_stock_layout() {
    let s = Settings::default();
    assert_eq!(s.library.root, PathBuf::from("./Music"));
    assert_eq!(s.library.extensions, vec!["mp3", "m4a", "flac", "wav"]);
    assert_eq!(s.library.hidden_prefix, ".");
    assert!(!s.library.skip_hidden_files);
    assert!(s.library.follow_links);
    assert!(!s.library.sort_entries);
    assert_eq!(s.library.on_error, TraversalErrorPolicy::Abort);
    assert_eq!(s.output.file_name, "index.json");
    assert!(s.output.atomic);
    assert_eq!(s.output.indent, 4);
    assert_eq!(s.output_path(), PathBuf::from("./Music").join("index.json"));
    assert!(s.validate().is_ok());
}

#[test]
fn audio_suffixes_normalize_dots_and_case() {
    let lib = LibrarySettings {
        extensions: vec![".MP3".into(), " flac ".into(), "".into()],
        ..LibrarySettings::default()
    };
    assert_eq!(lib.audio_suffixes(), vec![".mp3", ".flac"]);
}

#[test]
fn output_path_prefers_explicit_path() {
    let mut s = Settings::default();
    s.output.path = Some(PathBuf::from("/tmp/elsewhere.json"));
    assert_eq!(s.output_path(), PathBuf::from("/tmp/elsewhere.json"));
}

#[test]
fn validate_rejects_bad_values() {
    let mut s = Settings::default();
    s.library.extensions.clear();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions.push("  ".into());
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.hidden_prefix.clear();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.output.file_name = "sub/index.json".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.output.file_name = "   ".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.output.indent = 64;
    assert!(s.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_explicit_env_var() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MUSIC_INDEX_CONFIG_PATH", "/tmp/music-index-test.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/music-index-test.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        PathBuf::from("/tmp/xdg-config-home")
            .join("music-index")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("music-index")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_and_parse_policy_aliases() {
    let _lock = env_lock();
    let _env = clear_overrides();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
root = "/srv/music"
extensions = ["ogg", "opus"]
hidden_prefix = "_"
skip_hidden_files = true
follow_links = false
sort_entries = true
on_error = "continue"

[output]
file_name = "catalog.json"
atomic = false
indent = 2
"#,
    )
    .unwrap();

    let s = Settings::load_from(Some(cfg_path.as_path())).unwrap();
    assert_eq!(s.library.root, PathBuf::from("/srv/music"));
    assert_eq!(s.library.extensions, vec!["ogg", "opus"]);
    assert_eq!(s.library.hidden_prefix, "_");
    assert!(s.library.skip_hidden_files);
    assert!(!s.library.follow_links);
    assert!(s.library.sort_entries);
    assert_eq!(s.library.on_error, TraversalErrorPolicy::Skip);
    assert_eq!(s.output.file_name, "catalog.json");
    assert!(!s.output.atomic);
    assert_eq!(s.output.indent, 2);
    assert_eq!(s.output_path(), PathBuf::from("/srv/music/catalog.json"));
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let _env = clear_overrides();

    let dir = tempfile::tempdir().unwrap();
    let s = Settings::load_from(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(s.library.root, PathBuf::from("./Music"));
    assert_eq!(s.output.file_name, "index.json");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();
    let _env = clear_overrides();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
root = "/from/file"

[output]
indent = 8
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MUSIC_INDEX__LIBRARY__ROOT", "/from/env");
    let _g2 = EnvGuard::set("MUSIC_INDEX__OUTPUT__INDENT", "0");
    let _g3 = EnvGuard::set("MUSIC_INDEX__LIBRARY__EXTENSIONS", "mp3,aac");

    let s = Settings::load_from(Some(cfg_path.as_path())).unwrap();
    assert_eq!(s.library.root, PathBuf::from("/from/env"));
    assert_eq!(s.output.indent, 0);
    assert_eq!(s.library.extensions, vec!["mp3", "aac"]);
}
