use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/music-index/config.toml` or `~/.config/music-index/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line overrides (applied by the runtime after loading)
/// 2) Environment variables (prefix `MUSIC_INDEX__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Root of the artist/album/track tree.
    pub root: PathBuf,
    /// File extensions to treat as audio (case-insensitive, leading dot optional).
    pub extensions: Vec<String>,
    /// Name prefix marking hidden artist and album directories.
    pub hidden_prefix: String,
    /// Also drop audio files whose name starts with `hidden_prefix`.
    pub skip_hidden_files: bool,
    /// Whether directory checks follow symlinks.
    pub follow_links: bool,
    /// Sort every listing by normalized name instead of using raw listing order.
    pub sort_entries: bool,
    /// What to do when an artist or album directory cannot be listed.
    pub on_error: TraversalErrorPolicy,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./Music"),
            extensions: vec!["mp3".into(), "m4a".into(), "flac".into(), "wav".into()],
            hidden_prefix: ".".to_string(),
            skip_hidden_files: false,
            follow_links: true,
            sort_entries: false,
            on_error: TraversalErrorPolicy::Abort,
        }
    }
}

impl LibrarySettings {
    /// Lowercased `.ext` suffixes built from `extensions`, blanks dropped.
    pub fn audio_suffixes(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{e}"))
            .collect()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalErrorPolicy {
    /// Any listing failure ends the run without writing an index.
    #[serde(alias = "fail", alias = "stop")]
    Abort,
    /// Log a warning, leave the directory out and keep scanning.
    #[serde(alias = "warn", alias = "continue")]
    Skip,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Name of the index file written inside the library root.
    pub file_name: String,
    /// Explicit output location; overrides `root/file_name` when set.
    pub path: Option<PathBuf>,
    /// Write through a temporary file and rename it into place.
    pub atomic: bool,
    /// Spaces per indentation level in the JSON output.
    pub indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            file_name: "index.json".to_string(),
            path: None,
            atomic: true,
            indent: 4,
        }
    }
}

impl Settings {
    /// Where the index ends up for the current settings.
    pub fn output_path(&self) -> PathBuf {
        match &self.output.path {
            Some(p) => p.clone(),
            None => self.library.root.join(&self.output.file_name),
        }
    }
}
