use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

/// Maximum accepted `output.indent`.
const MAX_INDENT: usize = 16;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `MUSIC_INDEX__`) override it, and falls back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings using `config_path` as the file source (if any).
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MUSIC_INDEX")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("library.extensions"),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.library.extensions.is_empty() {
            return Err("library.extensions must list at least one extension".to_string());
        }
        if self.library.audio_suffixes().len() != self.library.extensions.len() {
            return Err("library.extensions must not contain blank entries".to_string());
        }
        if self.library.hidden_prefix.is_empty() {
            return Err("library.hidden_prefix must not be empty".to_string());
        }
        let name = self.output.file_name.trim();
        if name.is_empty() {
            return Err("output.file_name must not be empty".to_string());
        }
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            return Err(format!(
                "output.file_name must be a bare file name, got {name:?}"
            ));
        }
        if self.output.indent > MAX_INDENT {
            return Err(format!("output.indent must be <= {MAX_INDENT}"));
        }
        Ok(())
    }
}

/// Resolve the config path from `MUSIC_INDEX_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MUSIC_INDEX_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/music-index/config.toml`
/// or `~/.config/music-index/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("music-index").join("config.toml"))
}
