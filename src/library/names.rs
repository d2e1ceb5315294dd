use std::ffi::OsStr;

use unicode_normalization::UnicodeNormalization;

use crate::config::LibrarySettings;

/// Canonical composed (NFC) form of a file or directory name.
///
/// Names that are not valid UTF-8 are converted lossily first.
pub fn normalize_name(raw: &OsStr) -> String {
    raw.to_string_lossy().nfc().collect()
}

/// File name without its final extension.
///
/// Leading dots never start an extension, so `.mp3` and `..mp3` are kept whole.
pub fn song_title(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if !file_name[..dot].trim_start_matches('.').is_empty() => {
            file_name[..dot].to_string()
        }
        _ => file_name.to_string(),
    }
}

pub fn is_hidden(name: &str, settings: &LibrarySettings) -> bool {
    name.starts_with(settings.hidden_prefix.as_str())
}

/// Case-insensitive suffix match against the configured extensions.
pub fn is_audio_file(name: &str, suffixes: &[String]) -> bool {
    let lower = name.to_lowercase();
    suffixes.iter().any(|s| lower.ends_with(s.as_str()))
}
