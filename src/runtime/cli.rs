use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::Settings;

/// Command-line overrides. Anything left unset comes from config/env/defaults.
#[derive(Debug, Default, Parser)]
#[command(name = "music-index", version)]
#[command(about = "Write an index.json describing every album under a music folder")]
#[command(long_about = "\
Write an index.json describing every album under a music folder

Expected layout:

  Music/
  ├── index.json            # written here (replaced on every run)
  ├── Café Tacvba/          # artist
  │   └── Re/               # album
  │       ├── 01 - El Borrego.mp3
  │       └── 02 - El Fin.mp3
  └── .trash/               # hidden, ignored

Recognized audio: .mp3 .m4a .flac .wav (configurable).")]
pub struct Cli {
    /// Music root (defaults to library.root, `./Music`)
    pub root: Option<PathBuf>,

    /// Config file to read instead of the XDG default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write the index (defaults to `<root>/index.json`)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Sort entries by name for reproducible output
    #[arg(long)]
    pub sort: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply the flags that were given on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(root) = &self.root {
            settings.library.root = root.clone();
        }
        if let Some(output) = &self.output {
            settings.output.path = Some(output.clone());
        }
        if self.sort {
            settings.library.sort_entries = true;
        }
    }
}
