use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::library::{ScanError, WriteError, build_index, write_index};

mod cli;
mod logging;
mod settings;

pub use cli::Cli;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub albums: usize,
    pub songs: usize,
}

/// Scan the configured root and write its index. Nothing is written if the scan fails.
pub fn index_library(settings: &Settings) -> Result<Summary, RunError> {
    let index = build_index(&settings.library.root, &settings.library)?;

    let output = settings.output_path();
    write_index(&index, &output, &settings.output)?;

    let summary = Summary {
        output,
        albums: index.album_count(),
        songs: index.song_count(),
    };
    info!(
        output = %summary.output.display(),
        albums = summary.albums,
        songs = summary.songs,
        "index written"
    );
    Ok(summary)
}

pub fn run(cli: Cli) -> ExitCode {
    match execute(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Full run with console messages. Errors are reported before being returned.
fn execute(cli: Cli) -> Result<Summary, RunError> {
    logging::init(cli.verbose);
    let settings = settings::load_settings(&cli);
    let root = &settings.library.root;

    if !root.is_dir() {
        println!(
            "Error: The specified directory does not exist: '{}'",
            root.display()
        );
        println!("Please create it and place your music inside, or point library.root at it.");
        return Err(ScanError::InvalidRoot(root.clone()).into());
    }

    println!("Starting scan in: {}", root.display());

    match index_library(&settings) {
        Ok(summary) => {
            let name = summary
                .output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| summary.output.display().to_string());
            println!(
                "Successfully created '{}' with {} albums.",
                name, summary.albums
            );
            Ok(summary)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Err(e)
        }
    }
}
