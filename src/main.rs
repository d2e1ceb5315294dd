use std::process::ExitCode;

use clap::Parser;
use music_index::runtime::{self, Cli};

fn main() -> ExitCode {
    runtime::run(Cli::parse())
}
