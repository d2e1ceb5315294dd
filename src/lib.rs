//! # music-index
//!
//! Builds a flat JSON catalog of a music folder laid out as
//! `root/<artist>/<album>/<track>`, so a separate player can list and stream
//! files without walking the filesystem itself.
//!
//! | Module | Role |
//! |--------|------|
//! | [`library`] | Traversal, name normalization, the album/song model and JSON I/O |
//! | [`config`] | Layered settings: defaults, `config.toml`, `MUSIC_INDEX__*` env vars |
//! | [`runtime`] | CLI parsing, logging setup and the end-to-end run |
//!
//! Names are NFC-normalized before use, so an artist folder spelled with a
//! combining accent and one spelled with a precomposed character end up as
//! the same album. Song IDs are random UUIDs and change on every run.

pub mod config;
pub mod library;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_helpers;
