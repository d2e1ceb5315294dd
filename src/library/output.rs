use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::OutputSettings;

use super::model::Index;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("error writing to file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error moving index into place at '{}': {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid index JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pretty-print `index` as UTF-8 JSON with `indent` spaces per level.
/// Non-ASCII text is written as-is.
pub fn serialize(index: &Index, indent: usize) -> Result<Vec<u8>, serde_json::Error> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    index.serialize(&mut ser)?;
    Ok(buf)
}

/// Serialize `index` and write it to `path`, replacing any previous file.
///
/// With `settings.atomic` the bytes go to a temporary file next to `path`
/// that is renamed over it, so readers never see a partial index.
pub fn write_index(index: &Index, path: &Path, settings: &OutputSettings) -> Result<(), WriteError> {
    let bytes = serialize(index, settings.indent)?;
    let io_err = |source: io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if settings.atomic {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(&bytes).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(io_err)?;
        }
        tmp.persist(path).map_err(|source| WriteError::Persist {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        let file = File::create(path).map_err(io_err)?;
        let mut w = BufWriter::new(file);
        w.write_all(&bytes).map_err(io_err)?;
        w.flush().map_err(io_err)?;
    }
    Ok(())
}

/// Load an index previously produced by [`write_index`].
pub fn read_index(path: &Path) -> Result<Index, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}
