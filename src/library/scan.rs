use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace, warn};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::config::{LibrarySettings, TraversalErrorPolicy};

use super::model::{AlbumKey, AlbumRecord, Index, SongRecord};
use super::names::{is_audio_file, is_hidden, normalize_name, song_title};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("the specified directory does not exist or is not a directory: '{}'", .0.display())]
    InvalidRoot(PathBuf),
    #[error("failed to list '{}': {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A directory entry with its name already normalized.
#[derive(Debug)]
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Albums in first-discovery order plus a key -> position lookup.
#[derive(Debug, Default)]
struct IndexBuilder {
    albums: Vec<AlbumRecord>,
    slots: HashMap<AlbumKey, usize>,
}

impl IndexBuilder {
    /// Position of the album for `key`, creating an empty record on first sight.
    fn slot(&mut self, key: AlbumKey) -> usize {
        if let Some(&i) = self.slots.get(&key) {
            return i;
        }
        let i = self.albums.len();
        self.albums.push(AlbumRecord::new(&key));
        self.slots.insert(key, i);
        i
    }

    fn add_song(&mut self, slot: usize, file_name: &str) {
        let album = &mut self.albums[slot];
        let song = SongRecord {
            id: Uuid::new_v4(),
            title: song_title(file_name),
            artist: album.artist.clone(),
            album: album.name.clone(),
            relative_path: format!("{}/{}/{}", album.artist, album.name, file_name),
        };
        trace!(path = %song.relative_path, id = %song.id, "song");
        album.songs.push(song);
    }

    fn finish(self) -> Index {
        Index {
            albums: self.albums,
        }
    }
}

/// List the immediate children of `dir`.
///
/// Only a failure to read `dir` itself is returned; entries that cannot be
/// stat'ed (e.g. dangling symlinks) are logged and left out.
fn list_children(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Child>, walkdir::Error> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links);

    let mut children = Vec::new();
    for entry in walker {
        match entry {
            Ok(e) => children.push(Child {
                name: normalize_name(e.file_name()),
                path: e.path().to_path_buf(),
                is_dir: e.file_type().is_dir(),
            }),
            Err(err) if err.depth() > 0 => {
                debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
            }
            Err(err) => return Err(err),
        }
    }

    if settings.sort_entries {
        children.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(children)
}

/// `list_children` with the configured error policy applied.
/// `Ok(None)` means the directory was skipped.
fn list_or_skip(dir: &Path, settings: &LibrarySettings) -> Result<Option<Vec<Child>>, ScanError> {
    match list_children(dir, settings) {
        Ok(children) => Ok(Some(children)),
        Err(source) => match settings.on_error {
            TraversalErrorPolicy::Abort => Err(ScanError::Traversal {
                path: dir.to_path_buf(),
                source,
            }),
            TraversalErrorPolicy::Skip => {
                warn!(path = %dir.display(), error = %source, "skipping unreadable directory");
                Ok(None)
            }
        },
    }
}

fn visible_dirs(children: Vec<Child>, settings: &LibrarySettings) -> impl Iterator<Item = Child> {
    children
        .into_iter()
        .filter(move |c| c.is_dir && !is_hidden(&c.name, settings))
}

/// Walk `root/<artist>/<album>/<file>` and collect every audio file into an [`Index`].
///
/// Artist and album names are NFC-normalized before they are used as the
/// album key, so directories that differ only in accent encoding merge into
/// one album. Failing to list the root always aborts; failures below it
/// follow `settings.on_error`.
pub fn build_index(root: &Path, settings: &LibrarySettings) -> Result<Index, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::InvalidRoot(root.to_path_buf()));
    }

    let suffixes = settings.audio_suffixes();
    let mut builder = IndexBuilder::default();

    let artists = list_children(root, settings).map_err(|source| ScanError::Traversal {
        path: root.to_path_buf(),
        source,
    })?;

    for artist in visible_dirs(artists, settings) {
        debug!(artist = %artist.name, "scanning artist");
        let Some(albums) = list_or_skip(&artist.path, settings)? else {
            continue;
        };

        for album in visible_dirs(albums, settings) {
            let Some(files) = list_or_skip(&album.path, settings)? else {
                continue;
            };

            let slot = builder.slot(AlbumKey {
                artist: artist.name.clone(),
                album: album.name.clone(),
            });

            let mut added = 0usize;
            for file in files {
                if file.is_dir
                    || (settings.skip_hidden_files && is_hidden(&file.name, settings))
                    || !is_audio_file(&file.name, &suffixes)
                {
                    continue;
                }
                builder.add_song(slot, &file.name);
                added += 1;
            }
            debug!(artist = %artist.name, album = %album.name, songs = added, "scanned album");
        }
    }

    Ok(builder.finish())
}
