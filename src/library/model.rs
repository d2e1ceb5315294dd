use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One playable file, described purely from its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRecord {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// `artist/album/file`, forward slashes, normalized components.
    pub relative_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub name: String,
    pub artist: String,
    pub songs: Vec<SongRecord>,
}

impl AlbumRecord {
    pub fn new(key: &AlbumKey) -> Self {
        Self {
            name: key.album.clone(),
            artist: key.artist.clone(),
            songs: Vec::new(),
        }
    }
}

/// Album identity: normalized artist and album names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumKey {
    pub artist: String,
    pub album: String,
}

/// The catalog: albums in first-discovery order. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    pub albums: Vec<AlbumRecord>,
}

impl Index {
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn song_count(&self) -> usize {
        self.songs().count()
    }

    pub fn songs(&self) -> impl Iterator<Item = &SongRecord> {
        self.albums.iter().flat_map(|a| a.songs.iter())
    }
}
