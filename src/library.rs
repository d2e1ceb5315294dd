//! Library scanning: walks `root/<artist>/<album>/<file>` into an [`Index`]
//! and reads/writes that index as JSON.

mod model;
mod names;
mod output;
mod scan;

pub use model::{AlbumKey, AlbumRecord, Index, SongRecord};
pub use names::normalize_name;
pub use output::{ReadError, WriteError, read_index, serialize, write_index};
pub use scan::{ScanError, build_index};
