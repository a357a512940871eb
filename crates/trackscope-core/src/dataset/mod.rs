//! Reference dataset: the immutable table of tracks loaded at startup

mod loader;

pub use loader::{is_missing, LoadStats, NA_TOKENS};

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackscopeError};
use crate::track::{AudioColumn, Track};

/// Deduplicated, NA-free table of tracks in file order
#[derive(Debug, Clone)]
pub struct Dataset {
    source: Option<PathBuf>,
    tracks: Vec<Track>,
    columns: BTreeSet<AudioColumn>,
    has_artists: bool,
    stats: LoadStats,
}

impl Dataset {
    /// Load a dataset from a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        loader::load_csv(path)
    }

    /// Build a dataset from in-memory tracks.
    ///
    /// Available columns are those present on every track. Tracks sharing
    /// (name, artists) are collapsed onto the first occurrence.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let columns = tracks
            .iter()
            .map(|track| track.attributes().map(|(c, _)| c).collect::<BTreeSet<_>>())
            .reduce(|acc, cols| acc.intersection(&cols).copied().collect())
            .unwrap_or_default();
        let has_artists = !tracks.is_empty() && tracks.iter().all(|t| t.artists.is_some());

        Dataset::assemble(None, tracks, columns, has_artists)
    }

    fn assemble(
        source: Option<PathBuf>,
        tracks: Vec<Track>,
        columns: BTreeSet<AudioColumn>,
        has_artists: bool,
    ) -> Self {
        let tracks = if has_artists {
            dedup_first(tracks)
        } else {
            tracks
        };

        Dataset {
            source,
            tracks,
            columns,
            has_artists,
            stats: LoadStats::default(),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Raw audio columns available on every track
    pub fn columns(&self) -> &BTreeSet<AudioColumn> {
        &self.columns
    }

    /// Row accounting from the CSV load (zeroed for in-memory datasets)
    pub fn load_stats(&self) -> LoadStats {
        self.stats
    }

    pub fn has_artists(&self) -> bool {
        self.has_artists
    }

    pub fn has_genre(&self) -> bool {
        !self.tracks.is_empty() && self.tracks.iter().all(|t| t.genre.is_some())
    }

    /// Find the first track carrying this display label
    pub fn find_by_label(&self, label: &str) -> Result<(usize, &Track)> {
        self.tracks
            .iter()
            .enumerate()
            .find(|(_, track)| track.label == label)
            .ok_or_else(|| TrackscopeError::TrackNotFound {
                label: label.to_string(),
            })
    }

    /// Unique display labels in dataset order
    pub fn labels(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tracks
            .iter()
            .map(|track| track.label.as_str())
            .filter(|label| seen.insert(*label))
            .collect()
    }

    /// Unique labels containing `query`, case-insensitively
    pub fn search_labels(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.labels()
            .into_iter()
            .filter(|label| label.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Keep the first track of each (name, artists) pair, preserving order
fn dedup_first(tracks: Vec<Track>) -> Vec<Track> {
    let mut seen: HashSet<(String, Option<String>)> = HashSet::new();
    tracks
        .into_iter()
        .filter(|track| seen.insert((track.name.clone(), track.artists.clone())))
        .collect()
}
