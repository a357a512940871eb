//! CSV reading for the reference dataset

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use csv::StringRecord;
use tracing::debug;

use super::Dataset;
use crate::error::{Result, TrackscopeError};
use crate::trace_time;
use crate::track::{AudioColumn, Track, ARTISTS_COLUMN, GENRE_COLUMN, NAME_COLUMN};

/// Field values read as missing (pandas' default NA markers)
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw CSV field counts as a missing value
pub fn is_missing(field: &str) -> bool {
    NA_TOKENS.contains(&field)
}

/// Row accounting for one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub dropped_missing: usize,
    pub dropped_duplicates: usize,
}

/// Header positions of the columns the loader understands
struct Layout {
    name: usize,
    artists: Option<usize>,
    genre: Option<usize>,
    audio: Vec<(AudioColumn, usize)>,
}

impl Layout {
    fn from_headers(path: &Path, headers: &StringRecord) -> Result<Self> {
        let find = |wanted: &str| headers.iter().position(|h| h.trim() == wanted);

        let name = find(NAME_COLUMN).ok_or_else(|| TrackscopeError::DatasetSchemaError {
            path: path.to_path_buf(),
            missing: vec![NAME_COLUMN.to_string()],
        })?;

        let audio = AudioColumn::ALL
            .into_iter()
            .filter_map(|column| find(column.name()).map(|idx| (column, idx)))
            .collect();

        Ok(Layout {
            name,
            artists: find(ARTISTS_COLUMN),
            genre: find(GENRE_COLUMN),
            audio,
        })
    }

    fn columns(&self) -> BTreeSet<AudioColumn> {
        self.audio.iter().map(|(column, _)| *column).collect()
    }
}

#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub(super) fn load_csv(path: &Path) -> Result<Dataset> {
    let start = Instant::now();

    if !path.is_file() {
        return Err(TrackscopeError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    // short rows are dropped below rather than failing the whole read
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let layout = Layout::from_headers(path, &headers)?;

    let mut stats = LoadStats::default();
    let mut tracks = Vec::new();

    for record in reader.records() {
        let record = record?;
        stats.rows_read += 1;

        if record.len() < headers.len() || record.iter().any(is_missing) {
            stats.dropped_missing += 1;
            continue;
        }

        tracks.push(parse_track(&layout, &record)?);
    }

    let before_dedup = tracks.len();
    let mut dataset = Dataset::assemble(
        Some(path.to_path_buf()),
        tracks,
        layout.columns(),
        layout.artists.is_some(),
    );
    stats.dropped_duplicates = before_dedup - dataset.len();
    dataset.stats = stats;

    debug!(
        rows_read = stats.rows_read,
        dropped_missing = stats.dropped_missing,
        dropped_duplicates = stats.dropped_duplicates,
        tracks = dataset.len(),
        columns = layout.audio.len(),
        "load_dataset"
    );
    trace_time!(start, "load_dataset");

    Ok(dataset)
}

fn parse_track(layout: &Layout, record: &StringRecord) -> Result<Track> {
    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let mut track = Track::new(
        field(layout.name),
        layout.artists.map(|idx| field(idx).to_string()),
    );
    if let Some(idx) = layout.genre {
        track.genre = Some(field(idx).to_string());
    }

    for (column, idx) in &layout.audio {
        let raw = field(*idx);
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| TrackscopeError::InvalidDatasetValue {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                column: column.name().to_string(),
                value: raw.to_string(),
            })?;
        track.set_attribute(*column, value);
    }

    Ok(track)
}
