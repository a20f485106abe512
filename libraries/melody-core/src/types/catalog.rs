//! Ordered, validated track catalog

use crate::error::{CoreError, Result};
use crate::types::{Track, TrackId};
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Static track catalog
///
/// Loaded once at startup and never mutated. Construction guarantees:
/// - at least one track
/// - unique, positive ids
/// - finite, non-negative durations
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog from tracks in display order
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if track.id.get() == 0 {
                return Err(CoreError::invalid_track(track.id, "id must be positive"));
            }
            if !track.duration.is_finite() || track.duration < 0.0 {
                return Err(CoreError::invalid_track(
                    track.id,
                    format!("duration must be finite and >= 0, got {}", track.duration),
                ));
            }
            if !seen.insert(track.id) {
                return Err(CoreError::DuplicateTrackId(track.id));
            }
        }

        Ok(Self { tracks })
    }

    /// Parse a JSON array of tracks
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(json)?;
        Self::new(tracks)
    }

    /// Read a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The eight-track demo catalog shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks (always >= 1)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// First track in catalog order
    pub fn first(&self) -> &Track {
        &self.tracks[0]
    }

    /// Look up a track by id
    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Whether `id` exists in the catalog
    pub fn contains(&self, id: TrackId) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` in catalog order
    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Track at `index` in catalog order
    pub fn at(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Next id in catalog order, wrapping from last to first
    ///
    /// An unknown `id` is treated as sitting before the first entry.
    pub fn next_after(&self, id: TrackId) -> TrackId {
        let next = match self.index_of(id) {
            Some(i) => (i + 1) % self.tracks.len(),
            None => 0,
        };
        self.tracks[next].id
    }

    /// Previous id in catalog order, wrapping from first to last
    ///
    /// An unknown `id` is treated as sitting after the last entry.
    pub fn previous_before(&self, id: TrackId) -> TrackId {
        let last = self.tracks.len() - 1;
        let prev = match self.index_of(id) {
            Some(0) | None => last,
            Some(i) => i - 1,
        };
        self.tracks[prev].id
    }

    /// Ids of every track except `id`, in catalog order
    pub fn ids_except(&self, id: TrackId) -> Vec<TrackId> {
        self.tracks
            .iter()
            .map(|t| t.id)
            .filter(|&other| other != id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u32) -> Track {
        Track::new(TrackId::new(id), format!("Track {id}"), "Artist", 180.0)
    }

    fn catalog(ids: &[u32]) -> Catalog {
        Catalog::new(ids.iter().copied().map(track).collect()).unwrap()
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(Catalog::new(vec![]), Err(CoreError::EmptyCatalog)));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Catalog::new(vec![track(1), track(2), track(1)]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateTrackId(id) if id == TrackId::new(1)));
    }

    #[test]
    fn zero_id_rejected() {
        let err = Catalog::new(vec![track(0)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTrack { .. }));
    }

    #[test]
    fn bad_duration_rejected() {
        let mut t = track(1);
        t.duration = -1.0;
        assert!(Catalog::new(vec![t.clone()]).is_err());

        t.duration = f64::NAN;
        assert!(Catalog::new(vec![t]).is_err());
    }

    #[test]
    fn next_after_wraps() {
        let c = catalog(&[10, 20, 30]);
        assert_eq!(c.next_after(TrackId::new(10)), TrackId::new(20));
        assert_eq!(c.next_after(TrackId::new(30)), TrackId::new(10));
        assert_eq!(c.next_after(TrackId::new(99)), TrackId::new(10));
    }

    #[test]
    fn previous_before_wraps() {
        let c = catalog(&[10, 20, 30]);
        assert_eq!(c.previous_before(TrackId::new(20)), TrackId::new(10));
        assert_eq!(c.previous_before(TrackId::new(10)), TrackId::new(30));
        assert_eq!(c.previous_before(TrackId::new(99)), TrackId::new(30));
    }

    #[test]
    fn single_track_wraps_to_itself() {
        let c = catalog(&[5]);
        assert_eq!(c.next_after(TrackId::new(5)), TrackId::new(5));
        assert_eq!(c.previous_before(TrackId::new(5)), TrackId::new(5));
        assert!(c.ids_except(TrackId::new(5)).is_empty());
    }

    #[test]
    fn bundled_catalog_loads() {
        let c = Catalog::bundled().unwrap();
        assert_eq!(c.len(), 8);
        assert_eq!(c.first().title, "Electric Dreams");
        assert_eq!(c.get(TrackId::new(8)).unwrap().title, "Mountain Echo");
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = Catalog::from_json_str("not json").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"title":"A","artist":"B","album":"C","duration":10,
                "coverUrl":"","audioUrl":"a.mp3","accentColor":""}]"#,
        )
        .unwrap();

        let c = Catalog::from_path(&path).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.first().audio_url, "a.mp3");
    }
}
