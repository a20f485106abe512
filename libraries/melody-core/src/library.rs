//! Library views
//!
//! Read-only queries over the catalog used by the search, library and
//! favorites screens. Nothing here touches player state.

use crate::types::{Catalog, FavoriteSet, Track};
use serde::Serialize;

/// Album summary for the library "Albums" tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary<'a> {
    /// Album name
    pub name: &'a str,
    /// Cover of the first track on the album
    pub cover_url: &'a str,
    /// Artist of the first track on the album
    pub artist: &'a str,
    /// Number of catalog tracks on the album
    pub track_count: usize,
}

/// Artist entry for the library "Artists" tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummary<'a> {
    /// Artist name
    pub name: &'a str,
    /// Tracks by this artist, in catalog order
    pub tracks: Vec<&'a Track>,
}

/// Case-insensitive substring search over title, artist and album
///
/// A blank query returns the whole catalog in order.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Track> {
    let query = query.trim();
    if query.is_empty() {
        return catalog.tracks().iter().collect();
    }

    let query = query.to_lowercase();
    catalog
        .tracks()
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&query)
                || t.artist.to_lowercase().contains(&query)
                || t.album.to_lowercase().contains(&query)
        })
        .collect()
}

/// Unique albums in first-appearance order
pub fn albums(catalog: &Catalog) -> Vec<AlbumSummary<'_>> {
    let mut result: Vec<AlbumSummary<'_>> = Vec::new();

    for track in catalog.tracks() {
        match result.iter_mut().find(|a| a.name == track.album) {
            Some(album) => album.track_count += 1,
            None => result.push(AlbumSummary {
                name: &track.album,
                cover_url: &track.cover_url,
                artist: &track.artist,
                track_count: 1,
            }),
        }
    }

    result
}

/// Unique artists in first-appearance order, each with their tracks
pub fn artists(catalog: &Catalog) -> Vec<ArtistSummary<'_>> {
    let mut result: Vec<ArtistSummary<'_>> = Vec::new();

    for track in catalog.tracks() {
        match result.iter_mut().find(|a| a.name == track.artist) {
            Some(artist) => artist.tracks.push(track),
            None => result.push(ArtistSummary {
                name: &track.artist,
                tracks: vec![track],
            }),
        }
    }

    result
}

/// Favorite tracks in catalog order
///
/// Ids no longer present in the catalog are skipped.
pub fn favorite_tracks<'a>(catalog: &'a Catalog, favorites: &FavoriteSet) -> Vec<&'a Track> {
    catalog
        .tracks()
        .iter()
        .filter(|t| favorites.contains(&t.id))
        .collect()
}
