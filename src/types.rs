use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A catalog track together with its audio features.
///
/// Treated as an opaque value: playlists embed it and pass it through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub spotify_id: String,
    pub song_name: String,
    pub artist: String,
    pub album_name: String,
    pub bpm: f64,
    pub key: i32,
    pub mode: i32,
    pub danceability: f64,
    pub energy: f64,
    pub image_url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Tabled)]
pub struct PlaylistInfoTableRow {
    pub id: String,
    pub name: String,
    pub tracks: usize,
    pub updated: String,
}

#[derive(Tabled)]
pub struct PlaylistTrackTableRow {
    pub order: usize,
    pub id: String,
    pub song: String,
    pub artist: String,
    pub bpm: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub spotify_id: String,
    pub song: String,
    pub artist: String,
    pub bpm: String,
    pub key: String,
    pub energy: String,
}
