use std::cmp::Ordering;

use uuid::Uuid;

use crate::{
    playlist::{PlaylistInfo, PlaylistTrack},
    types::{PlaylistInfoTableRow, PlaylistTrackTableRow, Track, TrackTableRow},
};

const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Positions are 1-based, so `0` is never valid.
pub fn is_valid_order(order: usize, num_tracks: usize) -> bool {
    (1..=num_tracks).contains(&order)
}

/// Pitch class notation for an audio-features `key`/`mode` pair.
///
/// `key` is `0..=11` starting at C, `-1` when no key was detected.
/// `mode` is `1` for major and `0` for minor.
pub fn key_name(key: i32, mode: i32) -> String {
    let Some(pitch) = usize::try_from(key)
        .ok()
        .and_then(|k| PITCH_CLASSES.get(k))
    else {
        return "-".to_string();
    };

    match mode {
        1 => format!("{pitch} major"),
        0 => format!("{pitch} minor"),
        _ => pitch.to_string(),
    }
}

pub fn sort_playlist_infos(infos: &mut Vec<PlaylistInfo>) {
    infos.sort_by(|a, b| match b.updated_at.cmp(&a.updated_at) {
        Ordering::Equal => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        other => other,
    });
}

/// Keeps tracks whose song, artist or album contains `term`, ignoring case.
pub fn filter_tracks(tracks: &mut Vec<Track>, term: &str) {
    let term = term.to_lowercase();
    tracks.retain(|t| {
        t.song_name.to_lowercase().contains(&term)
            || t.artist.to_lowercase().contains(&term)
            || t.album_name.to_lowercase().contains(&term)
    });
}

pub fn playlist_info_rows(infos: &[PlaylistInfo]) -> Vec<PlaylistInfoTableRow> {
    infos
        .iter()
        .map(|info| PlaylistInfoTableRow {
            id: info.id.clone(),
            name: info.name.clone(),
            tracks: info.num_tracks,
            updated: info.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect()
}

pub fn playlist_track_rows(playlist_tracks: &[PlaylistTrack]) -> Vec<PlaylistTrackTableRow> {
    playlist_tracks
        .iter()
        .map(|pt| PlaylistTrackTableRow {
            order: pt.order,
            id: pt.id.clone(),
            song: pt.track.song_name.clone(),
            artist: pt.track.artist.clone(),
            bpm: format!("{:.0}", pt.track.bpm),
        })
        .collect()
}

pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            spotify_id: t.spotify_id.clone(),
            song: t.song_name.clone(),
            artist: t.artist.clone(),
            bpm: format!("{:.0}", t.bpm),
            key: key_name(t.key, t.mode),
            energy: format!("{:.2}", t.energy),
        })
        .collect()
}
