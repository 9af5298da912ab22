use bpmlist::playlist::PlaylistInfo;
use bpmlist::types::Track;
use bpmlist::utils::*;
use chrono::{TimeZone, Utc};

// Helper function to create a test track
fn create_test_track(id: &str, song: &str, artist: &str, album: &str, bpm: f64) -> Track {
    Track {
        spotify_id: id.to_string(),
        song_name: song.to_string(),
        artist: artist.to_string(),
        album_name: album.to_string(),
        bpm,
        key: 9,
        mode: 0,
        danceability: 0.7,
        energy: 0.834,
        image_url: format!("https://i.scdn.co/image/{id}"),
        preview_url: None,
    }
}

// Helper function to create playlist info updated at the given day of March 2024
fn create_test_info(name: &str, day: u32) -> PlaylistInfo {
    let at = Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap();
    PlaylistInfo::create_at("userid", name, "", at)
}

#[test]
fn test_new_id() {
    let id = new_id();

    // Should be a hyphenated uuid
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);

    // Two generated ids should be different
    assert_ne!(id, new_id());
}

#[test]
fn test_is_valid_order() {
    assert!(is_valid_order(1, 3));
    assert!(is_valid_order(3, 3));

    // Positions are 1-based
    assert!(!is_valid_order(0, 3));
    assert!(!is_valid_order(4, 3));

    // Nothing is valid in an empty playlist
    assert!(!is_valid_order(0, 0));
    assert!(!is_valid_order(1, 0));
}

#[test]
fn test_key_name() {
    assert_eq!(key_name(0, 1), "C major");
    assert_eq!(key_name(9, 0), "A minor");
    assert_eq!(key_name(1, 1), "C# major");
    assert_eq!(key_name(11, 0), "B minor");

    // Undetected key
    assert_eq!(key_name(-1, 1), "-");
    // Out of range key
    assert_eq!(key_name(12, 1), "-");
    // Unknown mode keeps the pitch only
    assert_eq!(key_name(7, 5), "G");
}

#[test]
fn test_sort_playlist_infos() {
    let mut infos = vec![
        create_test_info("Warmup", 1),
        create_test_info("tempo run", 3),
        create_test_info("Cooldown", 2),
        create_test_info("Intervals", 3), // Same day, different name
    ];

    sort_playlist_infos(&mut infos);

    // Should be sorted by update time descending, then by name ascending ignoring case
    let names: Vec<&str> = infos.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Intervals", "tempo run", "Cooldown", "Warmup"]);
}

#[test]
fn test_filter_tracks() {
    let mut tracks = vec![
        create_test_track("id1", "Blinding Lights", "The Weeknd", "After Hours", 171.0),
        create_test_track("id2", "Levitating", "Dua Lipa", "Future Nostalgia", 103.0),
        create_test_track("id3", "Save Your Tears", "The Weeknd", "After Hours", 118.0),
    ];

    // Artist match, case-insensitive
    let mut by_artist = tracks.clone();
    filter_tracks(&mut by_artist, "weeknd");
    let ids: Vec<&str> = by_artist.iter().map(|t| t.spotify_id.as_str()).collect();
    assert_eq!(ids, vec!["id1", "id3"]);

    // Album match
    let mut by_album = tracks.clone();
    filter_tracks(&mut by_album, "NOSTALGIA");
    assert_eq!(by_album.len(), 1);
    assert_eq!(by_album[0].spotify_id, "id2");

    // No match
    filter_tracks(&mut tracks, "metallica");
    assert!(tracks.is_empty());
}

#[test]
fn test_track_rows() {
    let tracks = vec![create_test_track("id1", "Song", "Artist", "Album", 127.6)];

    let rows = track_rows(&tracks);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].spotify_id, "id1");
    assert_eq!(rows[0].bpm, "128");
    assert_eq!(rows[0].key, "A minor");
    assert_eq!(rows[0].energy, "0.83");
}

#[test]
fn test_playlist_info_rows() {
    let infos = vec![create_test_info("Warmup", 1)];

    let rows = playlist_info_rows(&infos);

    assert_eq!(rows[0].name, "Warmup");
    assert_eq!(rows[0].tracks, 0);
    assert_eq!(rows[0].updated, "2024-03-01 10:00");
}
