use crate::types::Track;

/// Resolves catalog tracks by their external id.
///
/// Callers look a track up before handing it to [`crate::playlist::Playlist::add`];
/// the playlist itself never performs lookups.
pub trait TrackLookup {
    /// Returns `None` when the catalog does not know `spotify_id`.
    fn lookup_track_by_id(&self, spotify_id: &str) -> Option<Track>;
}
