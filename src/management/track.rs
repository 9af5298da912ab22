use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::StoreError;
use crate::{catalog::TrackLookup, config, types::Track};

/// Local catalog of tracks that can be put into playlists.
pub struct TrackManager {
    path: PathBuf,
    tracks: Vec<Track>,
}

impl TrackManager {
    pub fn new(path: PathBuf, tracks: Option<Vec<Track>>) -> Self {
        Self {
            path,
            tracks: tracks.unwrap_or_default(),
        }
    }

    pub async fn load() -> Result<Self, StoreError> {
        Self::load_from(Self::cache_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, StoreError> {
        let tracks = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no track cache yet");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, tracks })
    }

    /// Reads a JSON array of tracks, e.g. an export from the metadata API.
    pub async fn read_import(path: &Path) -> Result<Vec<Track>, StoreError> {
        let content = async_fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.tracks)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Upserts by `spotify_id`. Returns how many tracks were new.
    pub fn add_tracks(&mut self, tracks: Vec<Track>) -> usize {
        let mut added = 0;
        for track in tracks {
            match self
                .tracks
                .iter_mut()
                .find(|t| t.spotify_id == track.spotify_id)
            {
                Some(existing) => *existing = track,
                None => {
                    self.tracks.push(track);
                    added += 1;
                }
            }
        }
        added
    }

    pub fn get_tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn cache_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/tracks.json");
        path
    }
}

impl TrackLookup for TrackManager {
    fn lookup_track_by_id(&self, spotify_id: &str) -> Option<Track> {
        self.tracks
            .iter()
            .find(|t| t.spotify_id == spotify_id)
            .cloned()
    }
}
