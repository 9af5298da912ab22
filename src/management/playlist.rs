use std::{io::ErrorKind, path::PathBuf};

use tracing::{debug, info};

use super::StoreError;
use crate::{
    catalog::TrackLookup,
    config,
    playlist::{Playlist, PlaylistInfo, PlaylistTrack},
    utils,
};

/// Keeps every stored playlist snapshot and applies owner-checked edits.
///
/// Edits only change the in-memory snapshots; call [`PlaylistManager::persist`]
/// to write them back.
pub struct PlaylistManager {
    path: PathBuf,
    playlists: Vec<Playlist>,
    max_tracks: usize,
}

impl PlaylistManager {
    pub fn new(path: PathBuf, max_tracks: usize) -> Self {
        Self {
            path,
            playlists: Vec::new(),
            max_tracks,
        }
    }

    pub async fn load() -> Result<Self, StoreError> {
        Self::load_from(Self::cache_path(), config::max_playlist_tracks()).await
    }

    /// Reads the snapshots stored at `path`. A missing file yields an empty store.
    pub async fn load_from(path: PathBuf, max_tracks: usize) -> Result<Self, StoreError> {
        let playlists: Vec<Playlist> = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no playlist cache yet");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            playlists,
            max_tracks,
        })
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.playlists)?;
        async_fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), count = self.playlists.len(), "playlists persisted");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.playlists.len()
    }

    pub fn create_playlist(&mut self, uid: &str, name: &str, desc: &str) -> PlaylistInfo {
        let playlist_info = PlaylistInfo::create(uid, name, desc);
        info!(playlist_id = %playlist_info.id, uid, "playlist created");
        self.playlists.push(Playlist::empty(playlist_info.clone()));
        playlist_info
    }

    /// Infos of all playlists owned by `uid`, most recently updated first.
    pub fn playlist_infos(&self, uid: &str) -> Vec<PlaylistInfo> {
        let mut infos: Vec<PlaylistInfo> = self
            .playlists
            .iter()
            .filter(|p| p.is_owned_by(uid))
            .map(|p| p.info().clone())
            .collect();
        utils::sort_playlist_infos(&mut infos);
        infos
    }

    pub fn get_playlist(&self, playlist_id: &str, uid: &str) -> Result<&Playlist, StoreError> {
        let index = self.owned_index(playlist_id, uid)?;
        Ok(&self.playlists[index])
    }

    pub fn delete_playlist(
        &mut self,
        playlist_id: &str,
        uid: &str,
    ) -> Result<PlaylistInfo, StoreError> {
        let index = self.owned_index(playlist_id, uid)?;
        let removed = self.playlists.remove(index);
        info!(playlist_id, uid, "playlist deleted");
        Ok(removed.info().clone())
    }

    pub fn update_playlist_details(
        &mut self,
        playlist_id: &str,
        uid: &str,
        name: &str,
        desc: &str,
    ) -> Result<PlaylistInfo, StoreError> {
        let index = self.owned_index(playlist_id, uid)?;
        let updated = self.playlists[index].with_details(name, desc);
        Ok(self.replace(index, updated).info().clone())
    }

    /// Looks `spotify_id` up in `lookup` and appends it to the playlist.
    pub fn add_track<L: TrackLookup + ?Sized>(
        &mut self,
        playlist_id: &str,
        uid: &str,
        spotify_id: &str,
        lookup: &L,
    ) -> Result<&Playlist, StoreError> {
        let index = self.owned_index(playlist_id, uid)?;

        if self.playlists[index].tracks().len() >= self.max_tracks {
            info!(playlist_id, max = self.max_tracks, "playlist is full");
            return Err(StoreError::PlaylistFull {
                playlist_id: playlist_id.to_string(),
                max: self.max_tracks,
            });
        }

        let Some(track) = lookup.lookup_track_by_id(spotify_id) else {
            info!(spotify_id, "no track with the spotify id");
            return Err(StoreError::TrackNotFound(spotify_id.to_string()));
        };

        let updated = self.playlists[index].add(track);
        Ok(self.replace(index, updated))
    }

    pub fn delete_track(
        &mut self,
        playlist_id: &str,
        uid: &str,
        playlist_track_id: &str,
    ) -> Result<&Playlist, StoreError> {
        let index = self.owned_index(playlist_id, uid)?;

        let Some(playlist_track) = self.playlists[index].find_track(playlist_track_id).cloned()
        else {
            info!(playlist_id, playlist_track_id, "no playlist track with the id");
            return Err(StoreError::PlaylistTrackNotFound(
                playlist_track_id.to_string(),
            ));
        };

        let updated = self.playlists[index].delete(&playlist_track)?;
        Ok(self.replace(index, updated))
    }

    /// Moves the track at `order_from` to `order_to` and returns the new track list.
    pub fn patch_track_order(
        &mut self,
        playlist_id: &str,
        uid: &str,
        order_from: usize,
        order_to: usize,
    ) -> Result<&[PlaylistTrack], StoreError> {
        let index = self.owned_index(playlist_id, uid)?;
        let updated = self.playlists[index]
            .patch_track_order(order_from, order_to)
            .inspect_err(|e| info!(playlist_id, "specified order is invalid: {e}"))?;
        Ok(self.replace(index, updated).tracks())
    }

    pub fn cache_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/playlists.json");
        path
    }

    fn owned_index(&self, playlist_id: &str, uid: &str) -> Result<usize, StoreError> {
        let Some(index) = self.playlists.iter().position(|p| p.id() == playlist_id) else {
            info!(playlist_id, "no playlist with the playlist id");
            return Err(StoreError::PlaylistNotFound(playlist_id.to_string()));
        };

        if !self.playlists[index].is_owned_by(uid) {
            info!(playlist_id, uid, "playlist is not created by the user");
            return Err(StoreError::NotOwner {
                playlist_id: playlist_id.to_string(),
                uid: uid.to_string(),
            });
        }

        Ok(index)
    }

    fn replace(&mut self, index: usize, playlist: Playlist) -> &Playlist {
        self.playlists[index] = playlist;
        &self.playlists[index]
    }
}
