//! Playlist aggregate.
//!
//! A [`Playlist`] is an immutable snapshot of one playlist: its metadata
//! ([`PlaylistInfo`]) and its tracks ([`PlaylistTrack`]) ordered by their
//! 1-based position. Every mutation returns a new snapshot and leaves the
//! receiver untouched, so whoever loaded the playlist decides when and how the
//! result is stored.
//!
//! After every operation the following holds:
//!
//! - the positions of the tracks are exactly `1..=num_tracks`, and the track
//!   list is sorted by them
//! - `num_tracks` equals the number of tracks
//! - `image_url` is the cover of the track at position 1, or `None` when the
//!   playlist is empty
//!
//! A track entry gets a new `updated_at` only when its position changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{types::Track, utils};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("playlist track {0} is not part of this playlist")]
    TrackNotInPlaylist(String),

    #[error("cannot move track from position {from} to {to}, the playlist has {num_tracks} tracks")]
    InvalidOrder {
        from: usize,
        to: usize,
        num_tracks: usize,
    },
}

/// Playlist metadata without the track list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub uid: String,
    pub name: String,
    pub desc: String,
    pub num_tracks: usize,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlaylistInfo {
    /// Metadata for a brand-new, empty playlist owned by `uid`.
    pub fn create(uid: &str, name: &str, desc: &str) -> Self {
        Self::create_at(uid, name, desc, Utc::now())
    }

    pub fn create_at(uid: &str, name: &str, desc: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: utils::new_id(),
            uid: uid.to_string(),
            name: name.to_string(),
            desc: desc.to_string(),
            num_tracks: 0,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One slot of a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: String,
    pub order: usize,
    pub track: Track,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlaylistSnapshot")]
pub struct Playlist {
    playlist_info: PlaylistInfo,
    playlist_tracks: Vec<PlaylistTrack>,
}

// Stored form of a playlist; always normalised through `Playlist::new`.
#[derive(Deserialize)]
struct PlaylistSnapshot {
    playlist_info: PlaylistInfo,
    playlist_tracks: Vec<PlaylistTrack>,
}

impl From<PlaylistSnapshot> for Playlist {
    fn from(snapshot: PlaylistSnapshot) -> Self {
        Playlist::new(snapshot.playlist_info, snapshot.playlist_tracks)
    }
}

impl Playlist {
    /// Builds a playlist from stored state.
    ///
    /// Tracks are sorted by position and renumbered to `1..=n`, closing any
    /// gaps. `num_tracks` and `image_url` are derived from the result, so
    /// stale values in `playlist_info` are ignored. Timestamps are kept.
    pub fn new(playlist_info: PlaylistInfo, mut playlist_tracks: Vec<PlaylistTrack>) -> Self {
        playlist_tracks.sort_by_key(|pt| pt.order);
        for (index, pt) in playlist_tracks.iter_mut().enumerate() {
            pt.order = index + 1;
        }

        let image_url = playlist_tracks
            .first()
            .map(|pt| pt.track.image_url.clone());

        Self {
            playlist_info: PlaylistInfo {
                num_tracks: playlist_tracks.len(),
                image_url,
                ..playlist_info
            },
            playlist_tracks,
        }
    }

    pub fn empty(playlist_info: PlaylistInfo) -> Self {
        Self::new(playlist_info, Vec::new())
    }

    pub fn id(&self) -> &str {
        &self.playlist_info.id
    }

    pub fn info(&self) -> &PlaylistInfo {
        &self.playlist_info
    }

    pub fn tracks(&self) -> &[PlaylistTrack] {
        &self.playlist_tracks
    }

    pub fn is_owned_by(&self, uid: &str) -> bool {
        self.playlist_info.uid == uid
    }

    pub fn find_track(&self, playlist_track_id: &str) -> Option<&PlaylistTrack> {
        self.playlist_tracks
            .iter()
            .find(|pt| pt.id == playlist_track_id)
    }

    /// Appends `track` at position `num_tracks + 1`.
    ///
    /// The same catalog track may be added any number of times; each call
    /// creates a new entry with its own id.
    pub fn add(&self, track: Track) -> Playlist {
        self.add_at(track, Utc::now())
    }

    pub fn add_at(&self, track: Track, now: DateTime<Utc>) -> Playlist {
        let mut playlist_tracks = self.playlist_tracks.clone();
        playlist_tracks.push(PlaylistTrack {
            id: utils::new_id(),
            order: playlist_tracks.len() + 1,
            track,
            created_at: now,
            updated_at: now,
        });
        self.rebuild(playlist_tracks, now)
    }

    /// Removes the entry with the id of `playlist_track` and closes the gap.
    ///
    /// The entry is looked up among the current members, so a stale copy
    /// with an outdated `order` still removes the right slot. Entries after it
    /// move up by one.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::TrackNotInPlaylist`] when no member has that id.
    pub fn delete(&self, playlist_track: &PlaylistTrack) -> Result<Playlist, PlaylistError> {
        self.delete_at(playlist_track, Utc::now())
    }

    pub fn delete_at(
        &self,
        playlist_track: &PlaylistTrack,
        now: DateTime<Utc>,
    ) -> Result<Playlist, PlaylistError> {
        let index = self
            .playlist_tracks
            .iter()
            .position(|pt| pt.id == playlist_track.id)
            .ok_or_else(|| PlaylistError::TrackNotInPlaylist(playlist_track.id.clone()))?;

        let mut playlist_tracks = self.playlist_tracks.clone();
        playlist_tracks.remove(index);
        Ok(self.rebuild(renumber(playlist_tracks, now), now))
    }

    /// Moves the track at position `order_from` to position `order_to`.
    ///
    /// Tracks between the two positions shift by one towards the vacated
    /// slot. Moving a track onto itself returns an identical playlist,
    /// timestamps included.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::InvalidOrder`] when either position is outside
    /// `1..=num_tracks`. Nothing is changed in that case.
    pub fn patch_track_order(
        &self,
        order_from: usize,
        order_to: usize,
    ) -> Result<Playlist, PlaylistError> {
        self.patch_track_order_at(order_from, order_to, Utc::now())
    }

    pub fn patch_track_order_at(
        &self,
        order_from: usize,
        order_to: usize,
        now: DateTime<Utc>,
    ) -> Result<Playlist, PlaylistError> {
        let num_tracks = self.playlist_tracks.len();
        if !utils::is_valid_order(order_from, num_tracks)
            || !utils::is_valid_order(order_to, num_tracks)
        {
            return Err(PlaylistError::InvalidOrder {
                from: order_from,
                to: order_to,
                num_tracks,
            });
        }

        if order_from == order_to {
            return Ok(self.clone());
        }

        let mut playlist_tracks = self.playlist_tracks.clone();
        let moved = playlist_tracks.remove(order_from - 1);
        playlist_tracks.insert(order_to - 1, moved);
        Ok(self.rebuild(renumber(playlist_tracks, now), now))
    }

    /// Replaces name and description. Tracks, cover and count stay as they are.
    pub fn with_details(&self, name: &str, desc: &str) -> Playlist {
        self.with_details_at(name, desc, Utc::now())
    }

    pub fn with_details_at(&self, name: &str, desc: &str, now: DateTime<Utc>) -> Playlist {
        Playlist {
            playlist_info: PlaylistInfo {
                name: name.to_string(),
                desc: desc.to_string(),
                updated_at: now,
                ..self.playlist_info.clone()
            },
            playlist_tracks: self.playlist_tracks.clone(),
        }
    }

    fn rebuild(&self, playlist_tracks: Vec<PlaylistTrack>, now: DateTime<Utc>) -> Playlist {
        let image_url = playlist_tracks
            .first()
            .map(|pt| pt.track.image_url.clone());

        Playlist {
            playlist_info: PlaylistInfo {
                num_tracks: playlist_tracks.len(),
                image_url,
                updated_at: now,
                ..self.playlist_info.clone()
            },
            playlist_tracks,
        }
    }
}

// Positions follow list order; only entries whose position changed are touched.
fn renumber(playlist_tracks: Vec<PlaylistTrack>, now: DateTime<Utc>) -> Vec<PlaylistTrack> {
    playlist_tracks
        .into_iter()
        .enumerate()
        .map(|(index, mut pt)| {
            if pt.order != index + 1 {
                pt.order = index + 1;
                pt.updated_at = now;
            }
            pt
        })
        .collect()
}
