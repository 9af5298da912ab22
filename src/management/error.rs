use thiserror::Error;

use crate::playlist::PlaylistError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no playlist with id {0}")]
    PlaylistNotFound(String),

    #[error("playlist {playlist_id} is not owned by user {uid}")]
    NotOwner { playlist_id: String, uid: String },

    #[error("no track with spotify id {0}")]
    TrackNotFound(String),

    #[error("no playlist track with id {0}")]
    PlaylistTrackNotFound(String),

    #[error("playlist {playlist_id} already holds the maximum of {max} tracks")]
    PlaylistFull { playlist_id: String, max: usize },

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
