mod error;
mod playlist;
mod track;

pub use error::StoreError;
pub use playlist::PlaylistManager;
pub use track::TrackManager;
