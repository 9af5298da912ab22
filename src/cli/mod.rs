//! # CLI Module
//!
//! User-facing commands of bpmlist. Each command loads the local stores from
//! [`crate::management`], applies exactly one edit, persists, and reports the
//! outcome with the crate's output macros (`info!`, `success!`, `warning!`,
//! `error!`). Failures a command cannot recover from end the process through
//! `error!`.
//!
//! ```text
//! CLI Layer (this module)
//!     ↓
//! Management Layer (JSON stores, ownership checks)
//!     ↓
//! Playlist Aggregate (pure add / delete / reorder)
//! ```
//!
//! All playlist commands act on behalf of the user from
//! [`crate::config::user_id`].
//!
//! ## Usage Patterns
//!
//! ```bash
//! bpmlist tracks import ./tracks.json
//! bpmlist playlists create --name "Running 170"
//! bpmlist playlists add <PLAYLIST_ID> <SPOTIFY_ID>
//! bpmlist playlists move <PLAYLIST_ID> --from 3 --to 1
//! ```

mod playlists;
mod tracks;

pub use playlists::add_track;
pub use playlists::create_playlist;
pub use playlists::delete_playlist;
pub use playlists::list_playlists;
pub use playlists::move_track;
pub use playlists::remove_track;
pub use playlists::rename_playlist;
pub use playlists::show_playlist;
pub use tracks::import_tracks;
pub use tracks::list_tracks;
