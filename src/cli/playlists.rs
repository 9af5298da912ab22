use tabled::Table;

use crate::{
    config, error, info,
    management::{PlaylistManager, TrackManager},
    success, utils, warning,
};

pub async fn list_playlists() {
    let uid = config::user_id();
    let manager = load_playlists().await;

    let infos = manager.playlist_infos(&uid);
    if infos.is_empty() {
        info!("No playlists yet. Create one with bpmlist playlists create --name <NAME>.");
        return;
    }

    println!("{}", Table::new(utils::playlist_info_rows(&infos)));
}

pub async fn create_playlist(name: String, desc: Option<String>) {
    let uid = config::user_id();
    let mut manager = load_playlists().await;

    let playlist_info = manager.create_playlist(&uid, &name, &desc.unwrap_or_default());
    save_playlists(&manager).await;
    success!("Playlist {} created with id {}", playlist_info.name, playlist_info.id);
}

pub async fn show_playlist(playlist_id: String) {
    let uid = config::user_id();
    let manager = load_playlists().await;

    match manager.get_playlist(&playlist_id, &uid) {
        Ok(playlist) => {
            let playlist_info = playlist.info();
            info!("{} ({} tracks)", playlist_info.name, playlist_info.num_tracks);
            if !playlist_info.desc.is_empty() {
                info!("{}", playlist_info.desc);
            }
            if let Some(image_url) = &playlist_info.image_url {
                info!("Cover: {}", image_url);
            }
            if playlist.tracks().is_empty() {
                return;
            }
            println!("{}", Table::new(utils::playlist_track_rows(playlist.tracks())));
        }
        Err(e) => error!("Cannot show playlist. Err: {}", e),
    }
}

pub async fn rename_playlist(playlist_id: String, name: String, desc: Option<String>) {
    let uid = config::user_id();
    let mut manager = load_playlists().await;

    // keep the current description unless a new one is given
    let desc = match desc {
        Some(desc) => desc,
        None => match manager.get_playlist(&playlist_id, &uid) {
            Ok(playlist) => playlist.info().desc.clone(),
            Err(e) => error!("Cannot rename playlist. Err: {}", e),
        },
    };

    match manager.update_playlist_details(&playlist_id, &uid, &name, &desc) {
        Ok(playlist_info) => {
            save_playlists(&manager).await;
            success!("Playlist {} renamed to {}", playlist_info.id, playlist_info.name);
        }
        Err(e) => error!("Cannot rename playlist. Err: {}", e),
    }
}

pub async fn delete_playlist(playlist_id: String) {
    let uid = config::user_id();
    let mut manager = load_playlists().await;

    match manager.delete_playlist(&playlist_id, &uid) {
        Ok(playlist_info) => {
            save_playlists(&manager).await;
            success!("Playlist {} deleted", playlist_info.name);
        }
        Err(e) => error!("Cannot delete playlist. Err: {}", e),
    }
}

pub async fn add_track(playlist_id: String, spotify_id: String) {
    let uid = config::user_id();
    let mut manager = load_playlists().await;
    let tracks = match TrackManager::load().await {
        Ok(tm) => tm,
        Err(e) => error!("Failed to load tracks. Err: {}", e),
    };

    let added = match manager.add_track(&playlist_id, &uid, &spotify_id, &tracks) {
        Ok(playlist) => playlist
            .tracks()
            .last()
            .map(|pt| format!("{} at position {}", pt.track.song_name, pt.order)),
        Err(e) => error!("Cannot add track. Err: {}", e),
    };

    save_playlists(&manager).await;
    if let Some(added) = added {
        success!("Added {}", added);
    }
}

pub async fn remove_track(playlist_id: String, playlist_track_id: String) {
    let uid = config::user_id();
    let mut manager = load_playlists().await;

    let remaining = match manager.delete_track(&playlist_id, &uid, &playlist_track_id) {
        Ok(playlist) => playlist.info().num_tracks,
        Err(e) => error!("Cannot remove track. Err: {}", e),
    };

    save_playlists(&manager).await;
    success!("Track removed, {} tracks left", remaining);
}

pub async fn move_track(playlist_id: String, order_from: usize, order_to: usize) {
    let uid = config::user_id();
    let mut manager = load_playlists().await;

    let rows = match manager.patch_track_order(&playlist_id, &uid, order_from, order_to) {
        Ok(playlist_tracks) => utils::playlist_track_rows(playlist_tracks),
        Err(e) => error!("Cannot move track. Err: {}", e),
    };

    // valid but a no-op, nothing to store
    if order_from == order_to {
        warning!("Track already at position {}", order_to);
        return;
    }

    save_playlists(&manager).await;
    success!("Moved track from position {} to {}", order_from, order_to);
    println!("{}", Table::new(rows));
}

async fn load_playlists() -> PlaylistManager {
    match PlaylistManager::load().await {
        Ok(pm) => pm,
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    }
}

async fn save_playlists(manager: &PlaylistManager) {
    if let Err(e) = manager.persist().await {
        error!("Failed to save playlists. Err: {}", e);
    }
}
