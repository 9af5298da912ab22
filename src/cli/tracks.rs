use std::path::PathBuf;

use tabled::Table;

use crate::{error, info, management::TrackManager, success, utils, warning};

pub async fn list_tracks(search: Option<String>) {
    let manager = match TrackManager::load().await {
        Ok(tm) => tm,
        Err(e) => error!("Failed to load tracks. Err: {}", e),
    };

    let mut tracks = manager.get_tracks();
    if tracks.is_empty() {
        info!("No tracks known yet. Import some with bpmlist tracks import <FILE>.");
        return;
    }

    if let Some(term) = search {
        utils::filter_tracks(&mut tracks, &term);
        if tracks.is_empty() {
            warning!("No track matches '{}'", term);
            return;
        }
    }

    // slowest first, the way a tempo list reads
    tracks.sort_by(|a, b| a.bpm.total_cmp(&b.bpm));
    println!("{}", Table::new(utils::track_rows(&tracks)));
}

pub async fn import_tracks(file: PathBuf) {
    let imported = match TrackManager::read_import(&file).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Cannot read {}. Err: {}", file.display(), e),
    };

    let mut manager = match TrackManager::load().await {
        Ok(tm) => tm,
        Err(e) => error!("Failed to load tracks. Err: {}", e),
    };

    let total = imported.len();
    let added = manager.add_tracks(imported);
    if let Err(e) = manager.persist().await {
        error!("Failed to save tracks. Err: {}", e);
    }

    success!(
        "Imported {} tracks ({} new, {} updated), catalog holds {}",
        total,
        added,
        total - added,
        manager.count()
    );
}
